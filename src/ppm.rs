//! PPM raster codec: the crate's only boundary with the filesystem.
//!
//! Reads portable pixel maps in P3 (ASCII) and P6 (binary, 8-bit) flavors
//! and always writes P6. Decoding is a pure function over the file bytes;
//! the analysis core only ever sees a fully materialized [`Image`].

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::models::image::Image;
use crate::models::pixel::{Pixel, Rgb};

/// Errors raised at the codec boundary
#[derive(Debug, Error)]
pub enum PpmError {
    /// Source file missing or unreadable, or destination unopenable
    #[error("cannot open file: {0}")]
    Io(#[from] io::Error),

    /// Magic number is neither `P3` nor `P6`
    #[error("unrecognized PPM format tag `{0}`")]
    UnsupportedFormat(String),

    /// Header or pixel data is corrupt or truncated
    #[error("invalid PPM image: {0}")]
    Malformed(&'static str),
}

enum PpmFormat {
    /// `P3`, ASCII sample encoding
    Ascii,
    /// `P6`, binary 8-bit sample encoding
    Binary,
}

/// Load a PPM file into an RGB image
pub fn load_ppm<P: AsRef<Path>>(path: P) -> Result<Image<Rgb>, PpmError> {
    let bytes = fs::read(path)?;
    decode_ppm(&bytes)
}

/// Save an image as a binary PPM (P6, maxval 255), converting pixels to RGB
pub fn save_ppm<P: Pixel, Q: AsRef<Path>>(path: Q, img: &Image<P>) -> Result<(), PpmError> {
    fs::write(path, encode_ppm(img))?;
    Ok(())
}

/// Decode PPM bytes into an RGB image
pub fn decode_ppm(bytes: &[u8]) -> Result<Image<Rgb>, PpmError> {
    let mut cursor = ByteCursor::new(bytes);

    let magic = cursor.token()?;
    let format = match magic {
        b"P3" => PpmFormat::Ascii,
        b"P6" => PpmFormat::Binary,
        other => {
            return Err(PpmError::UnsupportedFormat(
                String::from_utf8_lossy(other).into_owned(),
            ));
        }
    };

    let width = cursor.number()?;
    let height = cursor.number()?;
    let maxval = cursor.number()?;
    if maxval == 0 || maxval > 255 {
        return Err(PpmError::Malformed("unsupported maxval"));
    }

    let mut px = Vec::with_capacity(width * height);
    match format {
        PpmFormat::Ascii => {
            for _ in 0..width * height {
                let r = cursor.sample()?;
                let g = cursor.sample()?;
                let b = cursor.sample()?;
                px.push(Rgb::new(r, g, b));
            }
        }
        PpmFormat::Binary => {
            // exactly one whitespace byte separates the header from the data
            cursor.skip_one_whitespace()?;
            let data = cursor.remaining();
            if data.len() < width * height * 3 {
                return Err(PpmError::Malformed("truncated pixel data"));
            }
            for triple in data[..width * height * 3].chunks_exact(3) {
                px.push(Rgb::new(triple[0], triple[1], triple[2]));
            }
        }
    }

    Ok(Image::from_raw(width, height, px))
}

/// Encode an image as binary PPM bytes (P6 header, RGB triples)
pub fn encode_ppm<P: Pixel>(img: &Image<P>) -> Vec<u8> {
    let mut out = Vec::with_capacity(32 + img.pixels().len() * 3);
    out.extend_from_slice(format!("P6\n{} {} 255\n", img.width(), img.height()).as_bytes());

    for &px in img.pixels() {
        let rgb = px.to_rgb();
        out.extend_from_slice(&[rgb.r, rgb.g, rgb.b]);
    }

    out
}

/// Minimal scanner over raw PPM bytes. Comment lines start with `#` and may
/// appear anywhere whitespace is allowed in the header.
struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Result<&'a [u8], PpmError> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(PpmError::Malformed("unexpected end of file"));
        }
        Ok(&self.bytes[start..self.pos])
    }

    fn number(&mut self) -> Result<usize, PpmError> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(PpmError::Malformed("invalid number in header"))
    }

    fn sample(&mut self) -> Result<u8, PpmError> {
        let value = self.number()?;
        u8::try_from(value).map_err(|_| PpmError::Malformed("sample out of range"))
    }

    fn skip_one_whitespace(&mut self) -> Result<(), PpmError> {
        if self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
            Ok(())
        } else {
            Err(PpmError::Malformed("missing header terminator"))
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pixel::Mono;

    #[test]
    fn test_decode_ascii_with_comments() {
        let data = b"P3\n# a comment line\n2 2\n255\n255 0 0  0 255 0\n0 0 255  10 20 30\n";
        let img = decode_ppm(data).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get(0, 0), Rgb::new(255, 0, 0));
        assert_eq!(img.get(1, 0), Rgb::new(0, 255, 0));
        assert_eq!(img.get(0, 1), Rgb::new(0, 0, 255));
        assert_eq!(img.get(1, 1), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_decode_binary() {
        let mut data = b"P6\n2 1 255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 250, 251, 252]);
        let img = decode_ppm(&data).unwrap();
        assert_eq!(img.get(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(img.get(1, 0), Rgb::new(250, 251, 252));
    }

    #[test]
    fn test_decode_rejects_unknown_magic() {
        let err = decode_ppm(b"P5\n2 2 255\n").unwrap_err();
        assert!(matches!(err, PpmError::UnsupportedFormat(tag) if tag == "P5"));
    }

    #[test]
    fn test_decode_rejects_truncated_binary() {
        let mut data = b"P6\n2 2 255\n".to_vec();
        data.extend_from_slice(&[0; 5]);
        let err = decode_ppm(&data).unwrap_err();
        assert!(matches!(err, PpmError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_garbage_header() {
        let err = decode_ppm(b"P3\nxyz 2 255\n").unwrap_err();
        assert!(matches!(err, PpmError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_oversized_ascii_sample() {
        let err = decode_ppm(b"P3\n1 1 255\n300 0 0\n").unwrap_err();
        assert!(matches!(err, PpmError::Malformed(_)));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let px = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(12, 34, 56),
            Rgb::new(200, 100, 50),
            Rgb::new(1, 2, 3),
            Rgb::new(9, 8, 7),
        ];
        let img = Image::from_raw(3, 2, px);
        let decoded = decode_ppm(&encode_ppm(&img)).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_encode_converts_to_rgb() {
        let img = Image::from_raw(2, 1, vec![Mono::BLACK, Mono::WHITE]);
        let decoded = decode_ppm(&encode_ppm(&img)).unwrap();
        assert_eq!(decoded.get(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(decoded.get(1, 0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_ppm("definitely/not/here.ppm").unwrap_err();
        assert!(matches!(err, PpmError::Io(_)));
    }
}
