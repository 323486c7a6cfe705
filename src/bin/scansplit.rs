use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use tomoscan::locator::locate_code;
use tomoscan::models::{Image, Mono};
use tomoscan::ppm::{self, PpmError};
use tomoscan::tomography::{piecewise_integrate, project};

/// Locate and split stacked 2D codes out of a scanned PPM image.
///
/// The defaults match the reference scan layout: a coarse crop around the
/// code block, four codes of 216x216 pixels separated by 10 blank pixels.
#[derive(Parser)]
#[command(name = "scansplit", version)]
struct Cli {
    /// Input scan (PPM, P3 or P6)
    image: PathBuf,

    /// Left edge of the coarse crop region
    #[arg(long, default_value_t = 1350)]
    crop_x: usize,

    /// Top edge of the coarse crop region
    #[arg(long, default_value_t = 232)]
    crop_y: usize,

    /// Width of the coarse crop region
    #[arg(long, default_value_t = 1212)]
    crop_width: usize,

    /// Height of the coarse crop region
    #[arg(long, default_value_t = 428)]
    crop_height: usize,

    /// Edge length of a single 2D code in pixels
    #[arg(long, default_value_t = 216)]
    code_size: usize,

    /// Column search bound for the leftmost code
    #[arg(long, default_value_t = 250)]
    code_left: usize,

    /// Blank gap between neighboring codes
    #[arg(long, default_value_t = 10)]
    code_padding: usize,

    /// Number of codes to split out
    #[arg(long, default_value_t = 4)]
    parts: usize,

    /// Oblique sweep magnitude for the tilt search
    #[arg(long, default_value_t = 50)]
    max_oblique: i32,

    /// Directory for output images
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PpmError> {
    println!("Loading image...");
    let scan = ppm::load_ppm(&cli.image)?;

    println!("Thresholding...");
    let region = scan.crop(
        cli.crop_x,
        cli.crop_x + cli.crop_width,
        cli.crop_y,
        cli.crop_y + cli.crop_height,
    );
    let mono = region.threshold_otsu();
    ppm::save_ppm(cli.out_dir.join("thresholded.ppm"), &mono)?;

    // Horizontal tilt calibration and precise vertical crop
    println!("Tomography projection...");
    let loc = locate_code(&mono, cli.max_oblique, cli.code_size);
    let band = mono.rotate(loc.tilt.atan(), 0, 0).crop(
        0,
        cli.crop_width,
        loc.y0,
        loc.y0 + cli.code_size,
    );

    println!("Splitting 2D codes...");

    // transpose so the same projection machinery finds column offsets
    let band_t = band.transpose();
    let mut tomo = project(&band_t, 0.0);
    piecewise_integrate(&mut tomo, cli.code_size);

    let top = first_code_offset(&tomo[..cli.code_left]);
    println!("position: {top}");

    let mut top = top;
    for i in 1..=cli.parts {
        let part: Image<Mono> = band_t
            .crop(0, cli.code_size, top, top + cli.code_size)
            .transpose();
        ppm::save_ppm(cli.out_dir.join(format!("part_{i}.ppm")), &part)?;
        top += cli.code_size + cli.code_padding;
    }

    Ok(())
}

/// First maximal window sum wins, matching the locator's tie-break
fn first_code_offset(window_sums: &[i64]) -> usize {
    let mut best_idx = 0;
    let mut best = window_sums[0];
    for (i, &v) in window_sums.iter().enumerate().skip(1) {
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    best_idx
}
