use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use prism_ml::{Quantizer, QuantizeError};

/// Image compression using k-means color quantization.
#[derive(Parser)]
#[command(name = "prism-ml")]
#[command(about = "Compress an image by clustering its pixels into a fixed number of colors")]
struct Args {
    /// Number of quantized colors
    #[arg(long)]
    colors: usize,

    /// Path to the image to compress
    #[arg(long)]
    image_path: PathBuf,

    /// Maximum number of refinement iterations
    #[arg(long)]
    iters: usize,

    /// Open the compressed image in the system viewer when done
    #[arg(long)]
    show: bool,

    /// Seed for the centroid initialization; omit for a fresh random run
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the final palette as JSON next to the compressed image
    #[arg(long)]
    palette: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), QuantizeError> {
    let image = prism_ml::quantize::load_image(&args.image_path)?;

    let quantizer = Quantizer::new(args.colors, args.iters);
    let quantized = match args.seed {
        Some(seed) => quantizer.quantize(&image, &mut StdRng::seed_from_u64(seed))?,
        None => quantizer.quantize(&image, &mut rand::thread_rng())?,
    };

    if quantized.converged {
        println!("Converged after {} iterations", quantized.iterations);
    } else {
        println!("Stopped at the iteration cap ({} iterations)", quantized.iterations);
    }

    let output_path = compressed_path(&args.image_path);
    quantized.to_image().save(&output_path)?;
    println!("Wrote {}", output_path.display());

    let initial_size = fs::metadata(&args.image_path)?.len();
    let final_size = fs::metadata(&output_path)?.len();
    let rate = (initial_size as f64 - final_size as f64) / initial_size as f64;
    println!("Image was compressed {:.3}%", 100.0 * rate);

    if args.palette {
        let palette_path = output_path.with_extension("json");
        quantized.palette.save_json(&palette_path.to_string_lossy())?;
        println!("Wrote {}", palette_path.display());
    }

    if args.show {
        open_in_viewer(&output_path)?;
    }

    Ok(())
}

/// `photo.png` -> `photo_compressed.png`, kept next to the source.
fn compressed_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let mut name = format!("{stem}_compressed");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// Hands the file to the platform's default image viewer.
fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command.spawn().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_path_keeps_extension_and_directory() {
        let path = compressed_path(Path::new("/tmp/photos/cat.png"));
        assert_eq!(path, PathBuf::from("/tmp/photos/cat_compressed.png"));
    }

    #[test]
    fn test_compressed_path_without_extension() {
        let path = compressed_path(Path::new("cat"));
        assert_eq!(path, PathBuf::from("cat_compressed"));
    }
}
