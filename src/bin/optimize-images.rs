//! Offline performer-photo optimizer.
//!
//! Walks the performer photo directory, downsamples oversized jpg/jpeg/png
//! shots to bounded dimensions preserving aspect ratio, re-encodes them as
//! WebP next to the originals, and reports per-file and aggregate size
//! savings. Files already converted, and the nophoto placeholder, are
//! skipped. Individual failures log and continue; a directory read failure
//! is fatal.

use anyhow::{Context, Result};
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

const PERFORMERS_DIR: &str = "assets/images/performers";
const MAX_WIDTH: u32 = 1200;
const MAX_HEIGHT: u32 = 1600;

fn is_convertible(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !matches!(ext.as_str(), "jpg" | "jpeg" | "png") {
        return false;
    }
    path.file_name()
        .map(|n| !n.to_string_lossy().eq_ignore_ascii_case("nophoto.png"))
        .unwrap_or(false)
}

fn bounded_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width <= MAX_WIDTH && height <= MAX_HEIGHT {
        return (width, height);
    }
    // Scale along the tighter axis, keeping aspect ratio.
    if width as u64 * MAX_HEIGHT as u64 > height as u64 * MAX_WIDTH as u64 {
        let scaled_height =
            ((height as u64 * MAX_WIDTH as u64) / width as u64).max(1) as u32;
        (MAX_WIDTH, scaled_height)
    } else {
        let scaled_width =
            ((width as u64 * MAX_HEIGHT as u64) / height as u64).max(1) as u32;
        (scaled_width, MAX_HEIGHT)
    }
}

fn optimize_image(input: &Path, output: &Path) -> Result<(u64, u64)> {
    let img = image::open(input)
        .with_context(|| format!("failed to decode {}", input.display()))?;

    let (width, height) = img.dimensions();
    let (new_width, new_height) = bounded_dimensions(width, height);
    let img = if (new_width, new_height) != (width, height) {
        img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
    } else {
        img
    };

    img.save_with_format(output, image::ImageFormat::WebP)
        .with_context(|| format!("failed to encode {}", output.display()))?;

    let original_size = fs::metadata(input)?.len();
    let new_size = fs::metadata(output)?.len();
    Ok((original_size, new_size))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() {
    println!("Starting image optimization...\n");

    let dir = Path::new(PERFORMERS_DIR);
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("✗ Error reading directory {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    };

    let mut inputs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_convertible(path))
        .collect();
    inputs.sort();

    println!("Found {} images to optimize\n", inputs.len());

    let mut success_count = 0u32;
    let mut fail_count = 0u32;
    let mut total_original = 0u64;
    let mut total_new = 0u64;

    for input in &inputs {
        let output = input.with_extension("webp");
        if output.exists() {
            println!("⊘ {} → {} (already exists, skipping)", file_name(input), file_name(&output));
            continue;
        }

        match optimize_image(input, &output) {
            Ok((original_size, new_size)) => {
                let savings = 100.0 * (1.0 - new_size as f64 / original_size as f64);
                println!("✓ {} → {} ({:.1}% smaller)", file_name(input), file_name(&output), savings);
                success_count += 1;
                total_original += original_size;
                total_new += new_size;
            }
            Err(e) => {
                eprintln!("✗ Error optimizing {}: {:#}", input.display(), e);
                fail_count += 1;
            }
        }
    }

    println!("\n=== Optimization Complete ===");
    println!("✓ Successfully optimized: {}", success_count);
    println!("✗ Failed: {}", fail_count);
    if total_original > 0 {
        let total_savings = 100.0 * (1.0 - total_new as f64 / total_original as f64);
        println!("📦 Original size: {:.2} MB", total_original as f64 / 1024.0 / 1024.0);
        println!("📦 Optimized size: {:.2} MB", total_new as f64 / 1024.0 / 1024.0);
        println!("💾 Total savings: {:.1}%", total_savings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_dimensions_untouched_when_small() {
        assert_eq!(bounded_dimensions(800, 600), (800, 600));
    }

    #[test]
    fn test_bounded_dimensions_wide_image() {
        let (w, h) = bounded_dimensions(2400, 1200);
        assert_eq!(w, MAX_WIDTH);
        assert_eq!(h, 600);
    }

    #[test]
    fn test_bounded_dimensions_tall_image() {
        let (w, h) = bounded_dimensions(1000, 3200);
        assert_eq!(h, MAX_HEIGHT);
        assert_eq!(w, 500);
    }

    #[test]
    fn test_is_convertible_skips_placeholder_and_webp() {
        assert!(is_convertible(Path::new("photos/Jack Carter.jpg")));
        assert!(!is_convertible(Path::new("photos/nophoto.png")));
        assert!(!is_convertible(Path::new("photos/Jack Carter.webp")));
        assert!(!is_convertible(Path::new("photos/notes.txt")));
    }
}
