use super::bgr::BgrImage;
use crate::errors::{HistogramError, Result};
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const MAX_FILE_BYTES: u64 = 500 * 1024 * 1024;
const MAX_MEGAPIXELS: u64 = 100;

fn load_error(path: &Path, message: impl std::fmt::Display) -> HistogramError {
    HistogramError::ImageLoadError {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_error(path, e))
}

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(HistogramError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Refuse files that would not fit comfortably in memory
    if let Ok(metadata) = std::fs::metadata(path) {
        let file_size = metadata.len();
        if file_size > MAX_FILE_BYTES {
            return Err(load_error(
                path,
                format!("File too large: {}MB (max 500MB)", file_size / (1024 * 1024)),
            ));
        }
    }

    // Header only; the pixel data is not touched until the size is known
    let mut header = open_reader(path)?;
    header.no_limits();
    let (width, height) = header.into_dimensions().map_err(|e| load_error(path, e))?;
    let megapixels = (width as u64 * height as u64) / 1_000_000;
    if megapixels > MAX_MEGAPIXELS {
        return Err(load_error(
            path,
            format!("Image too large: {}MP (max 100MP)", megapixels),
        ));
    }

    let img = open_reader(path)?.decode().map_err(|e| load_error(path, e))?;

    tracing::debug!(path = %path.display(), width, height, "loaded image");
    Ok(img)
}

/// Loads a file from disk and converts it to BGR byte order.
pub fn load_bgr_image(path: &Path) -> Result<BgrImage> {
    Ok(BgrImage::from_dynamic(&load_image(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn png_round_trips_into_bgr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        image::RgbImage::from_pixel(6, 3, image::Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();

        let bgr = load_bgr_image(&path).unwrap();
        assert_eq!((bgr.width(), bgr.height()), (6, 3));
        assert!(bgr.pixels().all(|p| p == [0, 0, 255]));
    }

    #[test]
    fn oversized_header_is_rejected_before_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.ppm");
        // 20000 x 20000 declared, no pixel data behind it
        std::fs::write(&path, b"P6\n20000 20000\n255\n").unwrap();

        let err = load_image(&path).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_LOAD_ERROR");
        assert!(err.to_string().contains("Image too large: 400MP"));
    }

    #[test]
    fn undecodable_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_LOAD_ERROR");
    }
}
