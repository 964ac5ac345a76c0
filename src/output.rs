//! File naming, output directory setup, and JPEG saving.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::GenError;

/// Extension of every generated file.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Suffix of the staging file written before the final rename.
const PARTIAL_SUFFIX: &str = "part";

/// File name for the image at `index`, zero-padded to four digits.
#[must_use]
pub fn image_filename(index: u64) -> String {
    format!("image_{index:04}.{IMAGE_EXTENSION}")
}

/// Full path for the image at `index` inside `dir`.
#[must_use]
pub fn image_path(dir: &Path, index: u64) -> PathBuf {
    dir.join(image_filename(index))
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), GenError> {
    std::fs::create_dir_all(dir)?;
    log::debug!("Output directory ready: {}", dir.display());
    Ok(())
}

/// Encode `img` as JPEG and write it to `path`, replacing any existing file.
///
/// Bytes go to a `.part` sibling first and are renamed into place, so a
/// watcher of `path` never sees a truncated image. The staging file is
/// removed if encoding or writing fails.
///
/// # Errors
///
/// Returns an error if encoding, writing, or the rename fails.
pub fn save_jpeg(img: &RgbImage, quality: u8, path: &Path) -> Result<(), GenError> {
    let staging = staging_path(path);

    let written = write_jpeg(img, quality, &staging).and_then(|()| {
        std::fs::rename(&staging, path)?;
        Ok(())
    });
    if written.is_err() {
        if let Err(e) = std::fs::remove_file(&staging) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Cannot remove {}: {e}", staging.display());
            }
        }
    }
    written
}

fn write_jpeg(img: &RgbImage, quality: u8, path: &Path) -> Result<(), GenError> {
    let mut writer = BufWriter::new(File::create(path)?);
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?;
    writer.flush()?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    path.with_file_name(name)
}
