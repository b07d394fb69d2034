//! File-level load/save.
//!
//! The `load*`/`save*` functions have a uniform contract: a load returns the
//! empty [`Image`] on any failure and a save returns `false`. The reason is
//! logged at `warn` level through the [`log`] facade. Use [`read_image`] and
//! [`write_image`] to get the [`BitmapError`] instead.

use std::fs;
use std::path::Path;

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::image::Image;

/// Read and decode `path`, choosing the codec from its extension.
pub fn read_image(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
    let path = path.as_ref();
    let format = format_for(path)?;
    read_as(path, format)
}

/// Encode `image` as `format` and write it to `path`.
///
/// The file is created or truncated. Nothing is written if encoding fails.
pub fn write_image(
    path: impl AsRef<Path>,
    image: &Image,
    format: ImageFormat,
) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let bytes = EncodeRequest::new(format).encode(image, Unstoppable)?;
    fs::write(path, bytes)?;
    log::debug!(
        "saved {}x{} {:?} to {}",
        image.width(),
        image.height(),
        format,
        path.display()
    );
    Ok(())
}

/// Load any supported file, choosing the codec from the extension.
pub fn load(path: impl AsRef<Path>) -> Image {
    collapse_load(path.as_ref(), read_image(path.as_ref()))
}

/// Save to any supported file, choosing the codec from the extension.
pub fn save(path: impl AsRef<Path>, image: &Image) -> bool {
    let path = path.as_ref();
    let result = format_for(path).and_then(|format| write_image(path, image, format));
    collapse_save(path, result)
}

pub fn load_bmp(path: impl AsRef<Path>) -> Image {
    let path = path.as_ref();
    collapse_load(path, read_as(path, ImageFormat::Bmp))
}

pub fn save_bmp(path: impl AsRef<Path>, image: &Image) -> bool {
    let path = path.as_ref();
    collapse_save(path, write_image(path, image, ImageFormat::Bmp))
}

pub fn load_ppm(path: impl AsRef<Path>) -> Image {
    let path = path.as_ref();
    collapse_load(path, read_as(path, ImageFormat::Ppm))
}

pub fn save_ppm(path: impl AsRef<Path>, image: &Image) -> bool {
    let path = path.as_ref();
    collapse_save(path, write_image(path, image, ImageFormat::Ppm))
}

fn format_for(path: &Path) -> Result<ImageFormat, BitmapError> {
    match ImageFormat::from_path(path) {
        Some(format) if format.is_supported() => Ok(format),
        Some(format) => Err(BitmapError::no_codec(format)),
        None => Err(BitmapError::UnsupportedVariant(format!(
            "unknown file extension: {}",
            path.display()
        ))),
    }
}

fn read_as(path: &Path, format: ImageFormat) -> Result<Image, BitmapError> {
    let data = fs::read(path)?;
    let image = DecodeRequest::new(&data)
        .with_format(format)
        .decode(Unstoppable)?;
    log::debug!(
        "loaded {}x{} {:?} from {}",
        image.width(),
        image.height(),
        format,
        path.display()
    );
    Ok(image)
}

fn collapse_load(path: &Path, result: Result<Image, BitmapError>) -> Image {
    result.unwrap_or_else(|err| {
        log::warn!("failed to load {}: {err}", path.display());
        Image::empty()
    })
}

fn collapse_save(path: &Path, result: Result<(), BitmapError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("failed to save {}: {err}", path.display());
            false
        }
    }
}
