use alloc::vec::Vec;
use enough::Stop;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::image::Image;

/// Builder for encoding an [`Image`] to BMP or PPM bytes.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: ImageFormat,
}

impl EncodeRequest {
    pub fn new(format: ImageFormat) -> Self {
        Self { format }
    }

    /// 24-bit bottom-up BMP.
    pub fn bmp() -> Self {
        Self::new(ImageFormat::Bmp)
    }

    /// Binary PPM (P6), maxval 255.
    pub fn ppm() -> Self {
        Self::new(ImageFormat::Ppm)
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encode `image`. Fails for the empty image.
    pub fn encode(self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        match self.format {
            ImageFormat::Bmp => crate::bmp::encode(image, &stop),
            ImageFormat::Ppm => crate::ppm::encode(image, &stop),
            other => Err(BitmapError::no_codec(other)),
        }
    }
}
