use enough::Stop;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::image::Image;
use crate::limits::Limits;

/// Builder for decoding BMP or PPM bytes into an [`Image`].
///
/// The format is sniffed from magic bytes unless set with
/// [`with_format`](Self::with_format).
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    format: Option<ImageFormat>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            format: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode as `format` instead of sniffing.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Decode the whole image. Nothing partially decoded is ever returned.
    pub fn decode(self, stop: impl Stop) -> Result<Image, BitmapError> {
        let format = self
            .format
            .or_else(|| ImageFormat::detect(self.data))
            .ok_or(BitmapError::UnrecognizedFormat)?;
        match format {
            ImageFormat::Bmp => crate::bmp::decode(self.data, self.limits, &stop),
            ImageFormat::Ppm => crate::ppm::decode(self.data, self.limits, &stop),
            other => Err(BitmapError::no_codec(other)),
        }
    }
}
