use crate::error::BitmapError;
use crate::format::ImageFormat;

/// Image dimensions and format, read from headers only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe headers without decoding pixel data.
    ///
    /// Applies the same header validation as a full decode, so a file that
    /// probes successfully fails to decode only if its pixel data is short.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        match ImageFormat::detect(data) {
            Some(ImageFormat::Bmp) => crate::bmp::probe(data),
            Some(ImageFormat::Ppm) => crate::ppm::probe(data),
            Some(other) => Err(BitmapError::no_codec(other)),
            None => Err(BitmapError::UnrecognizedFormat),
        }
    }
}
