//! Binary PPM (P6) codec, 8-bit RGB with maxval 255.
//!
//! The header is `P6`, width, height and maxval separated by whitespace,
//! followed by exactly one `\n`. Pixel rows follow top row first, each pixel
//! as R,G,B, with no row padding. Alpha is not stored; decoded pixels are
//! opaque.

mod decode;
mod encode;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::image::Image;
use crate::info::ImageInfo;
use crate::limits::{Limits, check_limits};
use alloc::vec::Vec;
use enough::Stop;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let header = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: ImageFormat::Ppm,
    })
}

/// Decode P6 data.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let header = decode::parse_header(data)?;
    check_limits(limits, header.width, header.height)?;
    stop.check()?;
    decode::decode_pixels(data, &header, stop)
}

/// Encode to P6.
pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_ppm(image, stop)
}
