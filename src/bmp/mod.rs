//! BMP codec: uncompressed 24-bit, bottom-up, `BITMAPINFOHEADER`.
//!
//! Rows on disk are stored bottom row first, each pixel as B,G,R, with every
//! row padded to a multiple of 4 bytes (see [`stride_bytes`]). Alpha is not
//! stored; decoded pixels are opaque.
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::image::Image;
use crate::info::ImageInfo;
use crate::limits::{Limits, check_limits};
use alloc::vec::Vec;
use enough::Stop;

/// Size of the `BITMAPFILEHEADER`.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the `BITMAPINFOHEADER`.
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the pixel data in every file this crate writes.
pub const BMP_HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 11811 pixels per meter, about 300 DPI.
const PIXELS_PER_METER: u32 = 11811;
/// Written verbatim into the "important colors" field.
const IMPORTANT_COLORS: u32 = 0x100_0000;

/// Bytes per stored row: `3 * width` rounded up to a multiple of 4.
///
/// Returns `None` on overflow.
pub fn stride_bytes(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let header = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: ImageFormat::Bmp,
    })
}

/// Decode BMP data.
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

/// Encode to BMP.
pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(image, stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_law() {
        assert_eq!(stride_bytes(1), Some(4));
        assert_eq!(stride_bytes(2), Some(8));
        assert_eq!(stride_bytes(3), Some(12));
        assert_eq!(stride_bytes(4), Some(12));
        assert_eq!(stride_bytes(5), Some(16));
        assert_eq!(stride_bytes(0), Some(0));
        for w in 1..64u32 {
            let s = stride_bytes(w).unwrap();
            assert_eq!(s % 4, 0);
            assert!(s >= w as usize * 3 && s < w as usize * 3 + 4);
        }
    }
}
