//! BMP encoder: uncompressed 24-bit BMP.

use alloc::vec::Vec;
use enough::Stop;

use super::{BMP_HEADER_SIZE, IMPORTANT_COLORS, INFO_HEADER_SIZE, PIXELS_PER_METER, stride_bytes};
use crate::error::BitmapError;
use crate::image::Image;

/// Encode an image as a 24-bit bottom-up BMP.
pub(crate) fn encode_bmp(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = image.dimensions();
    if !image.is_valid() {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    let too_large = || BitmapError::DimensionsTooLarge { width, height };

    // Width and height are signed 32-bit fields on disk.
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(too_large());
    }
    let row_stride = stride_bytes(width).ok_or_else(too_large)?;
    let pixel_data_size = row_stride
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(BMP_HEADER_SIZE)
        .ok_or_else(too_large)?;
    let file_size_field = u32::try_from(file_size).map_err(|_| too_large())?;
    let data_size_field = u32::try_from(pixel_data_size).map_err(|_| too_large())?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, file_size_field, data_size_field, width, height);

    let pad_bytes = row_stride - width as usize * 3;
    for (i, row) in image.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), file_size);
    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: u32,
    pixel_data_size: u32,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(BMP_HEADER_SIZE as u32).to_le_bytes()); // data offset

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes()); // h resolution (300 DPI)
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&IMPORTANT_COLORS.to_le_bytes());
}
