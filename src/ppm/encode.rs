//! Binary PPM (P6) encoder.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::BitmapError;
use crate::image::Image;

/// Encode an image as P6 with maxval 255. Alpha is dropped.
pub(crate) fn encode_ppm(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = image.dimensions();
    if !image.is_valid() {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    let pixel_bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let header = format!("P6\n{width} {height}\n255\n");
    let mut out = Vec::with_capacity(header.len().saturating_add(pixel_bytes));
    out.extend_from_slice(header.as_bytes());

    for (y, row) in image.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }

    Ok(out)
}
