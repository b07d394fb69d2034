//! BMP decoder: uncompressed 24-bit, `BITMAPINFOHEADER` only.

use enough::Stop;

use super::{BMP_HEADER_SIZE, FILE_HEADER_SIZE, INFO_HEADER_SIZE, stride_bytes};
use crate::color::Color;
use crate::error::BitmapError;
use crate::image::Image;

// ── Cursor for reading from &[u8] ───────────────────────────────────

/// Bounds-checked little-endian reader. Every short read is an error.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes()?))
    }
}

// ── Parsed BMP header info ──────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
    /// Byte offset of the first (bottom) pixel row.
    pub data_offset: usize,
}

/// Parse and validate the file and info headers.
pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    let mut cursor = Cursor::new(data);

    if cursor.read_fixed_bytes::<2>()? != *b"BM" {
        return Err(BitmapError::UnrecognizedFormat);
    }
    let _file_size = cursor.get_u32_le()?;
    cursor.skip(4)?; // reserved
    let data_offset = cursor.get_u32_le()?;

    let info_size = cursor.get_u32_le()?;
    let width = cursor.get_i32_le()?;
    let height = cursor.get_i32_le()?;
    let _planes = cursor.get_u16_le()?;
    let bpp = cursor.get_u16_le()?;
    let compression = cursor.get_u32_le()?;
    // image size, x/y resolution, colors used, important colors
    cursor.skip(20)?;
    debug_assert_eq!(cursor.pos, BMP_HEADER_SIZE);

    if info_size != INFO_HEADER_SIZE as u32 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP info header size is {info_size}, expected {INFO_HEADER_SIZE}"
        )));
    }
    if bpp != 24 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP bit depth {bpp} unsupported (only 24)"
        )));
    }
    if compression != 0 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP compression type {compression} unsupported"
        )));
    }
    if width <= 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP width is {width}"
        )));
    }
    if height <= 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP height is {height} (top-down rows unsupported)"
        )));
    }
    if (data_offset as usize) < FILE_HEADER_SIZE + INFO_HEADER_SIZE {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP pixel data offset {data_offset} overlaps the header"
        )));
    }

    Ok(BmpHeader {
        width: width as u32,
        height: height as u32,
        data_offset: data_offset as usize,
    })
}

/// Decode the bottom-up BGR rows that follow a validated header.
///
/// Returns [`BitmapError::UnexpectedEof`] if any row, padding included, is
/// cut short; no partially filled image escapes.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let (width, height) = (header.width, header.height);
    let stride = stride_bytes(width).ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    // Reject truncated input before allocating anything.
    let needed = stride
        .checked_mul(height as usize)
        .and_then(|n| n.checked_add(header.data_offset))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if data.len() < needed {
        return Err(BitmapError::UnexpectedEof);
    }

    let mut image = Image::try_new(width, height, Color::BLACK)?;
    let mut cursor = Cursor::new(data);
    cursor.set_position(header.data_offset)?;

    let row_bytes = width as usize * 3;
    for (i, row) in image.rows_mut().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        let src = cursor.read_bytes(stride)?;
        for (px, bgr) in row.iter_mut().zip(src[..row_bytes].chunks_exact(3)) {
            px.b = bgr[0];
            px.g = bgr[1];
            px.r = bgr[2];
        }
    }

    Ok(image)
}
