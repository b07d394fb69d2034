//! Binary PPM (P6) decoder, maxval 255 only.

use enough::Stop;

use crate::color::Color;
use crate::error::BitmapError;
use crate::image::Image;

/// Parsed P6 header (internal).
#[derive(Debug)]
pub(crate) struct PpmHeader {
    pub width: u32,
    pub height: u32,
    /// Offset of the first pixel byte, just past the single `\n`.
    pub data_offset: usize,
}

/// Whitespace as the netpbm tools define it (C `isspace`).
fn is_pnm_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    /// Skip whitespace and `#` comments that run to end of line.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if is_pnm_whitespace(b) {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Result<&'a [u8], BitmapError> {
        self.skip_separators();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|&b| !is_pnm_whitespace(b))
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(BitmapError::UnexpectedEof);
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self, what: &str) -> Result<u32, BitmapError> {
        let token = self.token()?;
        let invalid = || {
            BitmapError::InvalidHeader(alloc::format!(
                "PPM {what} is not a decimal number: {:?}",
                alloc::string::String::from_utf8_lossy(token)
            ))
        };
        token.iter().try_fold(0u32, |acc, &b| {
            if !b.is_ascii_digit() {
                return Err(invalid());
            }
            acc.checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or_else(invalid)
        })
    }
}

/// Parse and validate a P6 header.
pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, BitmapError> {
    let mut reader = HeaderReader { data, pos: 0 };

    if reader.token()? != b"P6" {
        return Err(BitmapError::UnrecognizedFormat);
    }
    let width = reader.number("width")?;
    let height = reader.number("height")?;
    let maxval = reader.number("maxval")?;

    if maxval != 255 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "PPM maxval {maxval} unsupported (only 255)"
        )));
    }

    // Exactly one newline separates the header from the pixel data.
    match data.get(reader.pos) {
        Some(b'\n') => {}
        Some(&other) => {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "expected newline after PPM maxval, found byte 0x{other:02x}"
            )));
        }
        None => return Err(BitmapError::UnexpectedEof),
    }

    if width == 0 {
        return Err(BitmapError::InvalidHeader("PPM width is zero".into()));
    }
    if height == 0 {
        return Err(BitmapError::InvalidHeader("PPM height is zero".into()));
    }

    Ok(PpmHeader {
        width,
        height,
        data_offset: reader.pos + 1,
    })
}

/// Decode the top-down RGB rows that follow a validated header.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &PpmHeader,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let (width, height) = (header.width, header.height);
    let row_bytes = (width as usize)
        .checked_mul(3)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let expected = row_bytes
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    // Trailing bytes past the last row are ignored.
    let pixel_data = data
        .get(header.data_offset..)
        .and_then(|rest| rest.get(..expected))
        .ok_or(BitmapError::UnexpectedEof)?;

    let mut image = Image::try_new(width, height, Color::BLACK)?;
    for (y, (row, src)) in image
        .rows_mut()
        .zip(pixel_data.chunks_exact(row_bytes))
        .enumerate()
    {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (px, rgb) in row.iter_mut().zip(src.chunks_exact(3)) {
            px.r = rgb[0];
            px.g = rgb[1];
            px.b = rgb[2];
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn header_with_mixed_whitespace() {
        let header = parse_header(b"P6 \t3\r\n\n2 255\nrest").unwrap();
        assert_eq!((header.width, header.height), (3, 2));
        assert_eq!(header.data_offset, b"P6 \t3\r\n\n2 255\n".len());
    }

    #[test]
    fn header_with_comments() {
        let data = b"P6\n# made by hand\n1 1\n# depth\n255\n\x01\x02\x03";
        let header = parse_header(data).unwrap();
        let image = decode_pixels(data, &header, &Unstoppable).unwrap();
        assert_eq!(image.pixel(0, 0), Color::rgb(1, 2, 3));
    }

    #[test]
    fn wrong_signature() {
        assert!(matches!(
            parse_header(b"P5\n1 1\n255\n\0"),
            Err(BitmapError::UnrecognizedFormat)
        ));
        assert!(matches!(
            parse_header(b"P66\n1 1\n255\n\0\0\0"),
            Err(BitmapError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn wrong_maxval() {
        assert!(matches!(
            parse_header(b"P6\n1 1\n65535\n\0\0\0\0\0\0"),
            Err(BitmapError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn single_newline_required() {
        assert!(matches!(
            parse_header(b"P6\n1 1\n255 \x01\x02\x03"),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P6\n1 1\n255\r\n\x01\x02\x03"),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P6\n1 1\n255"),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn bad_numbers() {
        assert!(matches!(
            parse_header(b"P6\n-1 1\n255\n"),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P6\n99999999999 1\n255\n"),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P6\n0 1\n255\n"),
            Err(BitmapError::InvalidHeader(_))
        ));
    }

    #[test]
    fn missing_tokens_are_eof() {
        assert!(matches!(parse_header(b""), Err(BitmapError::UnexpectedEof)));
        assert!(matches!(
            parse_header(b"P6\n2 "),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn short_pixel_data_is_eof() {
        let data = b"P6\n2 1\n255\n\x01\x02\x03\x04\x05";
        let header = parse_header(data).unwrap();
        assert!(matches!(
            decode_pixels(data, &header, &Unstoppable),
            Err(BitmapError::UnexpectedEof)
        ));
    }
}
