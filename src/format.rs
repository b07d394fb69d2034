/// Image file format, detected from a file extension or from magic bytes.
///
/// `Jpeg` is recognized so callers can report it, but this crate has no JPEG
/// codec; decoding or encoding it returns
/// [`BitmapError::UnsupportedVariant`](crate::BitmapError::UnsupportedVariant).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Binary PPM (P6), 8-bit RGB.
    Ppm,
    /// Windows bitmap, uncompressed 24-bit.
    Bmp,
    /// JPEG/JFIF (recognized only).
    Jpeg,
}

impl ImageFormat {
    /// Match a file extension, with or without the leading dot, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.eq_ignore_ascii_case("ppm") {
            Some(Self::Ppm)
        } else if ext.eq_ignore_ascii_case("bmp") {
            Some(Self::Bmp)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Match the extension of `path`.
    #[cfg(feature = "std")]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Sniff the format from the first bytes of a file.
    pub fn detect(data: &[u8]) -> Option<Self> {
        match data {
            [b'B', b'M', ..] => Some(Self::Bmp),
            [b'P', b'6', ..] => Some(Self::Ppm),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Ppm => "ppm",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
        }
    }

    /// Whether this crate can decode and encode the format.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Ppm | Self::Bmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert_eq!(ImageFormat::from_extension(".ppm"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_extension("BMP"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension(".jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("png"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn paths() {
        use std::path::Path;
        assert_eq!(
            ImageFormat::from_path(Path::new("out/picture.bmp")),
            Some(ImageFormat::Bmp)
        );
        assert_eq!(ImageFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn magic_bytes() {
        assert_eq!(ImageFormat::detect(b"BM\0\0"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::detect(b"P6\n1 1\n255\n"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::detect(b"P5"), None);
        assert_eq!(ImageFormat::detect(b"B"), None);
    }

    #[test]
    fn extension_roundtrips() {
        for fmt in [ImageFormat::Ppm, ImageFormat::Bmp, ImageFormat::Jpeg] {
            assert_eq!(ImageFormat::from_extension(fmt.extension()), Some(fmt));
        }
        assert!(!ImageFormat::Jpeg.is_supported());
    }
}
