use crate::color::Color;
use crate::error::BitmapError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded [`Image`](crate::Image) buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check decoded dimensions and the resulting buffer size.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels {
            if pixels > max_px {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            let bytes = pixels.saturating_mul(core::mem::size_of::<Color>() as u64);
            if bytes > max_mem {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

/// Apply optional limits, as the codecs receive them.
pub(crate) fn check_limits(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
) -> Result<(), BitmapError> {
    match limits {
        Some(limits) => limits.check(width, height),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        assert!(Limits::default().check(u32::MAX, u32::MAX).is_ok());
    }

    #[test]
    fn memory_counts_four_bytes_per_pixel() {
        let limits = Limits {
            max_memory_bytes: Some(16),
            ..Default::default()
        };
        assert!(limits.check(2, 2).is_ok());
        assert!(matches!(
            limits.check(3, 2),
            Err(BitmapError::LimitExceeded(_))
        ));
    }

    #[test]
    fn pixel_count_limit() {
        let limits = Limits {
            max_pixels: Some(6),
            ..Default::default()
        };
        assert!(limits.check(3, 2).is_ok());
        assert!(limits.check(7, 1).is_err());
    }
}
