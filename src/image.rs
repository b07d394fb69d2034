//! In-memory RGBA pixel buffer.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Color;
use crate::error::BitmapError;

/// Owned, row-major RGBA pixel buffer.
///
/// Row 0 is the top row. Rows are stored unpadded (`stride() == width()`);
/// file-format row padding is handled by the codecs.
///
/// A buffer with zero area is the canonical *empty* image. Decoders and
/// loaders use it to signal failure, and [`is_valid`](Self::is_valid) tells
/// the two apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a `width` x `height` image filled with `fill`.
    ///
    /// If either dimension is zero the result is the empty image and nothing
    /// is allocated.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`. Use
    /// [`try_new`](Self::try_new) to handle that case.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        match Self::try_new(width, height, fill) {
            Ok(image) => image,
            Err(_) => panic!("image dimensions {width}x{height} overflow"),
        }
    }

    /// Fallible [`new`](Self::new).
    pub fn try_new(width: u32, height: u32, fill: Color) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Ok(Self::empty());
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            stride: width as usize,
            pixels: vec![fill; len],
        })
    }

    /// The canonical empty (invalid) image.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            stride: 0,
            pixels: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of [`Color`] cells between the starts of adjacent rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// True if the image has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Row `y`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height()`.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.row_start(y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Mutable row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height()`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let start = self.row_start(y);
        let width = self.width as usize;
        &mut self.pixels[start..start + width]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.row(y)[self.col(x)]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Color {
        let col = self.col(x);
        &mut self.row_mut(y)[col]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        *self.pixel_mut(x, y) = color;
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + ExactSizeIterator {
        // chunks_exact(0) panics; the empty image has no rows anyway.
        self.pixels
            .chunks_exact(self.stride.max(1))
            .map(|row| &row[..self.width as usize])
    }

    /// Iterate mutable rows top to bottom.
    pub fn rows_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut [Color]> + ExactSizeIterator {
        let width = self.width as usize;
        self.pixels
            .chunks_exact_mut(self.stride.max(1))
            .map(move |row| &mut row[..width])
    }

    /// All cells, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn row_start(&self, y: u32) -> usize {
        assert!(
            y < self.height,
            "row {y} out of bounds for image height {}",
            self.height
        );
        y as usize * self.stride
    }

    fn col(&self, x: u32) -> usize {
        assert!(
            x < self.width,
            "column {x} out of bounds for image width {}",
            self.width
        );
        x as usize
    }
}

/// `imgref` needs a positive stride, so the empty image has no view.
#[cfg(feature = "imgref")]
impl Image {
    /// Borrow as an [`imgref::ImgRef`] without copying.
    ///
    /// Returns `None` for the empty image.
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, Color>> {
        if !self.is_valid() {
            return None;
        }
        Some(imgref::ImgRef::new_stride(
            &self.pixels[..],
            self.width as usize,
            self.height as usize,
            self.stride,
        ))
    }

    /// Borrow mutably as an [`imgref::ImgRefMut`] without copying.
    ///
    /// Returns `None` for the empty image.
    pub fn as_imgref_mut(&mut self) -> Option<imgref::ImgRefMut<'_, Color>> {
        if !self.is_valid() {
            return None;
        }
        let (width, height, stride) = (self.width as usize, self.height as usize, self.stride);
        Some(imgref::ImgRefMut::new_stride(&mut self.pixels[..], width, height, stride))
    }

    /// Copy into an [`imgref::ImgVec`] of [`rgb::RGBA8`].
    ///
    /// Returns `None` for the empty image.
    pub fn to_imgvec(&self) -> Option<imgref::ImgVec<rgb::RGBA8>> {
        if !self.is_valid() {
            return None;
        }
        let mut buf = Vec::with_capacity(self.pixels.len());
        for row in self.rows() {
            buf.extend(row.iter().map(|&c| rgb::RGBA8::from(c)));
        }
        Some(imgref::ImgVec::new(buf, self.width as usize, self.height as usize))
    }
}

#[cfg(feature = "imgref")]
impl TryFrom<imgref::ImgRef<'_, rgb::RGBA8>> for Image {
    type Error = BitmapError;

    /// Copy rows out of a (possibly padded) `ImgRef`.
    fn try_from(src: imgref::ImgRef<'_, rgb::RGBA8>) -> Result<Self, Self::Error> {
        let width = u32::try_from(src.width()).map_err(|_| BitmapError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(src.height()).map_err(|_| BitmapError::DimensionsTooLarge {
            width,
            height: u32::MAX,
        })?;
        let mut image = Image::try_new(width, height, Color::TRANSPARENT)?;
        for (dst, row) in image.rows_mut().zip(src.rows()) {
            for (d, &s) in dst.iter_mut().zip(row) {
                *d = Color::from(s);
            }
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_cell() {
        let fill = Color::rgb(1, 2, 3);
        let image = Image::new(3, 2, fill);
        assert!(image.is_valid());
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.stride(), 3);
        assert_eq!(image.pixels().len(), 6);
        assert!(image.pixels().iter().all(|&c| c == fill));
    }

    #[test]
    fn zero_area_is_canonical_empty() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let image = Image::new(w, h, Color::BLACK);
            assert!(!image.is_valid());
            assert_eq!(image, Image::empty());
            assert_eq!(image.pixels().len(), 0);
            assert_eq!(image.pixels.capacity(), 0);
        }
        assert_eq!(Image::default(), Image::empty());
    }

    #[test]
    fn rows_are_row_major() {
        let mut image = Image::new(2, 3, Color::BLACK);
        image.set_pixel(1, 2, Color::WHITE);
        image.row_mut(0)[0] = Color::rgb(9, 9, 9);
        assert_eq!(image.pixel(1, 2), Color::WHITE);
        assert_eq!(image.pixels()[5], Color::WHITE);
        assert_eq!(image.pixels()[0], Color::rgb(9, 9, 9));
        assert_eq!(image.rows().len(), 3);
        assert_eq!(image.rows().last().unwrap(), &[Color::BLACK, Color::WHITE]);
    }

    #[test]
    fn pixel_mut_edits_in_place() {
        let mut image = Image::new(2, 2, Color::BLACK);
        image.pixel_mut(0, 1).g = 77;
        assert_eq!(image.row(1)[0], Color::new(0, 77, 0, 255));
    }

    #[test]
    fn empty_image_has_no_rows() {
        let image = Image::empty();
        assert_eq!(image.rows().count(), 0);
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds_panics() {
        let image = Image::new(2, 2, Color::BLACK);
        let _ = image.row(2);
    }

    #[test]
    #[should_panic]
    fn pixel_out_of_bounds_panics() {
        let image = Image::new(2, 2, Color::BLACK);
        let _ = image.pixel(2, 0);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_roundtrip() {
        let mut image = Image::new(3, 2, Color::BLACK);
        image.set_pixel(2, 1, Color::new(1, 2, 3, 4));
        let view = image.as_imgref().unwrap();
        assert_eq!(view.width(), 3);
        assert_eq!(view.height(), 2);

        let vec = image.to_imgvec().unwrap();
        let back = Image::try_from(vec.as_ref()).unwrap();
        assert_eq!(back, image);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn empty_image_has_no_imgref_view() {
        let mut image = Image::empty();
        assert!(image.as_imgref().is_none());
        assert!(image.as_imgref_mut().is_none());
        assert!(image.to_imgvec().is_none());
    }
}
