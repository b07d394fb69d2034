//! # imglib
//!
//! An owned RGBA pixel buffer ([`Image`] of [`Color`]) plus decoders and
//! encoders for two uncompressed formats:
//!
//! - **BMP**: 24 bits per pixel, `BITMAPINFOHEADER`, bottom-up B,G,R rows
//!   padded to 4 bytes.
//! - **PPM (P6)**: binary RGB with maxval 255, top-down rows, no padding.
//!
//! Both formats drop alpha on encode and decode to opaque pixels, so RGB
//! round-trips exactly.
//!
//! ## Failure model
//!
//! The byte-level functions return [`BitmapError`]. Nothing partially decoded
//! is ever returned: a short file is [`BitmapError::UnexpectedEof`], not a
//! zero-filled image.
//!
//! With the `std` feature (on by default) the path-level functions
//! ([`load`], [`save`], [`load_bmp`], [`save_ppm`], ...) collapse every
//! failure into the empty image or `false`, logging the reason through
//! [`log`].
//!
//! ## Non-Goals
//!
//! - Compressed, palettized or non-24-bit BMP
//! - ASCII PNM, PGM/PAM/PFM, 16-bit PPM
//! - JPEG (recognized by [`ImageFormat`], never decoded)
//! - Color management
//!
//! ## Usage
//!
//! ```
//! use imglib::{Color, DecodeRequest, EncodeRequest, Image, ImageInfo};
//! use enough::Unstoppable;
//!
//! let mut image = Image::new(2, 1, Color::BLACK);
//! image.set_pixel(0, 0, Color::rgb(255, 0, 0));
//! image.set_pixel(1, 0, Color::rgb(0, 255, 0));
//!
//! let bmp = EncodeRequest::bmp().encode(&image, Unstoppable)?;
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(&bmp)?;
//! assert_eq!((info.width, info.height), (2, 1));
//!
//! let decoded = DecodeRequest::new(&bmp).decode(Unstoppable)?;
//! assert_eq!(decoded, image);
//! # Ok::<(), imglib::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod color;
mod error;
mod format;
mod image;
mod info;
mod limits;

pub mod bmp;
mod ppm;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod io;

// Re-exports
pub use color::Color;
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BitmapError;
pub use format::ImageFormat;
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;

#[cfg(feature = "std")]
pub use io::{load, load_bmp, load_ppm, read_image, save, save_bmp, save_ppm, write_image};

use alloc::vec::Vec;

/// Decode BMP or PPM, detecting the format from magic bytes.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// [`decode`] with resource limits.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}

/// Decode a 24-bit BMP.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data)
        .with_format(ImageFormat::Bmp)
        .decode(stop)
}

/// Decode a binary PPM (P6, maxval 255).
pub fn decode_ppm(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data)
        .with_format(ImageFormat::Ppm)
        .decode(stop)
}

/// Encode as a 24-bit bottom-up BMP.
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::bmp().encode(image, stop)
}

/// Encode as binary PPM (P6, maxval 255).
pub fn encode_ppm(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::ppm().encode(image, stop)
}
