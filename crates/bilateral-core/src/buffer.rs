//! Single-channel image buffer
//!
//! `GrayBuffer` is the fundamental image container of the engine: one
//! unsigned 8-bit sample per pixel, stored row-major with no padding.
//!
//! # Ownership model
//!
//! The buffer exclusively owns its pixel data for its entire lifetime.
//! Dimensions are fixed at construction and the data vector is never
//! reallocated, so slice views returned by [`GrayBuffer::as_slice`] and
//! [`GrayBuffer::as_mut_slice`] stay valid across any number of filter
//! passes. Callers that cannot hold a borrow use the bulk
//! [`copy_from_slice`](GrayBuffer::copy_from_slice) /
//! [`copy_to_slice`](GrayBuffer::copy_to_slice) API instead.

use crate::error::{Error, Result};

/// Single-channel 8-bit image buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data, length = width * height
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// The pixel data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let len = (width as usize) * (height as usize);
        Ok(GrayBuffer {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create a buffer from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::SizeMismatch`] if `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        buf.copy_from_slice(data)?;
        Ok(buf)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of pixels (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: zero-dimension buffers cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a read-only view of the pixel data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable view of the pixel data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = self.index(x, y);
        self.data[idx] = val;
    }

    /// Overwrite the whole buffer from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `src.len() != width * height`.
    pub fn copy_from_slice(&mut self, src: &[u8]) -> Result<()> {
        if src.len() != self.data.len() {
            return Err(Error::SizeMismatch {
                expected: self.data.len(),
                actual: src.len(),
            });
        }
        self.data.copy_from_slice(src);
        Ok(())
    }

    /// Copy the whole buffer into a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `dst.len() != width * height`.
    pub fn copy_to_slice(&self, dst: &mut [u8]) -> Result<()> {
        if dst.len() != self.data.len() {
            return Err(Error::SizeMismatch {
                expected: self.data.len(),
                actual: dst.len(),
            });
        }
        dst.copy_from_slice(&self.data);
        Ok(())
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u8) {
        self.data.fill(val);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_initialized() {
        let buf = GrayBuffer::new(4, 3).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.len(), 12);
        assert!(buf.as_slice().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(matches!(
            GrayBuffer::new(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            GrayBuffer::new(10, 0),
            Err(Error::InvalidDimension { width: 10, height: 0 })
        ));
        assert!(GrayBuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_pixel_access() {
        let mut buf = GrayBuffer::new(3, 2).unwrap();
        buf.set_pixel(2, 1, 200).unwrap();
        assert_eq!(buf.get_pixel(2, 1), Some(200));
        assert_eq!(buf.get_pixel_unchecked(2, 1), 200);
        // Row-major layout: (2, 1) is the last byte
        assert_eq!(buf.as_slice()[5], 200);
    }

    #[test]
    fn test_pixel_access_out_of_bounds() {
        let mut buf = GrayBuffer::new(3, 2).unwrap();
        assert_eq!(buf.get_pixel(3, 0), None);
        assert_eq!(buf.get_pixel(0, 2), None);
        assert!(matches!(
            buf.set_pixel(3, 0, 1),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_bulk_copy_roundtrip() {
        let src = [1u8, 2, 3, 4, 5, 6];
        let buf = GrayBuffer::from_slice(3, 2, &src).unwrap();

        let mut out = [0u8; 6];
        buf.copy_to_slice(&mut out).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_bulk_copy_size_mismatch() {
        let mut buf = GrayBuffer::new(3, 2).unwrap();
        assert!(matches!(
            buf.copy_from_slice(&[0u8; 5]),
            Err(Error::SizeMismatch { expected: 6, actual: 5 })
        ));
        let mut dst = [0u8; 7];
        assert!(matches!(
            buf.copy_to_slice(&mut dst),
            Err(Error::SizeMismatch { expected: 6, actual: 7 })
        ));
    }

    #[test]
    fn test_fill() {
        let mut buf = GrayBuffer::new(2, 2).unwrap();
        buf.fill(128);
        assert!(buf.as_slice().iter().all(|&p| p == 128));
    }
}
