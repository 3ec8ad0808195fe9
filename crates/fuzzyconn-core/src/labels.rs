//! LabelImage - hard per-pixel class labels
//!
//! Output representation for multi-class segmentation: one `u32` class
//! label per pixel, row-major, matching the flat index order of
//! [`FloatImage`](crate::FloatImage). After an IRFC run every pixel holds
//! a label in {1..K}; 0 is reserved for "unassigned".

use crate::error::{Error, Result};

/// Hard label image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Label data (row-major, no padding)
    data: Vec<u32>,
}

impl LabelImage {
    /// Create a new LabelImage with all pixels unassigned (0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(LabelImage {
            width,
            height,
            data: vec![0u32; size],
        })
    }

    /// Create a LabelImage from raw data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(LabelImage {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (width * height)
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Get the label at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        Ok(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Set the label at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        self.data[(y as usize) * (self.width as usize) + (x as usize)] = label;
        Ok(())
    }

    /// Get the label at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Get raw access to the label data
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable access to the label data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Count the pixels carrying the given label
    pub fn count_label(&self, label: u32) -> usize {
        self.data.iter().filter(|&&l| l == label).count()
    }

    /// Collect the distinct labels present, in ascending order
    pub fn labels_present(&self) -> Vec<u32> {
        let mut labels: Vec<u32> = self.data.clone();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}
