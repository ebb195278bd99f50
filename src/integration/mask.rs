//! Binary foreground mask raster.

use ndarray::Array2;

use crate::integration::error::PipelineError;

/// Single-channel raster with the spatial dimensions of its source frame.
/// Non-zero pixels indicate foreground.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    data: Array2<u8>,
}

impl Mask {
    /// All-background mask of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Build a mask from a row-major pixel buffer.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self, PipelineError> {
        let len = data.len();
        let data = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| PipelineError::InvalidMask { rows, cols, len })?;
        Ok(Self { data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Whether the pixel at (row, col) is foreground.
    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.data[[row, col]] != 0
    }

    /// Row-major iterator over the pixel values.
    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.data.iter()
    }
}

impl From<Array2<u8>> for Mask {
    fn from(data: Array2<u8>) -> Self {
        Self { data }
    }
}
