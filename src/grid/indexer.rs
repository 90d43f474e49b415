use super::{row_major_strides, GridError};

/// Multi-dimensional, row-major read access to a flat slice.
///
/// The backing slice may be longer than the product of the dimensions (for
/// example a pre-chunked buffer). It may also be shorter; reads that would
/// land past its end fail with [`GridError::BackingTooShort`].
#[derive(Debug)]
pub struct GridIndexer<'a, T> {
    data: &'a [T],
    dims: Vec<usize>,
    strides: Vec<usize>,
    volume: usize,
}

impl<T> Clone for GridIndexer<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            dims: self.dims.clone(),
            strides: self.strides.clone(),
            volume: self.volume,
        }
    }
}

impl<'a, T> GridIndexer<'a, T> {
    /// Build an indexer over `data` with the given dimension sizes.
    pub fn new(data: &'a [T], dims: &[usize]) -> Result<Self, GridError> {
        let volume = dims
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| GridError::ShapeOverflow(dims.to_vec()))?;

        if data.len() < volume {
            tracing::warn!(
                len = data.len(),
                volume,
                "grid backing is shorter than its dimension product"
            );
        }
        tracing::debug!(?dims, volume, "grid indexer built");

        Ok(Self {
            data,
            dims: dims.to_vec(),
            strides: row_major_strides(dims),
            volume,
        })
    }

    /// Dimension sizes, outermost first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Product of the dimension sizes.
    pub fn volume(&self) -> usize {
        self.volume
    }

    /// Row-major strides; the last axis has stride 1.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Backing slice.
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Flat index of `indices` without reading the backing slice.
    ///
    /// The coordinate count is checked before any axis bounds.
    pub fn flat_index(&self, indices: &[usize]) -> Result<usize, GridError> {
        if indices.len() != self.dims.len() {
            tracing::debug!(
                expected = self.dims.len(),
                actual = indices.len(),
                "grid coordinate count mismatch"
            );
            return Err(GridError::DimensionMismatch {
                expected: self.dims.len(),
                actual: indices.len(),
            });
        }

        let mut flat = 0usize;
        for (axis, ((&index, &extent), &stride)) in indices
            .iter()
            .zip(&self.dims)
            .zip(&self.strides)
            .enumerate()
        {
            if index >= extent {
                tracing::debug!(axis, index, extent, "grid index out of range");
                return Err(GridError::OutOfRange {
                    axis,
                    index,
                    extent,
                });
            }
            flat += index * stride;
        }
        Ok(flat)
    }

    /// Element at `indices`.
    pub fn at(&self, indices: &[usize]) -> Result<&'a T, GridError> {
        let flat = self.flat_index(indices)?;
        self.data.get(flat).ok_or(GridError::BackingTooShort {
            flat_index: flat,
            len: self.data.len(),
        })
    }
}
