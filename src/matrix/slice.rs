use alloc::vec::Vec;

use super::storage::Storage;
use super::{MatrixError, SmallMatrix};

// Row views are live slices into the active buffer; the borrow checker
// enforces the invalidation contract (no mutation while a view is held).
// Columns are not contiguous in either representation, so column access
// returns an owned copy, paired with `set_col` for writes.

impl SmallMatrix {
    /// View row `index` as a slice of the active buffer.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index < rows`.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let m = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.row(1).unwrap(), &[4.0, 5.0, 6.0]);
    /// assert!(m.row(2).is_err());
    /// ```
    pub fn row(&self, index: usize) -> Result<&[f64], MatrixError> {
        if index >= self.rows {
            return Err(MatrixError::OutOfRange);
        }
        Ok(match &self.storage {
            Storage::Inline(buf) => {
                if self.cols == 0 {
                    &[]
                } else {
                    &buf[index][..self.cols]
                }
            }
            Storage::Heap(data) => &data[index * self.cols..(index + 1) * self.cols],
        })
    }

    /// View row `index` as a mutable slice; writes land directly in the
    /// matrix's storage.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let mut m = SmallMatrix::zeros(2, 2);
    /// m.row_mut(0).unwrap()[1] = 9.0;
    /// assert_eq!(m[(0, 1)], 9.0);
    /// ```
    pub fn row_mut(&mut self, index: usize) -> Result<&mut [f64], MatrixError> {
        if index >= self.rows {
            return Err(MatrixError::OutOfRange);
        }
        Ok(match &mut self.storage {
            Storage::Inline(buf) => {
                if self.cols == 0 {
                    &mut []
                } else {
                    &mut buf[index][..self.cols]
                }
            }
            Storage::Heap(data) => &mut data[index * self.cols..(index + 1) * self.cols],
        })
    }

    /// Copy of column `index`, one value per row.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index < cols`.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let m = SmallMatrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.col(1).unwrap(), [2.0, 4.0]);
    /// ```
    pub fn col(&self, index: usize) -> Result<Vec<f64>, MatrixError> {
        if index >= self.cols {
            return Err(MatrixError::OutOfRange);
        }
        Ok((0..self.rows).map(|i| self[(i, index)]).collect())
    }

    /// Overwrite row `index` with `values`.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index < rows`, and
    /// with [`MatrixError::InvalidArgument`] unless
    /// `values.len() == cols`.
    pub fn set_row(&mut self, index: usize, values: &[f64]) -> Result<(), MatrixError> {
        if index >= self.rows {
            return Err(MatrixError::OutOfRange);
        }
        if values.len() != self.cols {
            return Err(MatrixError::InvalidArgument);
        }
        self.row_mut(index)?.copy_from_slice(values);
        Ok(())
    }

    /// Overwrite column `index` with `values`.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index < cols`, and
    /// with [`MatrixError::InvalidArgument`] unless
    /// `values.len() == rows`.
    pub fn set_col(&mut self, index: usize, values: &[f64]) -> Result<(), MatrixError> {
        if index >= self.cols {
            return Err(MatrixError::OutOfRange);
        }
        if values.len() != self.rows {
            return Err(MatrixError::InvalidArgument);
        }
        for (i, &v) in values.iter().enumerate() {
            self[(i, index)] = v;
        }
        Ok(())
    }
}
