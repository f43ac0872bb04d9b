use alloc::vec;

use super::storage::{Storage, INLINE_DIM, SMALL_SIZE};
use super::{MatrixError, SmallMatrix};

// ── Resize ──────────────────────────────────────────────────────────

impl SmallMatrix {
    /// Resize to `rows x cols`.
    ///
    /// Cells inside the old shape keep their values, newly created cells
    /// are zero-initialized, and shrinking truncates. The representation
    /// is recomputed from the new element count; this is the only
    /// operation that returns a heap-backed matrix to inline storage.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    ///
    /// let mut m = SmallMatrix::fill(2, 2, 5.0);
    /// m.resize(3, 2);
    /// assert_eq!(m[(0, 0)], 5.0);
    /// assert_eq!(m[(2, 1)], 0.0);
    ///
    /// m.resize(20, 20);
    /// assert!(!m.is_small());
    /// m.resize(2, 2);
    /// assert!(m.is_small());
    /// assert_eq!(m[(1, 1)], 5.0);
    /// ```
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let (old_rows, old_cols) = (self.rows, self.cols);
        if rows * cols >= SMALL_SIZE {
            match &mut self.storage {
                Storage::Inline(buf) => {
                    // Crossing upward: migrate the old live region into a
                    // heap buffer already sized to the new shape.
                    let mut data = vec![0.0; rows * cols];
                    for i in 0..rows.min(old_rows) {
                        for j in 0..cols.min(old_cols) {
                            data[i * cols + j] = buf[i][j];
                        }
                    }
                    self.storage = Storage::Heap(data);
                }
                Storage::Heap(old) => {
                    let mut data = vec![0.0; rows * cols];
                    let width = cols.min(old_cols);
                    for i in 0..rows.min(old_rows) {
                        let src = i * old_cols;
                        let dst = i * cols;
                        data[dst..dst + width].copy_from_slice(&old[src..src + width]);
                    }
                    *old = data;
                }
            }
        } else {
            match &mut self.storage {
                Storage::Heap(data) => {
                    // Dropped back under the threshold: demote into a
                    // zeroed inline buffer, keeping the overlap.
                    let mut buf = [[0.0; INLINE_DIM]; INLINE_DIM];
                    for (i, row) in buf.iter_mut().enumerate().take(rows.min(old_rows)) {
                        for (j, cell) in row.iter_mut().enumerate().take(cols.min(old_cols)) {
                            *cell = data[i * old_cols + j];
                        }
                    }
                    self.storage = Storage::Inline(buf);
                }
                Storage::Inline(buf) => {
                    // Zero only the newly exposed bands; cells inside the
                    // old shape keep their values.
                    if rows > old_rows && cols > 0 {
                        for row in &mut buf[old_rows..rows] {
                            row[..cols].fill(0.0);
                        }
                    }
                    if cols > old_cols {
                        for row in &mut buf[..rows] {
                            row[old_cols..cols].fill(0.0);
                        }
                    }
                }
            }
        }
        self.rows = rows;
        self.cols = cols;
    }
}

// ── Row insert / erase ──────────────────────────────────────────────

impl SmallMatrix {
    /// Insert a row at `index`, shifting subsequent rows down.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index <= rows`, and
    /// with [`MatrixError::InvalidArgument`] unless `values.len() == cols`.
    /// If the new element count reaches the threshold, the live inline
    /// region is migrated to the heap before the insert.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let mut m = SmallMatrix::from_rows(&[&[1.0, 2.0], &[5.0, 6.0]]).unwrap();
    /// m.insert_row(1, &[3.0, 4.0]).unwrap();
    /// assert_eq!(m.size(), (3, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert_eq!(m[(2, 1)], 6.0);
    /// ```
    pub fn insert_row(&mut self, index: usize, values: &[f64]) -> Result<(), MatrixError> {
        if index > self.rows {
            return Err(MatrixError::OutOfRange);
        }
        if values.len() != self.cols {
            return Err(MatrixError::InvalidArgument);
        }
        let cols = self.cols;
        let new_rows = self.rows + 1;
        match &mut self.storage {
            Storage::Heap(data) => {
                data.splice(index * cols..index * cols, values.iter().copied());
            }
            Storage::Inline(buf) => {
                if new_rows * cols >= SMALL_SIZE {
                    // Crossing the threshold: migrate the live region
                    // first, then insert into the heap buffer.
                    let mut data = Storage::to_heap(buf, self.rows, cols);
                    data.splice(index * cols..index * cols, values.iter().copied());
                    self.storage = Storage::Heap(data);
                } else if cols > 0 {
                    for i in (index..self.rows).rev() {
                        buf[i + 1] = buf[i];
                    }
                    buf[index][..cols].copy_from_slice(values);
                }
            }
        }
        self.rows = new_rows;
        Ok(())
    }

    /// Erase the row at `index`, shifting subsequent rows up.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index < rows`. The
    /// representation is not demoted even if the count drops back under
    /// the threshold.
    pub fn erase_row(&mut self, index: usize) -> Result<(), MatrixError> {
        if index >= self.rows {
            return Err(MatrixError::OutOfRange);
        }
        let cols = self.cols;
        let new_rows = self.rows - 1;
        match &mut self.storage {
            Storage::Heap(data) => {
                data.drain(index * cols..(index + 1) * cols);
            }
            Storage::Inline(buf) => {
                if cols > 0 {
                    for i in index..new_rows {
                        buf[i] = buf[i + 1];
                    }
                }
            }
        }
        self.rows = new_rows;
        Ok(())
    }
}

// ── Column insert / erase ───────────────────────────────────────────

impl SmallMatrix {
    /// Insert a column at `index`, shifting subsequent columns right.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index <= cols`, and
    /// with [`MatrixError::InvalidArgument`] unless `values.len() == rows`.
    ///
    /// Implemented as transpose, row insert, transpose back; the matrix
    /// adopts the round-trip result's representation and storage. Both
    /// transposes construct fresh, so the gap-shifting logic stays
    /// single-sourced in [`insert_row`](SmallMatrix::insert_row).
    pub fn insert_col(&mut self, index: usize, values: &[f64]) -> Result<(), MatrixError> {
        if index > self.cols {
            return Err(MatrixError::OutOfRange);
        }
        if values.len() != self.rows {
            return Err(MatrixError::InvalidArgument);
        }
        // Validated up front, so the round-trip cannot fail part-way.
        let mut flipped = self.transpose();
        flipped.insert_row(index, values)?;
        *self = flipped.transpose();
        Ok(())
    }

    /// Erase the column at `index`, shifting subsequent columns left.
    ///
    /// Fails with [`MatrixError::OutOfRange`] unless `index < cols`.
    /// Transpose round-trip mirroring
    /// [`insert_col`](SmallMatrix::insert_col).
    pub fn erase_col(&mut self, index: usize) -> Result<(), MatrixError> {
        if index >= self.cols {
            return Err(MatrixError::OutOfRange);
        }
        let mut flipped = self.transpose();
        flipped.erase_row(index)?;
        *self = flipped.transpose();
        Ok(())
    }

    /// Transposed copy: `(rows, cols)` becomes `(cols, rows)` with
    /// `result[j][i] = self[i][j]`. Pure; the result's representation is
    /// chosen from its own shape.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let m = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.size(), (3, 2));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)])
    }
}
