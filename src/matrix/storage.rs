use alloc::vec::Vec;

/// Side length of the inline buffer.
pub(crate) const INLINE_DIM: usize = 144;

/// Element count at which storage switches to the heap.
pub(crate) const SMALL_SIZE: usize = 144;

/// Backing buffer for a matrix. Exactly one variant is authoritative at
/// any time; the discriminant doubles as the large-matrix flag.
#[derive(Clone)]
pub(crate) enum Storage {
    /// Fixed-capacity buffer, reserved at full size regardless of the
    /// current shape. Cells outside the live `rows x cols` region are
    /// stale and never observable through the public API.
    Inline([[f64; INLINE_DIM]; INLINE_DIM]),
    /// Row-major buffer sized exactly `rows * cols`.
    Heap(Vec<f64>),
}

impl Storage {
    /// Pick the representation for a fresh `rows x cols` matrix from its
    /// element count and fill the live region from `f(row, col)`.
    ///
    /// This is the single construction path: every constructor, transpose,
    /// and arithmetic result decides its representation here.
    pub(crate) fn build(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        if rows * cols >= SMALL_SIZE {
            let mut data = Vec::with_capacity(rows * cols);
            for i in 0..rows {
                for j in 0..cols {
                    data.push(f(i, j));
                }
            }
            Storage::Heap(data)
        } else {
            let mut buf = [[0.0; INLINE_DIM]; INLINE_DIM];
            for (i, row) in buf.iter_mut().enumerate().take(rows) {
                for (j, cell) in row.iter_mut().enumerate().take(cols) {
                    *cell = f(i, j);
                }
            }
            Storage::Inline(buf)
        }
    }

    /// Unchecked element access; callers have already validated the index
    /// against the logical shape.
    #[inline]
    pub(crate) fn get(&self, cols: usize, row: usize, col: usize) -> &f64 {
        match self {
            Storage::Inline(buf) => &buf[row][col],
            Storage::Heap(data) => &data[row * cols + col],
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, cols: usize, row: usize, col: usize) -> &mut f64 {
        match self {
            Storage::Inline(buf) => &mut buf[row][col],
            Storage::Heap(data) => &mut data[row * cols + col],
        }
    }

    /// Copy the live `rows x cols` region of an inline buffer into a heap
    /// buffer of the same shape. The promotion half of the migration;
    /// demotion lives in `resize`, the only operation allowed to perform it.
    pub(crate) fn to_heap(buf: &[[f64; INLINE_DIM]; INLINE_DIM], rows: usize, cols: usize) -> Vec<f64> {
        let mut data = Vec::with_capacity(rows * cols);
        for row in buf.iter().take(rows) {
            data.extend_from_slice(&row[..cols]);
        }
        data
    }
}
