use core::fmt;

use super::SmallMatrix;

// ── Aggregation / map ───────────────────────────────────────────────

impl SmallMatrix {
    /// Sum of all elements.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let m = SmallMatrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> f64 {
        let mut s = 0.0;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                s += self[(i, j)];
            }
        }
        s
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let m = SmallMatrix::from_rows(&[&[1.0, 4.0], &[9.0, 16.0]]).unwrap();
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_fn(self.nrows(), self.ncols(), |i, j| f(self[(i, j)]))
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for SmallMatrix {
    /// Bracketed row-per-line rendering, display-only:
    ///
    /// ```text
    /// [
    ///   [ 1 2 ]
    ///   [ 3 4 ]
    /// ]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.nrows() {
            write!(f, "  [ ")?;
            for j in 0..self.ncols() {
                write!(f, "{} ", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f, "]")
    }
}
