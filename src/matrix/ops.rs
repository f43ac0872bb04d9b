use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Float;

use super::{MatrixError, SmallMatrix};

/// Absolute tolerance used by `==` / `!=`.
const EQ_TOLERANCE: f64 = 1e-7;

// ── Checked arithmetic ──────────────────────────────────────────────

impl SmallMatrix {
    /// Element-wise sum in a freshly constructed matrix.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] unless both operands
    /// have identical shape.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let a = SmallMatrix::fill(2, 2, 1.0);
    /// let b = SmallMatrix::fill(2, 2, 2.0);
    /// assert_eq!(a.checked_add(&b).unwrap()[(0, 0)], 3.0);
    /// assert!(a.checked_add(&SmallMatrix::zeros(3, 2)).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.size() != rhs.size() {
            return Err(MatrixError::InvalidArgument);
        }
        Ok(Self::from_fn(self.rows, self.cols, |i, j| {
            self[(i, j)] + rhs[(i, j)]
        }))
    }

    /// Element-wise difference in a freshly constructed matrix.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] unless both operands
    /// have identical shape.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.size() != rhs.size() {
            return Err(MatrixError::InvalidArgument);
        }
        Ok(Self::from_fn(self.rows, self.cols, |i, j| {
            self[(i, j)] - rhs[(i, j)]
        }))
    }

    /// Matrix product `(rows, cols) x (rhs.rows, rhs.cols)`.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] unless
    /// `self.ncols() == rhs.nrows()`. Each result cell accumulates the
    /// dot product in `f64`, iterating `i, j, k` outer to inner so the
    /// rounding sequence is reproducible.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let a = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    /// let b = SmallMatrix::from_rows(&[&[4.0], &[5.0], &[6.0]]).unwrap();
    /// let p = a.checked_mul(&b).unwrap();
    /// assert_eq!(p[(0, 0)], 32.0);
    /// assert_eq!(p[(1, 0)], 77.0);
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::InvalidArgument);
        }
        let (m, n, p) = (self.rows, self.cols, rhs.cols);
        let mut out = Self::zeros(m, p);
        for i in 0..m {
            for j in 0..p {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }

    /// Element-wise scaling into a new matrix of identical shape.
    ///
    /// ```
    /// use smallmat::SmallMatrix;
    /// let m = SmallMatrix::fill(2, 2, 3.0);
    /// assert_eq!(m.scale(2.0)[(1, 1)], 6.0);
    /// ```
    pub fn scale(&self, s: f64) -> Self {
        Self::from_fn(self.rows, self.cols, |i, j| self[(i, j)] * s)
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl PartialEq for SmallMatrix {
    /// Two matrices are equal iff the shapes match and every pair of
    /// corresponding elements agrees to within an absolute tolerance of
    /// `1e-7`. The current representation plays no part.
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                if Float::abs(self[(i, j)] - other[(i, j)]) > EQ_TOLERANCE {
                    return false;
                }
            }
        }
        true
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl Add<&SmallMatrix> for &SmallMatrix {
    type Output = SmallMatrix;

    fn add(self, rhs: &SmallMatrix) -> SmallMatrix {
        match self.checked_add(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "dimension mismatch: {}x{} + {}x{}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            ),
        }
    }
}

impl Add for SmallMatrix {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Add<&SmallMatrix> for SmallMatrix {
    type Output = SmallMatrix;
    fn add(self, rhs: &SmallMatrix) -> SmallMatrix {
        &self + rhs
    }
}

impl Add<SmallMatrix> for &SmallMatrix {
    type Output = SmallMatrix;
    fn add(self, rhs: SmallMatrix) -> SmallMatrix {
        self + &rhs
    }
}

impl AddAssign<&SmallMatrix> for SmallMatrix {
    fn add_assign(&mut self, rhs: &SmallMatrix) {
        if self.size() != rhs.size() {
            panic!(
                "dimension mismatch: {}x{} += {}x{}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            );
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self[(i, j)] += rhs[(i, j)];
            }
        }
    }
}

impl AddAssign for SmallMatrix {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl Sub<&SmallMatrix> for &SmallMatrix {
    type Output = SmallMatrix;

    fn sub(self, rhs: &SmallMatrix) -> SmallMatrix {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "dimension mismatch: {}x{} - {}x{}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            ),
        }
    }
}

impl Sub for SmallMatrix {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Sub<&SmallMatrix> for SmallMatrix {
    type Output = SmallMatrix;
    fn sub(self, rhs: &SmallMatrix) -> SmallMatrix {
        &self - rhs
    }
}

impl Sub<SmallMatrix> for &SmallMatrix {
    type Output = SmallMatrix;
    fn sub(self, rhs: SmallMatrix) -> SmallMatrix {
        self - &rhs
    }
}

impl SubAssign<&SmallMatrix> for SmallMatrix {
    fn sub_assign(&mut self, rhs: &SmallMatrix) {
        if self.size() != rhs.size() {
            panic!(
                "dimension mismatch: {}x{} -= {}x{}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            );
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self[(i, j)] -= rhs[(i, j)];
            }
        }
    }
}

impl SubAssign for SmallMatrix {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl Mul<&SmallMatrix> for &SmallMatrix {
    type Output = SmallMatrix;

    fn mul(self, rhs: &SmallMatrix) -> SmallMatrix {
        match self.checked_mul(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "dimension mismatch: {}x{} * {}x{}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            ),
        }
    }
}

impl Mul for SmallMatrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Mul<&SmallMatrix> for SmallMatrix {
    type Output = SmallMatrix;
    fn mul(self, rhs: &SmallMatrix) -> SmallMatrix {
        &self * rhs
    }
}

impl Mul<SmallMatrix> for &SmallMatrix {
    type Output = SmallMatrix;
    fn mul(self, rhs: SmallMatrix) -> SmallMatrix {
        self * &rhs
    }
}

impl MulAssign<&SmallMatrix> for SmallMatrix {
    fn mul_assign(&mut self, rhs: &SmallMatrix) {
        let product = &*self * rhs;
        *self = product;
    }
}

impl MulAssign for SmallMatrix {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl Mul<f64> for &SmallMatrix {
    type Output = SmallMatrix;
    fn mul(self, rhs: f64) -> SmallMatrix {
        self.scale(rhs)
    }
}

impl Mul<f64> for SmallMatrix {
    type Output = SmallMatrix;
    fn mul(self, rhs: f64) -> SmallMatrix {
        self.scale(rhs)
    }
}

impl Mul<&SmallMatrix> for f64 {
    type Output = SmallMatrix;
    fn mul(self, rhs: &SmallMatrix) -> SmallMatrix {
        rhs.scale(self)
    }
}

impl Mul<SmallMatrix> for f64 {
    type Output = SmallMatrix;
    fn mul(self, rhs: SmallMatrix) -> SmallMatrix {
        rhs.scale(self)
    }
}

impl MulAssign<f64> for SmallMatrix {
    fn mul_assign(&mut self, rhs: f64) {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self[(i, j)] *= rhs;
            }
        }
    }
}
