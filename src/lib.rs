//! # smallmat
//!
//! Dense `f64` matrix with a small-matrix storage optimization, no-std
//! compatible.
//!
//! [`SmallMatrix`] keeps matrices with fewer than 144 elements in a
//! fixed-capacity inline buffer and switches to a heap buffer once the
//! element count reaches that threshold. Every operation behaves
//! identically regardless of which representation currently backs the
//! data; shape mutations migrate elements between representations as the
//! count crosses the threshold.
//!
//! ## Quick start
//!
//! ```
//! use smallmat::SmallMatrix;
//!
//! let a = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
//! let b = SmallMatrix::from_rows(&[&[4.0], &[5.0], &[6.0]]).unwrap();
//!
//! let p = &a * &b;
//! assert_eq!(p.size(), (2, 1));
//! assert_eq!(p[(0, 0)], 32.0);
//! assert_eq!(p[(1, 0)], 77.0);
//! assert!(p.is_small());
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`SmallMatrix`] itself: hybrid inline/heap storage,
//!   shape mutation (resize, row/column insert and erase, transpose),
//!   bounds-checked element access, arithmetic operators, and text
//!   rendering. [`MatrixError`] covers the two failure kinds
//!   (out-of-range indices, invalid arguments).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod matrix;

pub use matrix::{MatrixError, SmallMatrix};
