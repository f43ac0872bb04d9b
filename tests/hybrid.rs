//! Cross-representation properties of the hybrid storage engine: every
//! operation must behave identically whichever buffer currently backs the
//! data, and representation transitions must follow the documented rules.

use smallmat::{MatrixError, SmallMatrix};

fn counting(rows: usize, cols: usize) -> SmallMatrix {
    SmallMatrix::from_fn(rows, cols, |i, j| (i * cols + j) as f64)
}

// ── Threshold selection ─────────────────────────────────────────────

#[test]
fn threshold_is_element_count() {
    assert!(SmallMatrix::zeros(12, 11).is_small()); // 132
    assert!(!SmallMatrix::zeros(12, 12).is_small()); // 144
    assert!(SmallMatrix::zeros(143, 1).is_small()); // long but small
    assert!(!SmallMatrix::zeros(1, 200).is_small()); // wide and large
    assert_eq!(SmallMatrix::SMALL_SIZE, 144);
}

// ── Promotion and the one-way demotion rule ─────────────────────────

#[test]
fn insert_promotes_and_erase_does_not_demote() {
    let mut m = SmallMatrix::from_fn(11, 13, |i, j| (i * 13 + j) as f64);
    assert!(m.is_small());

    m.insert_row(11, &[200.0; 13]).unwrap();
    assert!(!m.is_small());

    // Back under the threshold, still heap-backed.
    m.erase_row(11).unwrap();
    assert_eq!(m.size(), (11, 13));
    assert!(!m.is_small());

    // Values untouched by the round-trip.
    assert_eq!(m, counting(11, 13));

    // Only resize demotes.
    m.resize(11, 13);
    assert!(m.is_small());
    assert_eq!(m, counting(11, 13));
}

#[test]
fn resize_crosses_both_ways_preserving_values() {
    let mut m = counting(10, 10);
    m.resize(20, 20);
    assert!(!m.is_small());
    for i in 0..10 {
        for j in 0..10 {
            assert_eq!(m[(i, j)], (i * 10 + j) as f64);
        }
    }
    assert_eq!(m[(19, 19)], 0.0);

    m.resize(10, 10);
    assert!(m.is_small());
    assert_eq!(m, counting(10, 10));
}

// ── Worked arithmetic examples ──────────────────────────────────────

#[test]
fn worked_product() {
    let a = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    let b = SmallMatrix::from_rows(&[&[4.0], &[5.0], &[6.0]]).unwrap();
    let p = &a * &b;
    assert_eq!(p, SmallMatrix::from_rows(&[&[32.0], &[77.0]]).unwrap());
}

#[test]
fn add_sub_round_trip() {
    let a = counting(7, 5);
    let b = SmallMatrix::from_fn(7, 5, |i, j| 0.1 * (i + j) as f64);
    assert_eq!(&(&a + &b) - &b, a);

    let big_a = counting(13, 13);
    let big_b = SmallMatrix::from_fn(13, 13, |i, j| 0.1 * (i + j) as f64);
    assert_eq!(&(&big_a + &big_b) - &big_b, big_a);
}

#[test]
fn transpose_involution_both_representations() {
    let small = counting(4, 7);
    assert_eq!(small.transpose().transpose(), small);

    let large = counting(14, 15);
    assert!(!large.is_small());
    assert_eq!(large.transpose().transpose(), large);
}

#[test]
fn insert_then_erase_row_restores() {
    for rep_rows in [3, 13] {
        let orig = counting(rep_rows, 13);
        for i in 0..=rep_rows {
            let mut m = orig.clone();
            m.insert_row(i, &[400.0; 13]).unwrap();
            m.erase_row(i).unwrap();
            assert_eq!(m, orig, "insert/erase at {}", i);
        }
    }
}

#[test]
fn column_ops_match_transpose_definition() {
    let mut direct = counting(5, 4);
    let mut via_transpose = direct.transpose();

    direct.insert_col(2, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    via_transpose.insert_row(2, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(direct, via_transpose.transpose());

    direct.erase_col(0).unwrap();
    via_transpose.erase_row(0).unwrap();
    assert_eq!(direct, via_transpose.transpose());
}

// ── Error surface ───────────────────────────────────────────────────

#[test]
fn dimensionless_access_fails() {
    let m = SmallMatrix::new();
    assert_eq!(m.at(0, 0).unwrap_err(), MatrixError::OutOfRange);
    assert_eq!(m.row(0).unwrap_err(), MatrixError::OutOfRange);
    assert_eq!(m.col(0).unwrap_err(), MatrixError::OutOfRange);
}

#[test]
fn ragged_literal_rejected() {
    assert_eq!(
        SmallMatrix::from_rows(&[&[1.0, 2.0], &[3.0]]).unwrap_err(),
        MatrixError::InvalidArgument
    );
}

#[test]
fn validation_failures_leave_matrix_untouched() {
    let orig = counting(3, 3);
    let mut m = orig.clone();
    assert!(m.insert_row(4, &[0.0; 3]).is_err());
    assert!(m.insert_col(0, &[0.0; 2]).is_err());
    assert!(m.erase_row(3).is_err());
    assert!(m.erase_col(3).is_err());
    assert_eq!(m, orig);
    assert!(m.is_small());
}

// ── Aliasing contract ───────────────────────────────────────────────

#[test]
fn row_views_alias_storage() {
    let mut m = counting(12, 13); // heap-backed
    assert!(!m.is_small());
    m.row_mut(3).unwrap()[4] = -1.0;
    assert_eq!(*m.at(3, 4).unwrap(), -1.0);

    let mut s = counting(3, 4); // inline
    s.row_mut(2).unwrap().fill(0.5);
    assert_eq!(s[(2, 3)], 0.5);
}

// ── Rendering ───────────────────────────────────────────────────────

#[test]
fn display_bracketed_layout() {
    let m = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    let expected = "[\n  [ 1 2 3 ]\n  [ 4 5 6 ]\n]\n";
    assert_eq!(m.to_string(), expected);
}
