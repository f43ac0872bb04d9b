//! Builds two matrices from nested rows and prints their product.

use smallmat::SmallMatrix;

fn main() {
    let a = SmallMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    let b = SmallMatrix::from_rows(&[&[4.0], &[5.0], &[6.0]]).unwrap();
    print!("{}", &a * &b);
}
