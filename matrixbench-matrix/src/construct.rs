//! Matrix construction: identity, zeros, random fill

use matrixbench_core::BenchError;
use nalgebra::DMatrix;
use rand::Rng;
use crate::types::Matrix;

fn check_nonempty(rows: usize, cols: usize, func: &str) -> Result<(), BenchError> {
    if rows == 0 || cols == 0 {
        return Err(BenchError::out_of_range(format!("{}: dimensions must be positive", func)));
    }
    Ok(())
}

/// n×n identity
pub fn identity(n: usize) -> Result<Matrix, BenchError> {
    check_nonempty(n, n, "identity")?;
    Ok(Matrix::from_dmatrix(DMatrix::identity(n, n)))
}

/// rows×cols of zeros
pub fn zeros(rows: usize, cols: usize) -> Result<Matrix, BenchError> {
    check_nonempty(rows, cols, "zeros")?;
    Ok(Matrix::from_dmatrix(DMatrix::zeros(rows, cols)))
}

/// rows×cols of uniformly drawn integers in `[min, max]`
pub fn random<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Matrix, BenchError> {
    check_nonempty(rows, cols, "random")?;
    if min > max {
        return Err(BenchError::invalid_value(format!(
            "random: minimum ({}) cannot be greater than maximum ({})", min, max
        )));
    }

    let data = DMatrix::from_fn(rows, cols, |_, _| rng.gen_range(min..=max) as f64);
    Ok(Matrix::from_dmatrix(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixbench_core::codes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity() {
        let i = identity(3).unwrap();
        assert_eq!(i.shape(), (3, 3));
        assert_eq!(i.get(0, 0), Some(1.0));
        assert_eq!(i.get(0, 1), Some(0.0));
        assert_eq!(i.get(2, 2), Some(1.0));
        assert!(identity(0).is_err());
    }

    #[test]
    fn test_zeros() {
        let z = zeros(2, 4).unwrap();
        assert_eq!(z.shape(), (2, 4));
        assert!(z.iter_row_major().all(|x| x == 0.0));
    }

    #[test]
    fn test_random_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = random(5, 6, -3, 3, &mut rng).unwrap();
        assert_eq!(r.shape(), (5, 6));
        assert!(r.iter_row_major().all(|x| (-3.0..=3.0).contains(&x) && x.fract() == 0.0));
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = random(3, 3, 0, 100, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = random(3, 3, 0, 100, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = random(2, 2, 4, 4, &mut rng).unwrap();
        assert!(r.iter_row_major().all(|x| x == 4.0));

        let err = random(2, 2, 5, 1, &mut rng).unwrap_err();
        assert!(err.is(codes::INVALID_VALUE));
    }
}
