//! Elementwise vector arithmetic and dimension checks.

use num_traits::Float;

use crate::error::{Error, Result};

#[inline]
pub fn check_dimension(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::DimensionMismatch { expected, found });
    }
    Ok(())
}

/// Length shared by every vector in `vectors`.
///
/// Fails with [`Error::NoData`] when `vectors` is empty and with
/// [`Error::DimensionMismatch`] at the first vector whose length differs from
/// the first one's.
pub fn common_dimension<T, V: AsRef<[T]>>(vectors: &[V]) -> Result<usize> {
    let (first, rest) = vectors.split_first().ok_or(Error::NoData)?;
    let dimension = first.as_ref().len();
    for vector in rest {
        check_dimension(dimension, vector.as_ref().len())?;
    }
    Ok(dimension)
}

/// `acc += v`, elementwise.
pub fn add_assign<T: Float>(acc: &mut [T], v: &[T]) -> Result<()> {
    check_dimension(acc.len(), v.len())?;
    for (a, &b) in acc.iter_mut().zip(v.iter()) {
        *a = *a + b;
    }
    Ok(())
}

/// `acc += w * v`, elementwise.
pub fn add_scaled<T: Float>(acc: &mut [T], v: &[T], w: T) -> Result<()> {
    check_dimension(acc.len(), v.len())?;
    for (a, &b) in acc.iter_mut().zip(v.iter()) {
        *a = *a + w * b;
    }
    Ok(())
}

/// `acc /= denom`, elementwise. A zero denominator is an error, never `NaN`/`inf`.
pub fn div_scalar<T: Float>(acc: &mut [T], denom: T) -> Result<()> {
    if denom == T::zero() {
        return Err(Error::DivisionByZero);
    }
    for a in acc.iter_mut() {
        *a = *a / denom;
    }
    Ok(())
}
