//! The weighted-mean update rule.

use num_traits::Float;

use crate::cluster::Cluster;
use crate::error::Result;
use crate::vector::{add_assign, add_scaled, check_dimension, common_dimension, div_scalar};

/// Running weighted sum of vectors, finalized into their mean.
#[derive(Debug, Clone)]
struct MeanAccumulator<T> {
    sum: Vec<T>,
    count: T,
}

impl<T: Float> MeanAccumulator<T> {
    fn new(dimension: usize) -> Self {
        Self {
            sum: vec![T::zero(); dimension],
            count: T::zero(),
        }
    }

    fn add(&mut self, point: &[T]) -> Result<()> {
        add_assign(&mut self.sum, point)?;
        self.count = self.count + T::one();
        Ok(())
    }

    fn add_weighted(&mut self, point: &[T], weight: T) -> Result<()> {
        add_scaled(&mut self.sum, point, weight)?;
        self.count = self.count + weight;
        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<T>> {
        div_scalar(&mut self.sum, self.count)?;
        Ok(self.sum)
    }
}

/// Move `cluster`'s center to the mean of `data`, with the old center
/// counted as `weight` extra observations.
///
/// `weight = 0` gives the plain mean of `data`; larger weights keep the
/// center closer to where it was. Fields other than the center are copied
/// unchanged.
///
/// # Errors
///
/// - [`Error::NoData`](crate::Error::NoData) if `data` is empty
/// - [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if the
///   vectors and the old center do not share one length
/// - [`Error::DivisionByZero`](crate::Error::DivisionByZero) if
///   `data.len() + weight` is zero
pub fn update_mean<T, V, C>(data: &[V], cluster: &C, weight: T) -> Result<C>
where
    T: Float,
    V: AsRef<[T]>,
    C: Cluster<Elem = T>,
{
    let dimension = common_dimension::<T, _>(data)?;
    let old = cluster.center();
    check_dimension(dimension, old.len())?;

    let mut mean = MeanAccumulator::new(dimension);
    for point in data {
        mean.add(point.as_ref())?;
    }
    mean.add_weighted(old, weight)?;

    Ok(cluster.with_center(mean.finalize()?))
}

/// [`update_mean`] with a fixed `weight`, shaped as the update rule of
/// [`kmeans_iteration`](crate::kmeans_iteration).
pub fn mean_update<T, C>(weight: T) -> impl Fn(&[&[T]], &C) -> Result<C>
where
    T: Float,
    C: Cluster<Elem = T>,
{
    move |data, cluster| update_mean(data, cluster, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Centroid;
    use crate::error::Error;

    #[test]
    fn weighted_mean_blends_old_center() {
        let data = vec![vec![1.0, 1.0], vec![3.0, 3.0]];
        let old = Centroid::new(vec![0.0, 0.0]);
        let new = update_mean(&data, &old, 1.0).unwrap();
        for x in &new.center {
            assert!((x - 4.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_weight_is_plain_mean() {
        let data = vec![vec![1.0, 1.0], vec![3.0, 3.0]];
        let old = Centroid::new(vec![0.0, 0.0]);
        let new = update_mean(&data, &old, 0.0).unwrap();
        assert_eq!(new.center, vec![2.0, 2.0]);
    }

    #[test]
    fn extension_fields_survive() {
        let data = vec![vec![2.0f32]];
        let old = Centroid::with_extra(vec![0.0f32], ("north", 3u32));
        let new = update_mean(&data, &old, 1.0).unwrap();
        assert_eq!(new.center, vec![1.0]);
        assert_eq!(new.extra, ("north", 3));
    }

    #[test]
    fn center_of_other_dimension() {
        let data = vec![vec![1.0, 1.0]];
        let old = Centroid::new(vec![0.0, 0.0, 0.0]);
        assert_eq!(
            update_mean(&data, &old, 0.0).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn ragged_data() {
        let data = vec![vec![1.0, 1.0], vec![1.0]];
        let old = Centroid::new(vec![0.0, 0.0]);
        assert!(matches!(
            update_mean(&data, &old, 0.0),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn cancelling_weight_divides_by_zero() {
        let data = vec![vec![1.0], vec![2.0]];
        let old = Centroid::new(vec![5.0]);
        assert_eq!(
            update_mean(&data, &old, -2.0).unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn no_data() {
        let data: Vec<Vec<f64>> = vec![];
        let old = Centroid::new(vec![0.0]);
        assert_eq!(update_mean(&data, &old, 1.0).unwrap_err(), Error::NoData);
    }

    #[test]
    fn as_update_rule() {
        let a = [4.0, 0.0];
        let b = [0.0, 4.0];
        let bucket: Vec<&[f64]> = vec![&a[..], &b[..]];
        let rule = mean_update::<f64, Centroid>(0.0);
        let new = rule(&bucket[..], &Centroid::new(vec![9.0, 9.0])).unwrap();
        assert_eq!(new.center, vec![2.0, 2.0]);
    }
}
