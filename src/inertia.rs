//! Measures a caller needs to drive its own refinement loop.

use num_traits::{Float, ToPrimitive};

use crate::cluster::Cluster;
use crate::error::{Error, Result};
use crate::select::nearest_index;
use crate::vector::check_dimension;

/// Sum over `data` of the distance from each vector to its nearest cluster.
///
/// Fails like [`assignments`](crate::assignments).
pub fn inertia<A, V, C, M>(data: &[V], clusters: &[C], metric: M) -> Result<f64>
where
    V: AsRef<[A]>,
    C: Cluster,
    M: Fn(&[A], &[C::Elem]) -> f64,
{
    if data.is_empty() {
        return Err(Error::NoData);
    }

    let mut total = 0.0;
    for point in data {
        let point = point.as_ref();
        let nearest = nearest_index(point, clusters, &metric)?;
        total += metric(point, clusters[nearest].center());
    }
    Ok(total)
}

/// Frobenius norm of the change of every center between two cluster lists.
///
/// Zero means no center moved.
pub fn center_shift<C>(previous: &[C], current: &[C]) -> Result<f64>
where
    C: Cluster,
    C::Elem: Float,
{
    check_dimension(previous.len(), current.len())?;

    let mut total = 0.0;
    for (old, new) in previous.iter().zip(current.iter()) {
        check_dimension(old.center().len(), new.center().len())?;
        total += old
            .center()
            .iter()
            .zip(new.center().iter())
            .map(|(&a, &b)| {
                let diff = (a - b).to_f64().unwrap_or(f64::NAN);
                diff * diff
            })
            .sum::<f64>();
    }
    Ok(total.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Centroid;
    use crate::distance::squared_euclidean;

    #[test]
    fn inertia_sums_nearest_distances() {
        let data = vec![vec![0.0], vec![2.0], vec![9.0]];
        let clusters = vec![Centroid::new(vec![1.0]), Centroid::new(vec![10.0])];
        assert_eq!(inertia(&data, &clusters, squared_euclidean).unwrap(), 3.0);
    }

    #[test]
    fn inertia_needs_data_and_clusters() {
        let clusters = vec![Centroid::new(vec![1.0])];
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(
            inertia(&empty, &clusters, squared_euclidean).unwrap_err(),
            Error::NoData
        );

        let data = vec![vec![1.0]];
        let none: Vec<Centroid> = vec![];
        assert_eq!(
            inertia(&data, &none, squared_euclidean).unwrap_err(),
            Error::EmptyClusterSet
        );
    }

    #[test]
    fn shift_of_moved_centers() {
        let before = vec![Centroid::new(vec![0.0, 0.0]), Centroid::new(vec![1.0, 1.0])];
        let after = vec![Centroid::new(vec![3.0, 4.0]), Centroid::new(vec![1.0, 1.0])];
        assert_eq!(center_shift(&before, &after).unwrap(), 5.0);
        assert_eq!(center_shift(&after, &after).unwrap(), 0.0);
    }

    #[test]
    fn shift_of_single_precision_centers() {
        let before = vec![Centroid::new(vec![1.0f32, 1.0])];
        let after = vec![Centroid::new(vec![1.0f32, 3.0])];
        assert_eq!(center_shift(&before, &after).unwrap(), 2.0);
    }

    #[test]
    fn shift_needs_matching_lists() {
        let one = vec![Centroid::new(vec![0.0])];
        let two = vec![Centroid::new(vec![0.0]), Centroid::new(vec![1.0])];
        assert!(matches!(
            center_shift(&one, &two),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
