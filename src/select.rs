//! Nearest-cluster queries.
//!
//! Both queries break ties by position: a cluster only displaces an earlier
//! one when its distance is strictly smaller.

use crate::cluster::Cluster;
use crate::error::{Error, Result};
use crate::vector::check_dimension;

/// Indexes of the `n` lowest `values` under the strict ordering `less`,
/// lowest first.
///
/// Equal values keep their first-seen order. The result holds
/// `min(n, values.len())` indexes.
pub fn arg_lowest_n<T, F>(values: &[T], n: usize, mut less: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lowest: Vec<usize> = Vec::with_capacity(n.min(values.len()));
    if n == 0 {
        return lowest;
    }

    for (i, value) in values.iter().enumerate() {
        let pos = lowest
            .iter()
            .position(|&j| less(value, &values[j]))
            .unwrap_or(lowest.len());
        if pos < n {
            if lowest.len() == n {
                lowest.pop();
            }
            lowest.insert(pos, i);
        }
    }

    lowest
}

fn distances<A, C, M>(datum: &[A], clusters: &[C], metric: M) -> Result<Vec<f64>>
where
    C: Cluster,
    M: Fn(&[A], &[C::Elem]) -> f64,
{
    if clusters.is_empty() {
        return Err(Error::EmptyClusterSet);
    }
    clusters
        .iter()
        .map(|cluster| {
            check_dimension(datum.len(), cluster.center().len())?;
            Ok(metric(datum, cluster.center()))
        })
        .collect()
}

/// Index of the cluster nearest to `datum`, lowest index on ties.
pub(crate) fn nearest_index<A, C, M>(datum: &[A], clusters: &[C], metric: M) -> Result<usize>
where
    C: Cluster,
    M: Fn(&[A], &[C::Elem]) -> f64,
{
    let (first, rest) = clusters.split_first().ok_or(Error::EmptyClusterSet)?;
    check_dimension(datum.len(), first.center().len())?;

    let mut best = 0;
    let mut best_distance = metric(datum, first.center());
    for (i, cluster) in rest.iter().enumerate() {
        check_dimension(datum.len(), cluster.center().len())?;
        let distance = metric(datum, cluster.center());
        if distance < best_distance {
            best = i + 1;
            best_distance = distance;
        }
    }
    Ok(best)
}

/// The cluster whose center is nearest to `datum`.
///
/// # Errors
///
/// [`Error::EmptyClusterSet`] if `clusters` is empty, and
/// [`Error::DimensionMismatch`] if a center's length differs from `datum`'s.
pub fn closest<'c, A, C, M>(datum: &[A], clusters: &'c [C], metric: M) -> Result<&'c C>
where
    C: Cluster,
    M: Fn(&[A], &[C::Elem]) -> f64,
{
    let index = nearest_index(datum, clusters, metric)?;
    Ok(&clusters[index])
}

/// The `n` clusters nearest to `datum`, nearest first.
///
/// An `n` larger than the cluster count returns every cluster; `n == 0`
/// returns nothing. Fails like [`closest`].
pub fn closest_n<'c, A, C, M>(
    datum: &[A],
    clusters: &'c [C],
    metric: M,
    n: usize,
) -> Result<Vec<&'c C>>
where
    C: Cluster,
    M: Fn(&[A], &[C::Elem]) -> f64,
{
    let distances = distances(datum, clusters, metric)?;
    let order = arg_lowest_n(&distances, n, |a, b| a < b);
    log::trace!("closest {} of {} clusters: {:?}", n, clusters.len(), order);
    Ok(order.into_iter().map(|i| &clusters[i]).collect())
}
