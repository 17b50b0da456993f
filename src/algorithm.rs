use crate::cluster::Cluster;
use crate::error::{Error, Result};
use crate::select::nearest_index;
use crate::vector::check_dimension;

/// Label of the nearest cluster for every vector of `data`.
///
/// Uses the same rule as [`closest`](crate::closest): strictly smaller
/// distance wins, lowest index on ties.
pub fn assignments<A, V, C, M>(data: &[V], clusters: &[C], metric: M) -> Result<Vec<usize>>
where
    V: AsRef<[A]>,
    C: Cluster,
    M: Fn(&[A], &[C::Elem]) -> f64,
{
    if data.is_empty() {
        return Err(Error::NoData);
    }
    if clusters.is_empty() {
        return Err(Error::EmptyClusterSet);
    }

    data.iter()
        .map(|point| nearest_index(point.as_ref(), clusters, &metric))
        .collect()
}

/// One refinement pass of Lloyd's algorithm.
///
/// Every vector of `data` is assigned to its nearest cluster; each cluster
/// that attracted at least one vector is replaced by `update(bucket, old)`,
/// where `bucket` keeps the dataset's order. A cluster with an empty bucket
/// is passed through unchanged and `update` is not called for it. The result
/// has the same length and order as `clusters`.
///
/// Repeating the pass until the clusters stop moving is left to the caller.
///
/// # Errors
///
/// - [`Error::NoData`] if `data` is empty
/// - [`Error::EmptyClusterSet`] if `clusters` is empty
/// - [`Error::DimensionMismatch`] if a vector and a center differ in length,
///   or `update` returns a center of another length than its bucket
/// - any error returned by `update`
pub fn kmeans_iteration<A, V, C, M, U>(
    data: &[V],
    clusters: &[C],
    metric: M,
    mut update: U,
) -> Result<Vec<C>>
where
    V: AsRef<[A]>,
    C: Cluster + Clone,
    M: Fn(&[A], &[C::Elem]) -> f64,
    U: FnMut(&[&[A]], &C) -> Result<C>,
{
    let labels = assignments(data, clusters, metric)?;

    let mut matched: Vec<Vec<&[A]>> = vec![Vec::new(); clusters.len()];
    for (point, label) in data.iter().zip(labels) {
        matched[label].push(point.as_ref());
    }

    let mut out = Vec::with_capacity(clusters.len());
    for (i, (cluster, bucket)) in clusters.iter().zip(matched).enumerate() {
        if bucket.is_empty() {
            log::trace!("cluster {} attracted no points, passing it through", i);
            out.push(cluster.clone());
            continue;
        }
        let updated = update(&bucket[..], cluster)?;
        check_dimension(bucket[0].len(), updated.center().len())?;
        out.push(updated);
    }

    log::debug!(
        "assigned {} points to {} clusters",
        data.len(),
        clusters.len()
    );
    Ok(out)
}
