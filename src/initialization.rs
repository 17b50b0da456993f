use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::vector::common_dimension;

/// Total order over elements: incomparable values (`NaN`) sort after
/// everything else and tie with each other.
fn element_order<A: PartialOrd>(a: &A, b: &A) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        #[allow(clippy::eq_op)]
        let (a_nan, b_nan) = (a != a, b != b);
        a_nan.cmp(&b_nan)
    })
}

fn lexicographic<A: PartialOrd>(a: &[A], b: &[A]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| element_order(x, y))
        .find(|&o| o != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// First occurrence of every distinct vector, in dataset order.
///
/// Vectors are grouped by a stable lexicographic sort, so each group starts
/// at its lowest index; equality inside a group is still `PartialEq`, which
/// keeps vectors holding `NaN` distinct from everything.
fn unique_vectors<A, V>(data: &[V]) -> Vec<&[A]>
where
    A: PartialOrd,
    V: AsRef<[A]>,
{
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&i, &j| lexicographic(data[i].as_ref(), data[j].as_ref()));

    let mut firsts: Vec<usize> = Vec::with_capacity(order.len());
    let mut previous: Option<&[A]> = None;
    for i in order {
        let vector = data[i].as_ref();
        if previous != Some(vector) {
            firsts.push(i);
        }
        previous = Some(vector);
    }

    firsts.sort_unstable();
    firsts.into_iter().map(|i| data[i].as_ref()).collect()
}

/// Draw `k` distinct initial clusters from `data`.
///
/// The dataset is deduplicated by exact equality (first occurrence kept),
/// shuffled with `rng`, and the first `k` vectors are handed to
/// `new_cluster` together with their zero-based index. `rng` is the only
/// source of randomness, so a seeded generator reproduces the draw.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] when `k == 0`
/// - [`Error::InsufficientData`] when `data` holds fewer than `k` unique vectors
/// - [`Error::DimensionMismatch`] when the unique vectors differ in length
pub fn random_seeds<A, V, C, R, F>(
    data: &[V],
    k: usize,
    rng: &mut R,
    mut new_cluster: F,
) -> Result<Vec<C>>
where
    A: Clone + PartialOrd,
    V: AsRef<[A]>,
    R: Rng + ?Sized,
    F: FnMut(usize, Vec<A>) -> C,
{
    if k == 0 {
        return Err(Error::InvalidArgument {
            name: "k",
            message: "must be greater than zero",
        });
    }

    let mut uniques = unique_vectors::<A, V>(data);

    if uniques.len() < k {
        return Err(Error::InsufficientData {
            requested: k,
            unique: uniques.len(),
        });
    }
    common_dimension::<A, _>(&uniques)?;

    uniques.shuffle(rng);
    log::debug!(
        "drew {} seeds from {} unique of {} points",
        k,
        uniques.len(),
        data.len()
    );

    Ok(uniques
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(i, vector)| new_cluster(i, vector.to_vec()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Centroid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make(i: usize, center: Vec<f64>) -> Centroid<f64, usize> {
        Centroid::with_extra(center, i)
    }

    #[test]
    fn seeds_are_distinct_and_indexed() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = random_seeds(&data, 3, &mut rng, make).unwrap();

        assert_eq!(seeds.len(), 3);
        for (i, seed) in seeds.iter().enumerate() {
            assert_eq!(seed.extra, i);
            assert!(data.contains(&seed.center));
        }
        assert_ne!(seeds[0].center, seeds[1].center);
        assert_ne!(seeds[0].center, seeds[2].center);
        assert_ne!(seeds[1].center, seeds[2].center);
    }

    #[test]
    fn draw_depends_on_the_generator() {
        let data: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, -(i as f64)]).collect();
        let mut drawn = vec![false; data.len()];
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let seeds = random_seeds(&data, 1, &mut rng, make).unwrap();
            let at = data.iter().position(|v| *v == seeds[0].center).unwrap();
            drawn[at] = true;
        }
        assert!(drawn.iter().all(|&d| d), "never drawn first: {:?}", drawn);
    }

    #[test]
    fn uniques_keep_first_occurrence_order() {
        let data = vec![
            vec![2.0, 0.0],
            vec![1.0, 5.0],
            vec![2.0, 0.0],
            vec![-0.0, 1.0],
            vec![1.0, 5.0],
            vec![0.0, 1.0],
        ];
        let uniques = unique_vectors(&data);
        assert_eq!(
            uniques,
            vec![&[2.0, 0.0][..], &[1.0, 5.0][..], &[-0.0, 1.0][..]]
        );
    }

    #[test]
    fn nan_vectors_never_merge() {
        let data = vec![vec![f64::NAN], vec![1.0], vec![f64::NAN], vec![1.0]];
        let uniques = unique_vectors(&data);
        assert_eq!(uniques.len(), 3);
        assert_eq!(uniques[1], &[1.0][..]);
    }

    #[test]
    fn same_seed_same_draw() {
        let data: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
        let a = random_seeds(&data, 5, &mut StdRng::seed_from_u64(11), make).unwrap();
        let b = random_seeds(&data, 5, &mut StdRng::seed_from_u64(11), make).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_k_is_invalid() {
        let data = vec![vec![1.0]];
        let err = random_seeds(&data, 0, &mut StdRng::seed_from_u64(0), make).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "k", .. }));
    }

    #[test]
    fn duplicates_do_not_count() {
        let data = vec![vec![1.0], vec![1.0], vec![1.0], vec![2.0]];
        let err = random_seeds(&data, 3, &mut StdRng::seed_from_u64(0), make).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientData {
                requested: 3,
                unique: 2
            }
        );
    }

    #[test]
    fn empty_data_is_insufficient() {
        let data: Vec<Vec<f64>> = vec![];
        let err = random_seeds(&data, 1, &mut StdRng::seed_from_u64(0), make).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientData {
                requested: 1,
                unique: 0
            }
        );
    }

    #[test]
    fn ragged_data_is_rejected() {
        let data = vec![vec![1.0, 2.0], vec![3.0]];
        let err = random_seeds(&data, 1, &mut StdRng::seed_from_u64(0), make).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }
}
