//! Ready-made metrics for the `metric` argument of the clustering operations.
//!
//! Every metric pairs elements with `zip`, so vectors of unequal length are
//! silently truncated here. The clustering operations check dimensions
//! before calling a metric.

#[inline]
fn diffs<'a, A, B>(us: &'a [A], them: &'a [B]) -> impl Iterator<Item = f64> + 'a
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    us.iter()
        .zip(them.iter())
        .map(|(&a, &b)| a.into() - b.into())
}

pub fn squared_euclidean<A, B>(us: &[A], them: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    diffs(us, them).map(|d| d * d).sum()
}

pub fn euclidean<A, B>(us: &[A], them: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    squared_euclidean(us, them).sqrt()
}

/// Manhattan (L1) distance.
pub fn taxicab<A, B>(us: &[A], them: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    diffs(us, them).map(f64::abs).sum()
}

/// Largest absolute coordinate difference (L∞).
pub fn chebyshev<A, B>(us: &[A], them: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    diffs(us, them).map(f64::abs).fold(0.0, f64::max)
}

/// Minkowski distance of order `p`, as a metric closure.
///
/// `p = 1` is [`taxicab`], `p = 2` is [`euclidean`].
pub fn minkowski<A, B>(p: f64) -> impl Fn(&[A], &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    move |us, them| {
        diffs(us, them)
            .map(|d| d.abs().powf(p))
            .sum::<f64>()
            .powf(1.0 / p)
    }
}

/// One-dimensional earth mover's distance between two histograms over the
/// same bins: the sum of absolute differences of their running totals.
pub fn earth_movers_distance<A, B>(us: &[A], them: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    let mut carried = 0.0;
    let mut emd = 0.0;

    for d in diffs(us, them) {
        carried += d;
        emd += carried.abs();
    }

    emd
}
