/// A cluster record: a required center plus whatever else the caller keeps
/// alongside it.
///
/// Operations that only move the center go through [`Cluster::with_center`],
/// so every other field must come back unchanged.
pub trait Cluster: Sized {
    type Elem;

    fn center(&self) -> &[Self::Elem];

    /// A copy of `self` with the center replaced.
    fn with_center(&self, center: Vec<Self::Elem>) -> Self;
}

/// The stock cluster record: a center and caller-defined extension data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Centroid<T = f64, E = ()> {
    pub center: Vec<T>,
    pub extra: E,
}

impl<T> Centroid<T> {
    pub fn new(center: Vec<T>) -> Self {
        Self { center, extra: () }
    }
}

impl<T, E> Centroid<T, E> {
    pub fn with_extra(center: Vec<T>, extra: E) -> Self {
        Self { center, extra }
    }
}

impl<T, E: Clone> Cluster for Centroid<T, E> {
    type Elem = T;

    fn center(&self) -> &[T] {
        &self.center
    }

    fn with_center(&self, center: Vec<T>) -> Self {
        Self {
            center,
            extra: self.extra.clone(),
        }
    }
}
