//! Generic k-means building blocks.
//!
//! The library supplies the pieces of Lloyd's algorithm and leaves the loop
//! to the caller:
//! - [`random_seeds`] draws distinct initial clusters from a dataset
//! - [`kmeans_iteration`] runs one assign-and-update pass
//! - [`update_mean`] / [`mean_update`] is the default update rule
//! - [`closest`] and [`closest_n`] classify a point against fixed clusters
//!
//! Metrics, update rules and cluster constructors are plain closures, and a
//! cluster is anything implementing [`Cluster`].
//!
//! ```rust
//! use kmeans_primitives::distance::euclidean;
//! use kmeans_primitives::{
//!     center_shift, closest, kmeans_iteration, mean_update, random_seeds, Centroid,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut clusters =
//!     random_seeds(&data, 2, &mut rng, |i, center| Centroid::with_extra(center, i)).unwrap();
//!
//! let update = mean_update::<f64, Centroid<f64, usize>>(0.0);
//! for _ in 0..10 {
//!     let next = kmeans_iteration(&data, &clusters, euclidean, &update).unwrap();
//!     let shift = center_shift(&clusters, &next).unwrap();
//!     clusters = next;
//!     if shift == 0.0 {
//!         break;
//!     }
//! }
//!
//! let nearest = closest(&[9.0, 9.0], &clusters, euclidean).unwrap();
//! assert!(nearest.center[0] > 5.0);
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cluster;
pub mod distance;
pub mod error;
pub mod inertia;
pub mod initialization;
pub mod select;
pub mod update;
pub mod vector;

pub use algorithm::{assignments, kmeans_iteration};
pub use cluster::{Centroid, Cluster};
pub use error::{Error, Result};
pub use inertia::{center_shift, inertia};
pub use initialization::random_seeds;
pub use select::{arg_lowest_n, closest, closest_n};
pub use update::{mean_update, update_mean};
