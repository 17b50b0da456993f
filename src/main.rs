mod load;
mod logger;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use kmeans_primitives::{
    assignments, center_shift, distance, inertia, kmeans_iteration, mean_update, random_seeds,
    Centroid,
};
use load::{load_dataset, save_clusters, save_dataset, synthetic_blobs};
use logger::init_logger;

type Labelled = Centroid<f64, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricKind {
    Euclidean,
    SquaredEuclidean,
    Taxicab,
    Chebyshev,
    Emd,
}

impl MetricKind {
    fn metric(self) -> fn(&[f64], &[f64]) -> f64 {
        match self {
            MetricKind::Euclidean => distance::euclidean,
            MetricKind::SquaredEuclidean => distance::squared_euclidean,
            MetricKind::Taxicab => distance::taxicab,
            MetricKind::Chebyshev => distance::chebyshev,
            MetricKind::Emd => distance::earth_movers_distance,
        }
    }
}

/// Cluster a dataset with Lloyd's algorithm.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Protobuf dataset to cluster; synthetic blobs are generated when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the resulting clusters
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where to write the dataset that was clustered
    #[arg(long)]
    save_data: Option<PathBuf>,

    /// Number of clusters
    #[arg(short, default_value_t = 3)]
    k: usize,

    /// Upper bound on refinement passes
    #[arg(long, default_value_t = 100)]
    max_iters: usize,

    /// Stop once the center shift falls below this fraction of the centers' norm
    #[arg(long, default_value_t = 1e-4)]
    threshold: f64,

    /// Pseudo-count of the previous center in each update
    #[arg(long, default_value_t = 0.0)]
    weight: f64,

    /// Seed for the random generator; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Distance used to assign points to clusters
    #[arg(long, value_enum, default_value_t = MetricKind::Euclidean)]
    metric: MetricKind,

    /// Points per synthetic blob
    #[arg(long, default_value_t = 100)]
    points: usize,

    /// Dimension of synthetic points
    #[arg(long, default_value_t = 2)]
    dimension: usize,
}

fn centers_norm(clusters: &[Labelled]) -> f64 {
    clusters
        .iter()
        .flat_map(|cluster| cluster.center.iter())
        .map(|x| x * x)
        .sum::<f64>()
        .sqrt()
}

fn kmeans(
    opts: &Opts,
    data: &[Vec<f64>],
    rng: &mut StdRng,
) -> Result<Vec<Labelled>, Box<dyn Error>> {
    let metric = opts.metric.metric();
    let update = mean_update::<f64, Labelled>(opts.weight);

    let mut clusters =
        random_seeds(data, opts.k, rng, |i, center| Centroid::with_extra(center, i))?;
    log::info!("initialized {} seeds", clusters.len());

    for iter in 0..opts.max_iters {
        if iter > 0 && iter % 10 == 0 {
            log::info!("Finished iteration {}", iter);
        }

        let next = kmeans_iteration(data, &clusters, metric, &update)?;
        let shift = center_shift(&clusters, &next)?;
        clusters = next;

        if shift <= opts.threshold * centers_norm(&clusters) {
            log::info!("Converged after {} iterations", iter + 1);
            return Ok(clusters);
        }
    }

    log::warn!("No convergence within {} iterations", opts.max_iters);
    Ok(clusters)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger()?;
    let opts = Opts::parse();

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let data = match &opts.input {
        Some(path) => load_dataset(path)?,
        None => synthetic_blobs(opts.k, opts.points, opts.dimension, &mut rng),
    };
    if let Some(path) = &opts.save_data {
        save_dataset(path, &data)?;
    }

    log::info!("Starting KMeans with {:?} distance, k = {}", opts.metric, opts.k);
    let clusters = kmeans(&opts, &data, &mut rng)?;

    let metric = opts.metric.metric();
    let mut sizes = vec![0u64; clusters.len()];
    for label in assignments(&data, &clusters, metric)? {
        sizes[label] += 1;
    }
    log::info!("Inertia: {}", inertia(&data, &clusters, metric)?);
    for (cluster, size) in clusters.iter().zip(sizes.iter()) {
        log::info!(
            "cluster #{}: {} points around {:?}",
            cluster.extra,
            size,
            cluster.center
        );
    }

    if let Some(path) = &opts.output {
        save_clusters(path, &clusters, &sizes)?;
    }

    Ok(())
}
