use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;
use prost::Message;
use rand::Rng;

use kmeans_primitives::Centroid;

mod proto {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Vector {
        #[prost(double, repeated, tag = "1")]
        pub values: Vec<f64>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Dataset {
        #[prost(message, repeated, tag = "1")]
        pub data: Vec<Vector>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Cluster {
        #[prost(uint64, tag = "1")]
        pub id: u64,
        #[prost(message, optional, tag = "2")]
        pub center: Option<Vector>,
        #[prost(uint64, tag = "3")]
        pub size: u64,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct ClusterSet {
        #[prost(message, repeated, tag = "1")]
        pub clusters: Vec<Cluster>,
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

fn write_bytes(path: &Path, buf: &[u8]) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(buf)?;
    writer.flush()?;
    Ok(())
}

pub fn load_dataset(path: &Path) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    let dataset = proto::Dataset::decode(&*read_bytes(path)?)?;
    log::info!("Loaded {} vectors from {}", dataset.data.len(), path.display());
    Ok(dataset.data.into_iter().map(|v| v.values).collect_vec())
}

pub fn save_dataset(path: &Path, data: &[Vec<f64>]) -> Result<(), Box<dyn Error>> {
    let dataset = proto::Dataset {
        data: data
            .iter()
            .map(|values| proto::Vector {
                values: values.clone(),
            })
            .collect_vec(),
    };
    write_bytes(path, &dataset.encode_to_vec())
}

pub fn save_clusters(
    path: &Path,
    clusters: &[Centroid<f64, usize>],
    sizes: &[u64],
) -> Result<(), Box<dyn Error>> {
    let mut set = proto::ClusterSet::default();
    for (cluster, &size) in clusters.iter().zip(sizes.iter()) {
        set.clusters.push(proto::Cluster {
            id: u64::try_from(cluster.extra)?,
            center: Some(proto::Vector {
                values: cluster.center.clone(),
            }),
            size,
        });
    }
    write_bytes(path, &set.encode_to_vec())?;
    log::info!("Saved {} clusters to {}", clusters.len(), path.display());
    Ok(())
}

/// `blobs` groups of `points` vectors each, scattered uniformly within one
/// unit of a random center in `[-50, 50)^dimension`.
pub fn synthetic_blobs<R: Rng + ?Sized>(
    blobs: usize,
    points: usize,
    dimension: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let mut data = Vec::with_capacity(blobs * points);
    for _ in 0..blobs {
        let center: Vec<f64> = (0..dimension)
            .map(|_| rng.gen_range(-50.0..50.0))
            .collect();
        for _ in 0..points {
            data.push(
                center
                    .iter()
                    .map(|&x| x + rng.gen_range(-1.0..1.0))
                    .collect_vec(),
            );
        }
    }
    data
}
