pub mod error;
pub mod kmeans;

pub use error::ClusterError;
pub use kmeans::{KMeans, KMeansFit};
