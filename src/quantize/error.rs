use thiserror::Error;

use crate::cluster::error::ClusterError;

/// Errors raised while quantizing an image.
///
/// Core argument errors pass through unchanged; decode and filesystem
/// failures are wrapped where they occur. A cluster that loses all of its
/// pixels is not an error — the centroid keeps its previous position.
#[derive(Debug, Error)]
pub enum QuantizeError {
    #[error("cannot decode image: {0}")]
    UnreadableImage(#[from] image::ImageError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
