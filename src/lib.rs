pub mod math;
pub mod cluster;
pub mod quantize;
pub mod nn;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use cluster::kmeans::{KMeans, KMeansFit};
pub use cluster::error::ClusterError;
pub use quantize::quantizer::{QuantizedImage, Quantizer};
pub use quantize::palette::Palette;
pub use quantize::error::QuantizeError;
pub use nn::xor::XorNetwork;
