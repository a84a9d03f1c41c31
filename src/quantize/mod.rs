pub mod error;
pub mod palette;
pub mod quantizer;

pub use error::QuantizeError;
pub use palette::Palette;
pub use quantizer::{load_image, QuantizedImage, Quantizer};
