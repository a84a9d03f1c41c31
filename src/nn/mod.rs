pub mod xor;

pub use xor::XorNetwork;
