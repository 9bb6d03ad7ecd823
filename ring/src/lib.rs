pub mod errors;
pub mod fft;
pub mod modulus;
pub mod params;
pub mod poly;
pub mod ring;

pub use errors::RingError;
pub use fft::FftTable;
pub use modulus::Modulus;
pub use params::RingParams;
pub use poly::Polynomial;
pub use ring::Ring;
