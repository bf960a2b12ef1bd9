pub mod bgr;
pub mod histogram;
pub mod hsv;
pub mod loader;

pub use bgr::*;
pub use histogram::*;
pub use hsv::*;
pub use loader::*;
