//! Configuration for the determinant engine.

pub mod options;
pub use options::DetOptions;
