// reexports modules for use in benchmarks and integration tests

pub mod artifact;
pub mod config;
pub mod error;
pub mod generator;
pub mod header;

pub use error::{GenerateError, GenerateResult};
pub use generator::{generate, ShaderHeaderGenerator};
