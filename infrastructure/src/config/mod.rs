//! Configuration loading and file types

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileModelsConfig, FileProviderConfig};
pub use loader::ConfigLoader;
