//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{load_config, load_config_file, save_config};
pub use paths::{config_dir, config_file_path, resolve_config_path};
pub use types::{Config, DefaultsConfig, OutputConfig};
pub use validate::validate_config;
