//! Shared helpers for CLI integration tests.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// A `prepkit` command isolated from the user's configuration.
///
/// The config path points into `dir`, so no file exists unless a test
/// writes one.
pub fn prepkit(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("prepkit");
    cmd.env("PREPKIT_CONFIG", dir.path().join("config.toml"))
        .env_remove("PREPKIT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}
