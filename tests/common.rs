#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Directory with the small chicago/new_york_city/washington fixtures
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixtures() -> String {
    fixtures_dir().to_string_lossy().to_string()
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Command preconfigured with the fixtures and an isolated (absent) config file,
/// so the user's ~/.bikeshare never leaks into tests.
pub fn bikeshare_with_fixtures(name: &str) -> Command {
    let mut cmd = bikeshare();
    cmd.args(["--data-dir", &fixtures(), "--config", &temp_config(name)]);
    cmd
}
