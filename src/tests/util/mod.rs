pub mod polygon;
mod load_pslg;
mod vtest;
use std::{env, fs, path, process};

pub use vtest::VTest;
pub use load_pslg::{load_pslg, parse_pslg, LoadedPslg};

/// Tolerance for coordinates computed with `f64` trigonometry
pub const EPSILON: f64 = 1e-12;

pub fn assert_near(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= EPSILON, "expected {}, got {}", expected, actual);
}

/// A fresh path in the system temp directory, unique to this process and `name`
pub fn temp_path(name: &str) -> path::PathBuf {
    let path = env::temp_dir().join(format!("circle_pslg_{}_{}.poly", name, process::id()));
    let _ = fs::remove_file(&path);
    path
}
