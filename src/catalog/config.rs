//! Pipeline configuration with compile-time defaults and env overrides

use std::env;
use std::path::PathBuf;

/// Default OpenNGC source files
pub const DEFAULT_NGC_URL: &str =
    "https://github.com/mattiaverga/OpenNGC/raw/master/database_files/NGC.csv";
pub const DEFAULT_ADDENDUM_URL: &str =
    "https://github.com/mattiaverga/OpenNGC/raw/master/database_files/addendum.csv";

pub const DEFAULT_OUTPUT_PATH: &str = "catalog/dso_catalog.json";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update DSO catalog (generated from OpenNGC)";

/// Configuration passed into the pipeline entry point
#[derive(Debug, Clone)]
pub struct Config {
    pub ngc_url: String,
    pub addendum_url: String,
    pub output_path: PathBuf,
    pub commit_message: String,
    /// When true, run git add/commit/push after writing the catalog
    pub auto_commit_and_push: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ngc_url: DEFAULT_NGC_URL.to_string(),
            addendum_url: DEFAULT_ADDENDUM_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            auto_commit_and_push: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// the built-in defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            ngc_url: env::var("NGC_URL").unwrap_or(defaults.ngc_url),
            addendum_url: env::var("ADDENDUM_URL").unwrap_or(defaults.addendum_url),
            output_path: env::var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            commit_message: env::var("GIT_COMMIT_MESSAGE").unwrap_or(defaults.commit_message),
            auto_commit_and_push: env::var("AUTO_COMMIT_AND_PUSH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.auto_commit_and_push),
        }
    }
}
