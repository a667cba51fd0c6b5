//! JSON job configuration for the batch front-end.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parallel::DEFAULT_WORKERS;

/// A batch job: one input file, an optional grayscale pass, and a list of
/// box-blur kernel sizes to run.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    pub input: PathBuf,
    /// Run the grayscale transform (on by default).
    #[serde(default = "default_true")]
    pub grayscale: bool,
    /// Box-blur kernel sizes; each must be an odd integer >= 3.
    #[serde(default)]
    pub blur_sizes: Vec<usize>,
    /// Worker thread count for the pool.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Directory for output files; defaults to the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Optional path for the JSON timing report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl JobConfig {
    /// Resolve an output file name against the configured output directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("worker count must be at least 1".to_string());
        }
        for &size in &self.blur_sizes {
            if size < 3 || size % 2 == 0 {
                return Err(format!(
                    "blur kernel size {size} must be an odd integer >= 3"
                ));
            }
        }
        Ok(())
    }
}

/// Read and validate a job config from a JSON file.
pub fn load_config(path: &Path) -> Result<JobConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: JobConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: JobConfig = serde_json::from_str(r#"{ "input": "original.bmp" }"#)
            .expect("minimal config parses");
        assert!(config.grayscale);
        assert!(config.blur_sizes.is_empty());
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.output_path("Blur03.bmp"), PathBuf::from("Blur03.bmp"));
    }

    #[test]
    fn full_config_parses() {
        let config: JobConfig = serde_json::from_str(
            r#"{
                "input": "HorizontalRot.bmp",
                "grayscale": false,
                "blurSizes": [3, 5, 81],
                "workers": 8,
                "outputDir": "out",
                "reportJson": "out/report.json"
            }"#,
        )
        .expect("full config parses");
        assert!(!config.grayscale);
        assert_eq!(config.blur_sizes, vec![3, 5, 81]);
        assert_eq!(config.workers, 8);
        assert_eq!(config.output_path("Rblur03X.bmp"), PathBuf::from("out/Rblur03X.bmp"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn even_or_tiny_kernel_sizes_are_rejected() {
        for sizes in ["[4]", "[1]", "[3, 6]"] {
            let json = format!(r#"{{ "input": "a.bmp", "blurSizes": {sizes} }}"#);
            let config: JobConfig = serde_json::from_str(&json).expect("parses");
            assert!(config.validate().is_err(), "sizes {sizes} should be rejected");
        }
    }
}
