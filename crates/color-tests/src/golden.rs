//! Golden reference values
//!
//! Cases are stored as JSON next to this crate so they can be reviewed and
//! extended without touching test code.

use anyhow::{Context, Result, anyhow};
use oxcolor_core::color::white_point;
use oxcolor_core::{LmsAdaptationMatrix, WhitePoint};
use serde::Deserialize;
use std::path::PathBuf;

/// A single chromatic adaptation case
#[derive(Debug, Clone, Deserialize)]
pub struct AdaptationCase {
    pub name: String,
    /// Preset name as accepted by `LmsAdaptationMatrix::from_str`
    pub model: String,
    pub source_white: String,
    pub target_white: String,
    pub input: [f64; 3],
    pub expected: [f64; 3],
    pub tolerance: f64,
}

impl AdaptationCase {
    /// Resolve the cone basis named by `model`
    pub fn preset(&self) -> Result<LmsAdaptationMatrix> {
        self.model
            .parse()
            .with_context(|| format!("case '{}'", self.name))
    }

    /// Resolve both white points
    pub fn whites(&self) -> Result<(WhitePoint, WhitePoint)> {
        Ok((resolve_white(&self.source_white)?, resolve_white(&self.target_white)?))
    }
}

/// A CIEDE2000 reference pair
#[derive(Debug, Clone, Deserialize)]
pub struct DeltaECase {
    pub name: String,
    pub lab1: [f64; 3],
    pub lab2: [f64; 3],
    pub expected: f64,
    pub tolerance: f64,
}

/// Contents of `data/golden.json`
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenData {
    pub adaptation: Vec<AdaptationCase>,
    pub delta_e_2000: Vec<DeltaECase>,
}

/// Path of the golden data file
pub fn golden_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("golden.json")
}

/// Load and parse the golden data file
pub fn load_golden() -> Result<GoldenData> {
    let path = golden_path();
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn resolve_white(name: &str) -> Result<WhitePoint> {
    white_point::from_name(name).ok_or_else(|| anyhow!("unknown white point '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_file_parses() {
        let data = load_golden().unwrap();
        assert!(!data.adaptation.is_empty());
        assert!(!data.delta_e_2000.is_empty());

        for case in &data.adaptation {
            case.preset().unwrap();
            case.whites().unwrap();
        }
    }

    #[test]
    fn test_unknown_white_is_an_error() {
        assert!(resolve_white("D93").is_err());
    }
}
