//! # Model Descriptors
//!
//! Human-facing information about registered generators.

use config::constants::SUPPORTED_FORMATS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog entry for a registered model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub loaded: bool,
    pub device: String,
    pub supported_formats: Vec<String>,
    pub estimated_time: String,
    pub quality: String,
}

impl ModelDescriptor {
    pub(crate) fn new(name: &str, available: bool, loaded: bool, device: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description(name),
            available,
            loaded,
            device: device.to_string(),
            supported_formats: SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect(),
            estimated_time: estimated_time(name).to_string(),
            quality: quality(name).to_string(),
        }
    }
}

/// Per-model runtime status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub available: bool,
    pub loaded: bool,
    pub device: String,
}

/// Registry-wide counts plus per-model status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_models: usize,
    pub available_models: usize,
    pub loaded_models: usize,
    pub models: BTreeMap<String, ModelStatus>,
}

/// Description for well-known model names.
pub fn description(name: &str) -> String {
    match name {
        "demo" => {
            "Demo model that generates simple geometric shapes based on text descriptions".into()
        }
        "point-e" => "OpenAI Point-E model for generating 3D point clouds from text".into(),
        "shap-e" => "OpenAI Shap-E model for generating 3D shapes and textures from text".into(),
        "custom" => "Custom trained model for specialized 3D generation".into(),
        other => format!("Text-to-3D model: {other}"),
    }
}

/// Rough generation time for well-known model names.
pub fn estimated_time(name: &str) -> &'static str {
    match name {
        "demo" => "< 1 second",
        "point-e" => "30-60 seconds",
        "shap-e" => "60-120 seconds",
        "custom" => "Variable",
        _ => "Unknown",
    }
}

/// Quality rating for well-known model names.
pub fn quality(name: &str) -> &'static str {
    match name {
        "demo" => "Basic",
        "point-e" => "Good",
        "shap-e" => "High",
        "custom" => "Variable",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_names() {
        assert_eq!(quality("shap-e"), "High");
        assert_eq!(estimated_time("demo"), "< 1 second");
        assert_eq!(description("mystery"), "Text-to-3D model: mystery");
        assert_eq!(quality("mystery"), "Unknown");
    }

    #[test]
    fn test_descriptor_formats() {
        let d = ModelDescriptor::new("demo", true, false, "cpu");
        assert_eq!(d.supported_formats, vec!["stl", "obj", "ply"]);
        assert_eq!(d.quality, "Basic");
        assert!(!d.loaded);
    }
}
