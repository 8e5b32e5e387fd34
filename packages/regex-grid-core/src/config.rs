//! Grid and task generator configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the task generator credential.
pub const GENERATOR_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Output limits used by front ends when reporting results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Change records echoed back after an apply
    pub apply_preview_limit: usize,
    /// Diff records echoed back after a preview
    pub diff_preview_limit: usize,
    /// Rows per page when paging through a table
    pub page_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            apply_preview_limit: 10,
            diff_preview_limit: 20,
            page_size: 50,
        }
    }
}

/// Settings for the external natural-language task generator.
///
/// Built explicitly and handed to the generator at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// API credential, if any
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Completion endpoint
    pub endpoint: String,
    /// Maximum tokens per completion
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            max_tokens: 100,
            temperature: 0.0,
        }
    }
}

impl GeneratorConfig {
    /// Default settings with the credential read from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(GENERATOR_API_KEY_VAR).ok(),
            ..Default::default()
        }
    }

    /// Returns true if a non-empty credential is present.
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.apply_preview_limit, 10);
        assert_eq!(config.diff_preview_limit, 20);
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_grid_config_partial_json_keeps_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"page_size": 25}"#).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.diff_preview_limit, 20);
    }

    #[test]
    fn test_generator_credentials() {
        let mut config = GeneratorConfig::default();
        assert!(!config.has_credentials());
        config.api_key = Some("   ".to_string());
        assert!(!config.has_credentials());
        config.api_key = Some("sk-test".to_string());
        assert!(config.has_credentials());
    }

    #[test]
    fn test_generator_config_from_env() {
        std::env::set_var(GENERATOR_API_KEY_VAR, "sk-from-env");
        let config = GeneratorConfig::from_env();
        assert_eq!(config.api_key.as_deref(), Some("sk-from-env"));
        assert!(config.has_credentials());
        assert_eq!(config.model, GeneratorConfig::default().model);

        std::env::remove_var(GENERATOR_API_KEY_VAR);
        let config = GeneratorConfig::from_env();
        assert_eq!(config.api_key, None);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_generator_api_key_not_serialized() {
        let config = GeneratorConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
