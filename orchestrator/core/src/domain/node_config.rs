// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Node Configuration Types
//
// Defines the configuration schema for an Ada Stargate node:
// - Kubernetes-style manifest format (apiVersion/kind/metadata/spec)
// - Network surface (bind address, port, CORS origins)
// - Optional intent classifier (provider, credentials, timeout)
// - Simulation constants used by the domain handlers
// - Observability settings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::workers::{DEFAULT_BLOCKED_DAY, DEFAULT_VAT_RATE};

pub const API_VERSION: &str = "ada.stargate/v1";
pub const KIND: &str = "NodeConfig";
pub const CONFIG_PATH_ENV: &str = "ADA_CONFIG_PATH";

/// Top-level Kubernetes-style node configuration manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigManifest {
    /// API version (must be "ada.stargate/v1")
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind (must be "NodeConfig")
    pub kind: String,

    pub metadata: ManifestMetadata,

    #[serde(default)]
    pub spec: NodeConfigSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Human-readable node name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigSpec {
    #[serde(default)]
    pub node: NodeIdentity,

    #[serde(default)]
    pub network: NetworkConfig,

    /// Optional intent classifier. Absent means keyword routing only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<ClassifierConfig>,

    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observability: Option<ObservabilityConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeIdentity {
    /// Unique stable node identifier (UUID recommended)
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for NodeIdentity {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            region: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network bind address (e.g. "0.0.0.0" or "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP API port
    #[serde(default = "default_api_port")]
    pub port: u16,

    /// Origins allowed by the CORS layer
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Artificial delay added to every chat request
    #[serde(default, with = "humantime_serde")]
    pub simulated_latency: Duration,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_api_port(),
            cors_origins: default_cors_origins(),
            simulated_latency: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    Gemini,
    #[serde(rename = "openai")]
    OpenAI,
    /// OpenAI-compatible APIs (LM Studio, vLLM, etc.)
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
    Anthropic,
    Ollama,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::OpenAICompatible => "openai-compatible",
            Self::Anthropic => "anthropic",
            Self::Ollama => "ollama",
        }
    }

    /// Local providers run without credentials
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Ollama | Self::OpenAICompatible)
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::OpenAI | Self::OpenAICompatible => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com/v1",
            Self::Ollama => "http://localhost:11434",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    /// API endpoint URL (defaults to the provider's public endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key (supports "env:VAR_NAME" for environment variables)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier for the provider API
    pub model: String,

    /// Upper bound for a single classification call
    #[serde(default = "default_classifier_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub temperature: f32,

    #[serde(default = "default_classifier_max_tokens")]
    pub max_tokens: u32,

    /// Handlebars template; `{{prompt}}` is the user's instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
}

impl ClassifierConfig {
    pub fn new(provider_type: ProviderType, model: impl Into<String>) -> Self {
        Self {
            enabled: true,
            provider_type,
            endpoint: None,
            api_key: None,
            model: model.into(),
            timeout: default_classifier_timeout(),
            temperature: 0.0,
            max_tokens: default_classifier_max_tokens(),
            prompt_template: None,
        }
    }

    /// Enabled and naming a model
    pub fn is_active(&self) -> bool {
        self.enabled && !self.model.trim().is_empty()
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.provider_type.default_endpoint())
    }
}

/// Constants behind the simulated handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,

    /// Invoice amount used when the prompt carries no number
    #[serde(default = "default_amount")]
    pub default_amount: f64,

    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Days of month the travel lift is under maintenance
    #[serde(default = "default_blocked_days")]
    pub blocked_days: Vec<u32>,

    /// Service date used when the prompt carries no ISO date
    #[serde(default = "default_service_date")]
    pub default_service_date: String,

    #[serde(default = "default_service_type")]
    pub service_type: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            vat_rate: default_vat_rate(),
            default_amount: default_amount(),
            currency: default_currency(),
            blocked_days: default_blocked_days(),
            default_service_date: default_service_date(),
            service_type: default_service_type(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format ("json" or "text")
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Prometheus exporter port
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_classifier_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_classifier_max_tokens() -> u32 {
    64
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

fn default_amount() -> f64 {
    1000.0
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_blocked_days() -> Vec<u32> {
    vec![DEFAULT_BLOCKED_DAY]
}

fn default_service_date() -> String {
    "tomorrow".to_string()
}

fn default_service_type() -> String {
    "HAUL_OUT".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

impl Default for NodeConfigSpec {
    fn default() -> Self {
        Self {
            node: NodeIdentity::default(),
            network: NetworkConfig::default(),
            classifier: None,
            simulation: SimulationConfig::default(),
            observability: None,
        }
    }
}

impl Default for NodeConfigManifest {
    fn default() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "ada-node".to_string());

        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ManifestMetadata {
                name: hostname,
                version: Some("1.0.0".to_string()),
                labels: None,
            },
            spec: NodeConfigSpec::default(),
        }
    }
}

impl NodeConfigManifest {
    /// Load configuration from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Discover configuration file using precedence order
    /// 1. ADA_CONFIG_PATH environment variable
    /// 2. ./ada-config.yaml (working directory)
    /// 3. ~/.ada/config.yaml (user home)
    /// 4. /etc/ada/config.yaml (system, Unix) or C:\ProgramData\Ada\config.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let cwd = PathBuf::from("./ada-config.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".ada").join("config.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        #[cfg(unix)]
        let system_config = PathBuf::from("/etc/ada/config.yaml");
        #[cfg(windows)]
        let system_config = PathBuf::from("C:\\ProgramData\\Ada\\config.yaml");

        if system_config.exists() {
            return Some(system_config);
        }

        None
    }

    /// Load configuration with discovery, fallback to default
    pub fn load_or_default(cli_path: Option<PathBuf>) -> anyhow::Result<Self> {
        // Explicit CLI path fails if missing/invalid
        if let Some(path) = cli_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load config at {:?}: {}", path, e)
            })?;
            config.apply_env_overrides();
            return Ok(config);
        }

        if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            let mut config = Self::from_yaml_file(config_path)?;
            config.apply_env_overrides();
            Ok(config)
        } else {
            tracing::warn!("No configuration file found in standard locations. Using defaults.");
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ADA_CLASSIFIER_ENABLED") {
            match parse_flag(&val) {
                Some(enabled) => match self.spec.classifier.as_mut() {
                    Some(classifier) => {
                        tracing::info!("Environment override: ADA_CLASSIFIER_ENABLED={}", enabled);
                        classifier.enabled = enabled;
                    }
                    None if enabled => tracing::warn!(
                        "ADA_CLASSIFIER_ENABLED=true but no classifier is configured. Ignoring."
                    ),
                    None => {}
                },
                None => tracing::warn!(
                    "Invalid value for ADA_CLASSIFIER_ENABLED: '{}'. Expected true/false. Ignoring.",
                    val
                ),
            }
        }

        if let Some(model) = lookup("ADA_CLASSIFIER_MODEL").filter(|m| !m.trim().is_empty()) {
            if let Some(classifier) = self.spec.classifier.as_mut() {
                tracing::info!("Environment override: ADA_CLASSIFIER_MODEL={}", model);
                classifier.model = model.trim().to_string();
            }
        }

        // Simulation mode wins over ADA_CLASSIFIER_ENABLED
        if let Some(val) = lookup("ADA_SIMULATION_MODE") {
            match parse_flag(&val) {
                Some(true) => {
                    if let Some(classifier) = self.spec.classifier.as_mut() {
                        tracing::info!("Environment override: ADA_SIMULATION_MODE=true, classifier disabled");
                        classifier.enabled = false;
                    }
                }
                Some(false) => {}
                None => tracing::warn!(
                    "Invalid value for ADA_SIMULATION_MODE: '{}'. Expected true/false. Ignoring.",
                    val
                ),
            }
        }

        if let Some(origins) = lookup("ADA_CORS_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
            if !origins.is_empty() {
                tracing::info!("Environment override: ADA_CORS_ORIGINS={:?}", origins);
                self.spec.network.cors_origins = origins;
            }
        }
    }

    /// Classifier section, if present and enabled
    pub fn active_classifier(&self) -> Option<&ClassifierConfig> {
        self.spec.classifier.as_ref().filter(|c| c.enabled)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_version != API_VERSION {
            anyhow::bail!(
                "Invalid apiVersion: '{}'. Must be '{}'",
                self.api_version,
                API_VERSION
            );
        }

        if self.kind != KIND {
            anyhow::bail!("Invalid kind: '{}'. Must be '{}'", self.kind, KIND);
        }

        if self.metadata.name.is_empty() {
            anyhow::bail!("metadata.name cannot be empty");
        }

        if self.spec.node.id.is_empty() {
            anyhow::bail!("spec.node.id cannot be empty");
        }

        let simulation = &self.spec.simulation;
        if !simulation.vat_rate.is_finite() || !(0.0..=1.0).contains(&simulation.vat_rate) {
            anyhow::bail!(
                "spec.simulation.vat_rate must be between 0 and 1, got {}",
                simulation.vat_rate
            );
        }
        if !simulation.default_amount.is_finite() || simulation.default_amount < 0.0 {
            anyhow::bail!(
                "spec.simulation.default_amount must be a non-negative number, got {}",
                simulation.default_amount
            );
        }
        if let Some(day) = simulation.blocked_days.iter().find(|d| !(1..=31).contains(*d)) {
            anyhow::bail!("spec.simulation.blocked_days contains invalid day-of-month: {}", day);
        }
        if simulation.currency.trim().is_empty() {
            anyhow::bail!("spec.simulation.currency cannot be empty");
        }
        if simulation.service_type.trim().is_empty() {
            anyhow::bail!("spec.simulation.service_type cannot be empty");
        }

        if let Some(classifier) = self.active_classifier() {
            if classifier.model.trim().is_empty() {
                anyhow::bail!("spec.classifier.model cannot be empty");
            }
            if classifier.endpoint().trim().is_empty() {
                anyhow::bail!("spec.classifier.endpoint cannot be empty");
            }
            if classifier.timeout.is_zero() {
                anyhow::bail!("spec.classifier.timeout must be greater than zero");
            }
            if let Some(template) = &classifier.prompt_template {
                handlebars::template::Template::compile(template).map_err(|e| {
                    anyhow::anyhow!("spec.classifier.prompt_template is invalid: {}", e)
                })?;
            }
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_manifest() {
        let manifest = NodeConfigManifest::default();
        assert_eq!(manifest.api_version, API_VERSION);
        assert_eq!(manifest.kind, KIND);
        assert!(!manifest.metadata.name.is_empty());
        assert!(manifest.spec.classifier.is_none());
        assert_eq!(manifest.spec.network.port, 8000);
        assert_eq!(manifest.spec.simulation.blocked_days, vec![15]);
        assert_eq!(manifest.spec.simulation.default_amount, 1000.0);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_minimal_yaml_fills_defaults() {
        let yaml = r#"
apiVersion: ada.stargate/v1
kind: NodeConfig
metadata:
  name: marina-edge
spec:
  node:
    id: 550e8400-e29b-41d4-a716-446655440000
  classifier:
    type: gemini
    api_key: env:API_KEY
    model: gemini-2.5-flash
    timeout: 3s
"#;
        let manifest = NodeConfigManifest::from_yaml_str(yaml).unwrap();
        let classifier = manifest.spec.classifier.as_ref().unwrap();

        assert!(classifier.enabled);
        assert_eq!(classifier.provider_type, ProviderType::Gemini);
        assert_eq!(classifier.timeout, Duration::from_secs(3));
        assert_eq!(classifier.endpoint(), ProviderType::Gemini.default_endpoint());
        assert_eq!(manifest.spec.simulation.vat_rate, 0.18);
        assert_eq!(manifest.spec.network.cors_origins, vec!["http://localhost:3000"]);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut manifest = NodeConfigManifest::default();
        assert!(manifest.validate().is_ok());

        manifest.api_version = "wrong/v1".to_string();
        assert!(manifest.validate().is_err());
        manifest.api_version = API_VERSION.to_string();

        manifest.kind = "WrongKind".to_string();
        assert!(manifest.validate().is_err());
        manifest.kind = KIND.to_string();

        manifest.spec.simulation.vat_rate = 1.5;
        assert!(manifest.validate().is_err());
        manifest.spec.simulation.vat_rate = 0.18;

        manifest.spec.simulation.blocked_days = vec![0];
        assert!(manifest.validate().is_err());
        manifest.spec.simulation.blocked_days = vec![13, 15];
        assert!(manifest.validate().is_ok());

        let mut classifier = ClassifierConfig::new(ProviderType::OpenAI, "");
        manifest.spec.classifier = Some(classifier.clone());
        assert!(manifest.validate().is_err());

        classifier.model = "gpt-4o-mini".to_string();
        classifier.prompt_template = Some("{{#if prompt}}".to_string());
        manifest.spec.classifier = Some(classifier.clone());
        assert!(manifest.validate().is_err());

        // Disabled classifiers are not validated
        classifier.enabled = false;
        manifest.spec.classifier = Some(classifier);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_simulation_mode_override_disables_classifier() {
        let mut manifest = NodeConfigManifest::default();
        manifest.spec.classifier = Some(ClassifierConfig::new(ProviderType::Gemini, "gemini-2.5-flash"));

        manifest.apply_overrides(env(&[
            ("ADA_CLASSIFIER_ENABLED", "true"),
            ("ADA_SIMULATION_MODE", "yes"),
        ]));
        assert!(manifest.active_classifier().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut manifest = NodeConfigManifest::default();
        manifest.spec.classifier = Some(ClassifierConfig::new(ProviderType::Ollama, "llama3.2"));

        manifest.apply_overrides(env(&[
            ("ADA_CLASSIFIER_ENABLED", "off"),
            ("ADA_CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]));
        assert!(manifest.active_classifier().is_none());
        assert_eq!(
            manifest.spec.network.cors_origins,
            vec!["http://a.test", "http://b.test"]
        );

        manifest.apply_overrides(env(&[
            ("ADA_CLASSIFIER_ENABLED", "1"),
            ("ADA_CLASSIFIER_MODEL", "qwen2.5"),
        ]));
        let classifier = manifest.active_classifier().unwrap();
        assert_eq!(classifier.model, "qwen2.5");

        // Garbage values leave the configuration untouched
        manifest.apply_overrides(env(&[("ADA_CLASSIFIER_ENABLED", "maybe")]));
        assert!(manifest.active_classifier().is_some());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ada-config.yaml");

        let mut manifest = NodeConfigManifest::default();
        manifest.spec.simulation.currency = "TRY".to_string();
        manifest.to_yaml_file(&path).unwrap();

        let loaded = NodeConfigManifest::load_or_default(Some(path)).unwrap();
        assert_eq!(loaded.spec.simulation.currency, "TRY");
        assert_eq!(loaded.spec.node.id, manifest.spec.node.id);
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let result = NodeConfigManifest::load_or_default(Some(PathBuf::from(
            "/definitely/not/here/ada-config.yaml",
        )));
        assert!(result.is_err());
    }
}
