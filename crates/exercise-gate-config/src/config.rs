// crates/exercise-gate-config/src/config.rs
// ============================================================================
// Module: Exercise Gate Configuration
// Description: Configuration loading and validation for verification runs.
// Purpose: Provide strict TOML parsing with hard limits and typed settings.
// Dependencies: exercise-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from `exercise-gate.toml` (or the file named by
//! `EXERCISE_GATE_CONFIG`, or an explicit path) with strict size and path
//! limits. Every section has defaults, so an empty file is a valid config.
//! Invalid values are rejected at load time rather than clamped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use exercise_gate_core::AggregatorConfig;
use exercise_gate_core::AuditSink;
use exercise_gate_core::FileAuditSink;
use exercise_gate_core::NoopAuditSink;
use exercise_gate_core::StderrAuditSink;
use exercise_gate_core::TopicAccessPolicy;
use exercise_gate_core::VerifierConfig;
use exercise_gate_core::core::identifiers::validate_identifier;
use exercise_gate_core::runtime::default_workers;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "exercise-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "EXERCISE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default per-fixture timeout in milliseconds.
pub(crate) const DEFAULT_FIXTURE_TIMEOUT_MS: u64 = 5_000;
/// Maximum per-fixture timeout in milliseconds.
pub(crate) const MAX_FIXTURE_TIMEOUT_MS: u64 = 600_000;
/// Maximum worker threads.
pub(crate) const MAX_WORKERS: usize = 256;
/// Maximum entries in a topic allowlist or denylist.
pub(crate) const MAX_TOPIC_LIST_ENTRIES: usize = 256;

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Harness configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Verifier settings.
    #[serde(default)]
    pub verifier: VerifierSection,
    /// Worker pool and topic selection.
    #[serde(default)]
    pub runner: RunnerSection,
    /// Audit output.
    #[serde(default)]
    pub audit: AuditSection,
    /// Fixture override directory.
    #[serde(default)]
    pub fixtures: FixturesSection,
}

impl HarnessConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::parse(content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.verifier.validate()?;
        self.runner.validate()?;
        self.audit.validate()?;
        self.fixtures.validate()
    }

    /// Verifier settings derived from the config.
    #[must_use]
    pub const fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            fixture_timeout: Duration::from_millis(self.verifier.fixture_timeout_ms),
        }
    }

    /// Aggregator settings derived from the config.
    #[must_use]
    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            workers: self.runner.workers.unwrap_or_else(default_workers),
            include_stubs: self.runner.include_stubs,
            policy: self.runner.policy(),
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit file cannot be opened.
    pub fn audit_sink(&self) -> Result<Arc<dyn AuditSink>, ConfigError> {
        match (self.audit.sink, self.audit.path.as_deref()) {
            (AuditSinkKind::None, _) => Ok(Arc::new(NoopAuditSink)),
            (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
            (AuditSinkKind::File, Some(path)) => FileAuditSink::new(Path::new(path))
                .map(|sink| Arc::new(sink) as Arc<dyn AuditSink>)
                .map_err(|err| ConfigError::Io(err.to_string())),
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for file sink".to_string()))
            }
        }
    }
}

// ============================================================================
// SECTION: Sections
// ============================================================================

/// `[verifier]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifierSection {
    /// Per-fixture timeout in milliseconds.
    #[serde(default = "default_fixture_timeout_ms")]
    pub fixture_timeout_ms: u64,
}

impl Default for VerifierSection {
    fn default() -> Self {
        Self {
            fixture_timeout_ms: default_fixture_timeout_ms(),
        }
    }
}

impl VerifierSection {
    /// Validates verifier settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1 ..= MAX_FIXTURE_TIMEOUT_MS).contains(&self.fixture_timeout_ms) {
            return Err(ConfigError::Invalid(format!(
                "verifier.fixture_timeout_ms must be between 1 and {MAX_FIXTURE_TIMEOUT_MS}"
            )));
        }
        Ok(())
    }
}

/// `[runner]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerSection {
    /// Worker threads; defaults to available parallelism capped at 8.
    #[serde(default)]
    pub workers: Option<usize>,
    /// Whether stub candidates are verified.
    #[serde(default = "default_include_stubs")]
    pub include_stubs: bool,
    /// Topics to verify; all when absent.
    #[serde(default)]
    pub allowlist: Option<Vec<String>>,
    /// Topics to skip.
    #[serde(default)]
    pub denylist: Vec<String>,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            workers: None,
            include_stubs: default_include_stubs(),
            allowlist: None,
            denylist: Vec::new(),
        }
    }
}

impl RunnerSection {
    /// Validates runner settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(workers) = self.workers
            && !(1 ..= MAX_WORKERS).contains(&workers)
        {
            return Err(ConfigError::Invalid(format!(
                "runner.workers must be between 1 and {MAX_WORKERS}"
            )));
        }
        if let Some(allowlist) = &self.allowlist {
            validate_topic_list("runner.allowlist", allowlist)?;
        }
        validate_topic_list("runner.denylist", &self.denylist)
    }

    /// Topic access policy from the allowlist and denylist.
    #[must_use]
    pub fn policy(&self) -> TopicAccessPolicy {
        TopicAccessPolicy {
            allowlist: self.allowlist.as_ref().map(|list| list.iter().cloned().collect()),
            denylist: self.denylist.iter().cloned().collect::<BTreeSet<_>>(),
        }
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to `audit.path`.
    File,
}

/// `[audit]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSection {
    /// Sink selection.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file path for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditSection {
    /// Validates audit settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (&self.sink, &self.path) {
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for file sink".to_string()))
            }
            (_, Some(path)) => validate_path_string("audit.path", path),
            _ => Ok(()),
        }
    }
}

/// `[fixtures]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixturesSection {
    /// Directory of `<topic-id>.json` fixture overrides.
    #[serde(default)]
    pub dir: Option<String>,
}

impl FixturesSection {
    /// Validates fixture settings.
    fn validate(&self) -> Result<(), ConfigError> {
        self.dir.as_deref().map_or(Ok(()), |dir| validate_path_string("fixtures.dir", dir))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from an explicit value, the environment, or the default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    if path.components().any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH) {
        return Err(ConfigError::Invalid("config path component too long".to_string()));
    }
    Ok(())
}

/// Validates a configured path string, which must be used exactly as written.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() != value.len() {
        return Err(ConfigError::Invalid(format!(
            "{field} must not have surrounding whitespace"
        )));
    }
    validate_path(Path::new(value))
        .map_err(|_| ConfigError::Invalid(format!("{field} exceeds path length limits")))
}

/// Validates a topic allowlist or denylist.
fn validate_topic_list(field: &str, topics: &[String]) -> Result<(), ConfigError> {
    if topics.len() > MAX_TOPIC_LIST_ENTRIES {
        return Err(ConfigError::Invalid(format!(
            "{field} exceeds {MAX_TOPIC_LIST_ENTRIES} entries"
        )));
    }
    for topic in topics {
        validate_identifier("topic", topic)
            .map_err(|err| ConfigError::Invalid(format!("{field}: {err}")))?;
    }
    Ok(())
}

/// Default per-fixture timeout.
pub(crate) const fn default_fixture_timeout_ms() -> u64 {
    DEFAULT_FIXTURE_TIMEOUT_MS
}

/// Stubs are verified by default.
pub(crate) const fn default_include_stubs() -> bool {
    true
}
