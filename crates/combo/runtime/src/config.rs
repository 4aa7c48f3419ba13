//! Runtime tunables and their TOML loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// What to do with a token that arrives while an actor's input buffer is full.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OverflowPolicy {
    /// Leave the buffer untouched and return an error to the input layer.
    #[default]
    Reject,
    /// Silently discard the incoming token.
    DropNewest,
    /// Discard the oldest buffered token to make room.
    DropOldest,
}

/// Runtime configuration for the combo driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Handling of input that arrives while a buffer is full.
    pub overflow: OverflowPolicy,

    /// Consecutive busy steps after which a warning is logged for an actor.
    /// The actor is not unblocked; `0` disables the warning.
    pub busy_warn_steps: u32,

    /// Refuse graphs that fail structural validation instead of logging them.
    pub strict_graph: bool,
}

impl RuntimeConfig {
    /// Ten seconds at a 60 Hz simulation step.
    pub const DEFAULT_BUSY_WARN_STEPS: u32 = 600;

    pub fn new() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            busy_warn_steps: Self::DEFAULT_BUSY_WARN_STEPS,
            strict_graph: false,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_busy_warn_steps(mut self, steps: u32) -> Self {
        self.busy_warn_steps = steps;
        self
    }

    pub fn with_strict_graph(mut self, strict: bool) -> Self {
        self.strict_graph = strict;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Loader for runtime configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`RuntimeConfig::default`].
    pub fn load(path: &Path) -> LoadResult<RuntimeConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML at {:?}: {}", path, e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<RuntimeConfig> {
        let config: RuntimeConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.busy_warn_steps, 600);
    }

    #[test]
    fn parses_every_key() {
        let config = ConfigLoader::parse(
            r#"
            overflow = "drop_oldest"
            busy_warn_steps = 0
            strict_graph = true
            "#,
        )
        .unwrap();

        assert_eq!(config.overflow, OverflowPolicy::DropOldest);
        assert_eq!(config.busy_warn_steps, 0);
        assert!(config.strict_graph);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(ConfigLoader::parse(r#"overflow = "drop_everything""#).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "overflow = \"drop_newest\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.overflow, OverflowPolicy::DropNewest);
        assert!(!config.strict_graph);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("combo.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn policy_names_round_trip_through_strum() {
        assert_eq!(OverflowPolicy::DropOldest.as_ref(), "drop_oldest");
        assert_eq!(
            OverflowPolicy::from_str("DROP_NEWEST").unwrap(),
            OverflowPolicy::DropNewest
        );
    }
}
