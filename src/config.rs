use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogsConfig {
    #[serde(default = "default_logs_path")]
    pub path: PathBuf,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            path: default_logs_path(),
        }
    }
}

fn default_logs_path() -> PathBuf {
    PathBuf::from("./data/logs.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReviewConfig {
    #[serde(default = "default_high_confidence")]
    pub high_confidence: f64,
    #[serde(default = "default_medium_confidence")]
    pub medium_confidence: f64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            high_confidence: default_high_confidence(),
            medium_confidence: default_medium_confidence(),
        }
    }
}

fn default_high_confidence() -> f64 {
    0.8
}
fn default_medium_confidence() -> f64 {
    0.6
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            snippet_chars: default_snippet_chars(),
            list_limit: default_list_limit(),
        }
    }
}

fn default_snippet_chars() -> usize {
    80
}
fn default_list_limit() -> usize {
    50
}

impl Config {
    /// Defaults for every section, used when no config file exists.
    pub fn minimal() -> Self {
        Self {
            logs: LogsConfig::default(),
            review: ReviewConfig::default(),
            display: DisplayConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        let r = &self.review;
        if !(0.0..=1.0).contains(&r.high_confidence) {
            anyhow::bail!("review.high_confidence must be in [0.0, 1.0]");
        }
        if !(0.0..=1.0).contains(&r.medium_confidence) {
            anyhow::bail!("review.medium_confidence must be in [0.0, 1.0]");
        }
        if r.medium_confidence > r.high_confidence {
            anyhow::bail!(
                "review.medium_confidence ({}) must not exceed review.high_confidence ({})",
                r.medium_confidence,
                r.high_confidence
            );
        }
        if self.display.snippet_chars == 0 {
            anyhow::bail!("display.snippet_chars must be > 0");
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(Config::minimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_src: &str) -> Result<Config> {
        let config: Config = toml::from_str(toml_src)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.logs.path, PathBuf::from("./data/logs.json"));
        assert!((config.review.high_confidence - 0.8).abs() < 1e-9);
        assert!((config.review.medium_confidence - 0.6).abs() < 1e-9);
        assert_eq!(config.display.snippet_chars, 80);
        assert_eq!(config.display.list_limit, 50);
    }

    #[test]
    fn test_overrides() {
        let config = parse(
            r#"
[logs]
path = "/tmp/review/logs.json"

[review]
high_confidence = 0.9

[display]
list_limit = 5
"#,
        )
        .unwrap();
        assert_eq!(config.logs.path, PathBuf::from("/tmp/review/logs.json"));
        assert!((config.review.high_confidence - 0.9).abs() < 1e-9);
        assert_eq!(config.display.list_limit, 5);
        assert_eq!(config.display.snippet_chars, 80);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err = parse("[review]\nhigh_confidence = 0.5\nmedium_confidence = 0.7\n").unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(parse("[review]\nhigh_confidence = 1.5\n").is_err());
    }

    #[test]
    fn test_rejects_zero_snippet() {
        assert!(parse("[display]\nsnippet_chars = 0\n").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config_or_default(Path::new("/nonexistent/clr.toml")).unwrap();
        assert_eq!(config.display.list_limit, 50);
        assert!(load_config(Path::new("/nonexistent/clr.toml")).is_err());
    }
}
