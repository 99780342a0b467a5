//! Configuration loading from stridebench.toml
//!
//! Defaults apply per-field, so a partial file only overrides what it
//! names. Discovery walks up from the current directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stridebench_core::BenchConfig;

/// Stridebench configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StrideConfig {
    /// Runner configuration.
    #[serde(default)]
    pub runner: RunnerSection,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputSection,
}

/// Runner defaults applied to benchmarks without explicit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerSection {
    /// Measured rounds per benchmark.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Warmup rounds discarded before measurement.
    #[serde(default)]
    pub warmup_rounds: usize,
    /// Worker pool size.
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Target wall time per round, e.g. "250ms" (enables calibration).
    #[serde(default)]
    pub estimated_time: Option<String>,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            warmup_rounds: 0,
            threads: default_threads(),
            estimated_time: None,
        }
    }
}

fn default_rounds() -> usize {
    1
}
fn default_threads() -> usize {
    1
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory report files are written under.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    "reports".to_string()
}

impl StrideConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load `stridebench.toml` by walking up from the
    /// current directory. `None` means no file was found; callers fall back
    /// with `discover().unwrap_or_default()`.
    pub fn discover() -> Option<Self> {
        Self::discover_from(std::env::current_dir().ok()?)
    }

    /// Walk up from `start` looking for `stridebench.toml`.
    pub fn discover_from(start: impl Into<PathBuf>) -> Option<Self> {
        let mut dir = start.into();
        loop {
            let config_path = dir.join("stridebench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Convert the `[runner]` section into a [`BenchConfig`].
    pub fn bench_config(&self) -> anyhow::Result<BenchConfig> {
        let mut config = BenchConfig::new(self.runner.rounds)
            .warmup_rounds(self.runner.warmup_rounds)
            .threads(self.runner.threads);
        if let Some(raw) = &self.runner.estimated_time {
            config = config.estimated_time(Self::parse_duration(raw)?);
        }
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Parse a duration string (e.g., "3s", "500ms", "2m").
    pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        // Find where the number ends and the unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

        let multiplier_ns: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok(Duration::from_nanos((value * multiplier_ns as f64) as u64))
    }
}
