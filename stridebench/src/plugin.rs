//! Host Test-Runner Integration
//!
//! Two lifecycle hooks mirror what an external test-execution framework
//! calls: a configuration hook before any test runs and a context-finished
//! hook once per test module, after all its benchmarked tests completed.

use std::path::PathBuf;

use log::debug;
use stridebench_core::{TestMeasurement, LOG_TARGET};
use stridebench_report::{MeasurementCollector, ReportError, ReportWriter};

/// Options handed to [`BenchmarkPlugin::configure`] by the host runner.
#[derive(Debug, Clone)]
pub struct PluginOptions {
    /// Whether benchmark collection is active. A disabled plugin's hooks
    /// are no-ops.
    pub enabled: bool,
    /// Directory report files are written under.
    pub output_dir: PathBuf,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from("reports"),
        }
    }
}

/// Benchmark lifecycle hooks for a host test-execution framework.
///
/// Owns the per-module [`MeasurementCollector`] so concurrent module runs
/// can each hold their own plugin instance.
#[derive(Debug)]
pub struct BenchmarkPlugin {
    enabled: bool,
    writer: ReportWriter,
    collector: MeasurementCollector,
}

impl BenchmarkPlugin {
    /// Plugin with default options (enabled, `reports/` output).
    pub fn new() -> Self {
        Self::with_options(PluginOptions::default())
    }

    /// Plugin configured from explicit options.
    pub fn with_options(options: PluginOptions) -> Self {
        Self {
            enabled: options.enabled,
            writer: ReportWriter::new(options.output_dir),
            collector: MeasurementCollector::new(),
        }
    }

    /// Host hook: (re)apply parsed options before tests run.
    pub fn configure(&mut self, options: PluginOptions) {
        self.enabled = options.enabled;
        self.writer = ReportWriter::new(options.output_dir);
    }

    /// Whether benchmark collection is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Measurements collected since the last flush.
    pub fn pending(&self) -> usize {
        self.collector.len()
    }

    /// Record one finished benchmark's measurement. Ignored while disabled.
    pub fn record(&mut self, measurement: TestMeasurement) {
        if !self.enabled {
            return;
        }
        self.collector.record(measurement);
    }

    /// Host hook: a test module finished; aggregate and flush its results.
    ///
    /// Returns the written path, or `Ok(None)` when disabled or when the
    /// module has no identity (silent skip, collector cleared either way).
    pub fn context_finished(
        &mut self,
        module: Option<&str>,
    ) -> Result<Option<PathBuf>, ReportError> {
        if !self.enabled {
            debug!(target: LOG_TARGET, "plugin disabled; skipping flush");
            self.collector.drain();
            return Ok(None);
        }
        self.writer.flush(module, &mut self.collector)
    }
}

impl Default for BenchmarkPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stridebench_core::Sample;

    fn measurement(title: &str) -> TestMeasurement {
        TestMeasurement {
            title: title.to_string(),
            class_name: "PluginTest".to_string(),
            samples: vec![Sample::wall_only(0.01)],
            iterations: 1,
        }
    }

    #[test]
    fn test_disabled_plugin_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = BenchmarkPlugin::with_options(PluginOptions {
            enabled: false,
            output_dir: dir.path().join("reports"),
        });

        plugin.record(measurement("testIgnored"));
        assert_eq!(plugin.pending(), 0);

        let path = plugin.context_finished(Some("mod")).unwrap();
        assert!(path.is_none());
        assert!(!dir.path().join("reports").exists());
    }

    #[test]
    fn test_configure_replaces_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = BenchmarkPlugin::new();
        plugin.configure(PluginOptions {
            enabled: true,
            output_dir: dir.path().join("elsewhere"),
        });

        plugin.record(measurement("testMoved"));
        let path = plugin.context_finished(Some("mod")).unwrap().unwrap();
        assert!(path.starts_with(dir.path().join("elsewhere")));
    }

    #[test]
    fn test_flush_without_module_identity_clears_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = BenchmarkPlugin::with_options(PluginOptions {
            enabled: true,
            output_dir: dir.path().to_path_buf(),
        });

        plugin.record(measurement("testOrphan"));
        let path = plugin.context_finished(None).unwrap();
        assert!(path.is_none());
        assert_eq!(plugin.pending(), 0);
    }
}
