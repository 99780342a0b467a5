//! JSON Report Output
//!
//! One pretty-printed JSON array per test module, written to
//! `<output_dir>/<module>.json`. Pre-existing files are overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use stridebench_core::LOG_TARGET;
use thiserror::Error;

use crate::collector::MeasurementCollector;
use crate::result::PerformanceResult;

/// Errors raised while writing a report file.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure creating the directory or writing the file.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization failure.
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes one JSON report per module under a fixed output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at `output_dir` (created lazily on flush).
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory reports are written under.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Aggregate everything in `collector` and write `<module>.json`.
    ///
    /// The collector is cleared even when no file is written, so one
    /// module's measurements never leak into the next. Without a module
    /// identity nothing is written and `Ok(None)` is returned.
    pub fn flush(
        &self,
        module: Option<&str>,
        collector: &mut MeasurementCollector,
    ) -> Result<Option<PathBuf>, ReportError> {
        let measurements = collector.drain();
        let results: Vec<PerformanceResult> = measurements
            .iter()
            .filter_map(PerformanceResult::from_measurement)
            .collect();

        let Some(module) = module else {
            debug!(
                target: LOG_TARGET,
                "no module identity; discarding {} results", results.len()
            );
            return Ok(None);
        };

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{module}.json"));
        fs::write(&path, to_indented_json(&results)?)?;

        debug!(
            target: LOG_TARGET,
            "wrote {} results to {}",
            results.len(),
            path.display()
        );
        Ok(Some(path))
    }
}

/// Serialize with the 4-space indentation the report format uses.
pub fn to_indented_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stridebench_core::{Sample, TestMeasurement};

    fn measurement(title: &str, wall: f64) -> TestMeasurement {
        TestMeasurement {
            title: title.to_string(),
            class_name: "WriterTest".to_string(),
            samples: vec![Sample::wall_only(wall)],
            iterations: 1,
        }
    }

    #[test]
    fn test_flush_writes_one_file_per_module() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("reports"));

        let mut collector = MeasurementCollector::new();
        collector.record(measurement("testOne", 0.1));
        collector.record(measurement("testTwo", 0.2));

        let path = writer.flush(Some("test_module"), &mut collector).unwrap();
        let path = path.expect("a module name must produce a file");
        assert!(path.ends_with("test_module.json"));

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<PerformanceResult> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "testOne");
        assert_eq!(parsed[1].title, "testTwo");
    }

    #[test]
    fn test_flush_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let mut collector = MeasurementCollector::new();
        collector.record(measurement("testOne", 0.1));
        collector.record(measurement("testTwo", 0.2));
        writer.flush(Some("mod"), &mut collector).unwrap();

        collector.record(measurement("testThree", 0.3));
        let path = writer.flush(Some("mod"), &mut collector).unwrap().unwrap();

        let parsed: Vec<PerformanceResult> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        // Overwrite, not append: only the second run's single result remains.
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "testThree");
    }

    #[test]
    fn test_missing_module_is_a_silent_no_op_that_still_clears() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("reports"));

        let mut collector = MeasurementCollector::new();
        collector.record(measurement("testOrphan", 0.1));

        let path = writer.flush(None, &mut collector).unwrap();
        assert!(path.is_none());
        assert!(collector.is_empty());
        assert!(!dir.path().join("reports").exists());
    }

    #[test]
    fn test_indentation_is_four_spaces() {
        let json = to_indented_json(&vec![1, 2]).unwrap();
        assert_eq!(json, "[\n    1,\n    2\n]");
    }

    #[test]
    fn test_empty_collector_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let mut collector = MeasurementCollector::new();
        let path = writer.flush(Some("empty"), &mut collector).unwrap().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
