use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use panelfilt_core::consts::TOKEN_FIELD;
use panelfilt_core::errors::ReportError;
use panelfilt_core::models::{ReportRow, VariantInterval, VariantReport, VariantToken};

use crate::engine::IntervalEngine;
use crate::errors::EngineError;

///
/// The report's variants projected onto intervals, ready to hand to the
/// interval engine.
///
pub struct IntervalStore {
    intervals: Vec<VariantInterval>,
}

///
/// Engine-sorted intervals in a scoped temporary file. The file is
/// removed when this handle drops, whatever the exit path.
///
pub struct SortedBed {
    file: NamedTempFile,
}

impl SortedBed {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl IntervalStore {
    ///
    /// Project every data row of a report onto an interval.
    ///
    /// Comment rows are skipped. A malformed token anywhere aborts the
    /// whole run; a corrupt report must not produce partial output.
    ///
    pub fn from_report(report: &VariantReport) -> Result<Self, ReportError> {
        let mut intervals: Vec<VariantInterval> = Vec::new();

        for (index, row) in report.rows.iter().enumerate() {
            if let ReportRow::Data(fields) = row {
                let token: VariantToken =
                    fields[TOKEN_FIELD]
                        .parse()
                        .map_err(|source| ReportError::BadToken {
                            line: index + 1,
                            source,
                        })?;
                intervals.push(token.to_interval());
            }
        }

        Ok(IntervalStore { intervals })
    }

    pub fn intervals(&self) -> &[VariantInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    ///
    /// Serialize the intervals and sort them through the engine.
    ///
    /// The unsorted intermediate lives in a temporary file that is
    /// removed before this function returns, on success and on failure
    /// alike.
    ///
    pub fn sorted_bed(&self, engine: &dyn IntervalEngine) -> Result<SortedBed, EngineError> {
        let mut unsorted = NamedTempFile::new()?;
        for interval in &self.intervals {
            writeln!(unsorted, "{}", interval)?;
        }
        unsorted.flush()?;

        let sorted_text = engine.sort(unsorted.path())?;

        let mut sorted = NamedTempFile::new()?;
        sorted.write_all(sorted_text.as_bytes())?;
        sorted.flush()?;

        Ok(SortedBed { file: sorted })
    }
}
