use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::EngineError;

///
/// Capability for sorting and intersecting BED-style interval files.
///
/// Both operations consume files in the four-column line format
/// `chrom\tstart\tend\ttoken` and return the engine's raw stdout. The
/// production implementation shells out to bedtools; tests substitute
/// an in-process implementation with the same semantics, so nothing
/// downstream depends on the binary being installed.
///
pub trait IntervalEngine {
    /// Sort interval lines by the engine's native (chromosome, start)
    /// ordering. No numeric chromosome order is promised.
    fn sort(&self, intervals: &Path) -> Result<String, EngineError>;

    /// Report every query interval overlapping at least one reference
    /// interval, echoing the query's four fields once per overlapping
    /// reference.
    fn intersect(&self, query: &Path, references: &[PathBuf]) -> Result<String, EngineError>;
}

///
/// [IntervalEngine] backed by the bedtools executable.
///
/// The executable location is explicit constructor state so deployments
/// with bedtools outside `PATH` can point at it directly.
///
pub struct Bedtools {
    executable: PathBuf,
}

impl Bedtools {
    pub fn new<P: Into<PathBuf>>(executable: P) -> Self {
        Bedtools {
            executable: executable.into(),
        }
    }

    fn capture(&self, command: &mut Command, tool: &str) -> Result<String, EngineError> {
        let output = command.output().map_err(|source| EngineError::Launch {
            tool: tool.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(EngineError::EngineFailed {
                tool: tool.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Bedtools {
    fn default() -> Self {
        Bedtools::new("bedtools")
    }
}

impl IntervalEngine for Bedtools {
    fn sort(&self, intervals: &Path) -> Result<String, EngineError> {
        let mut command = Command::new(&self.executable);
        command.arg("sort").arg("-i").arg(intervals);

        self.capture(&mut command, "bedtools sort")
    }

    fn intersect(&self, query: &Path, references: &[PathBuf]) -> Result<String, EngineError> {
        let mut command = Command::new(&self.executable);
        command.arg("intersect").arg("-a").arg(query).arg("-b");
        for reference in references {
            command.arg(reference);
        }

        self.capture(&mut command, "bedtools intersect")
    }
}
