use std::path::{Path, PathBuf};

use crate::engine::IntervalEngine;
use crate::errors::EngineError;

pub fn write_panel(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_intervals(path: &Path) -> Result<Vec<(String, u32, u32, String)>, EngineError> {
    let contents = std::fs::read_to_string(path)?;
    let mut intervals = Vec::new();

    for line in contents.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(EngineError::UnexpectedOutput(line.to_string()));
        }
        let start: u32 = fields[1]
            .parse()
            .map_err(|_| EngineError::UnexpectedOutput(line.to_string()))?;
        let end: u32 = fields[2]
            .parse()
            .map_err(|_| EngineError::UnexpectedOutput(line.to_string()))?;
        let rest = fields.get(3).copied().unwrap_or_default().to_string();
        intervals.push((fields[0].to_string(), start, end, rest));
    }

    Ok(intervals)
}

/// In-process engine with bedtools' half-open overlap semantics, so
/// pipeline tests run without the binary installed.
pub struct LocalEngine;

impl IntervalEngine for LocalEngine {
    fn sort(&self, intervals: &Path) -> Result<String, EngineError> {
        let mut parsed = read_intervals(intervals)?;
        parsed.sort_by(|a, b| (&a.0, a.1).cmp(&(&b.0, b.1)));

        let mut out = String::new();
        for (chrom, start, end, token) in parsed {
            out.push_str(&format!("{}\t{}\t{}\t{}\n", chrom, start, end, token));
        }
        Ok(out)
    }

    fn intersect(&self, query: &Path, references: &[PathBuf]) -> Result<String, EngineError> {
        let queries = read_intervals(query)?;
        let mut regions = Vec::new();
        for reference in references {
            regions.extend(read_intervals(reference)?);
        }

        let mut out = String::new();
        for (chrom, start, end, token) in &queries {
            for (r_chrom, r_start, r_end, _) in &regions {
                if chrom == r_chrom && start < r_end && r_start < end {
                    out.push_str(&format!("{}\t{}\t{}\t{}\n", chrom, start, end, token));
                }
            }
        }
        Ok(out)
    }
}

/// Engine whose every invocation fails, for error-path tests.
pub struct FailingEngine;

impl IntervalEngine for FailingEngine {
    fn sort(&self, _intervals: &Path) -> Result<String, EngineError> {
        Err(EngineError::EngineFailed {
            tool: "sort".to_string(),
            stderr: "simulated failure".to_string(),
        })
    }

    fn intersect(&self, _query: &Path, _references: &[PathBuf]) -> Result<String, EngineError> {
        Err(EngineError::EngineFailed {
            tool: "intersect".to_string(),
            stderr: "simulated failure".to_string(),
        })
    }
}
