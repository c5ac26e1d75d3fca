use std::path::PathBuf;

use fxhash::FxHashSet;

use crate::engine::IntervalEngine;
use crate::errors::EngineError;
use crate::store::SortedBed;

///
/// Intersect the sorted report intervals against the panel file(s) and
/// collapse the hits into a unique set of variant tokens.
///
/// A variant overlapping several panel regions is echoed by the engine
/// once per region; it appears exactly once in the returned set. The
/// sorted interval file is consumed here and removed once the engine
/// has run, on success and on failure alike.
///
/// # Arguments:
/// - engine: the sort/intersect engine
/// - sorted: engine-sorted report intervals
/// - panels: paths to the panel region file(s), used as the reference set
///
pub fn unique_overlaps(
    engine: &dyn IntervalEngine,
    sorted: SortedBed,
    panels: &[PathBuf],
) -> Result<FxHashSet<String>, EngineError> {
    let output = engine.intersect(sorted.path(), panels)?;
    drop(sorted);

    let mut unique: FxHashSet<String> = FxHashSet::default();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');

        let _chrom = fields
            .next()
            .ok_or_else(|| EngineError::UnexpectedOutput(line.to_string()))?;
        let _start = fields
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| EngineError::UnexpectedOutput(line.to_string()))?;
        let _end = fields
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| EngineError::UnexpectedOutput(line.to_string()))?;
        let token = fields
            .next()
            .ok_or_else(|| EngineError::UnexpectedOutput(line.to_string()))?;

        unique.insert(token.to_string());
    }

    Ok(unique)
}
