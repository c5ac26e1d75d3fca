use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// File name with its last `.`-delimited suffix removed.
///
/// Used both for panel display names (`Intellectual_disability_v2.510_green_pad20.bed`
/// becomes `Intellectual_disability_v2.510_green_pad20`) and for deriving
/// output report names. Only the final suffix is stripped; interior dots
/// are part of the name.
pub fn file_label(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .to_string()
}
