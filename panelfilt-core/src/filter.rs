use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use fxhash::FxHashSet;

use crate::consts::{
    DE_NOVO_MARKER, DE_NOVO_SUFFIX, OUTPUT_EXTENSION, TOKEN_FIELD, WORKFLOW_FIELD,
};
use crate::models::VariantReport;
use crate::utils::file_label;

/// Joined display name for a set of panel files: each panel's file name
/// with the last suffix removed, joined with `_`. Used both in the
/// output file name and (with `_` mapped back to spaces) in the
/// provenance header.
pub fn panel_label(panels: &[PathBuf]) -> String {
    panels
        .iter()
        .map(|p| file_label(p))
        .collect::<Vec<String>>()
        .join("_")
}

/// Output path contract: the report path with its last `.`-delimited
/// suffix removed, `_<suffix>` appended, and a `.txt` extension. Other
/// tooling depends on this naming.
fn output_path(report: &Path, suffix: &str) -> PathBuf {
    report.with_file_name(format!(
        "{}_{}.{}",
        file_label(report),
        suffix,
        OUTPUT_EXTENSION
    ))
}

///
/// Keep only the data rows that overlap the applied panel(s).
///
/// Comment rows pass through verbatim, in original order, preceded by a
/// single generated provenance line. Data-row order is preserved from
/// the input.
///
/// # Arguments:
/// - report: the report to filter
/// - label: joined panel name, as produced by [panel_label]
/// - keep: unique variant tokens that intersect the panel(s)
///
/// # Returns:
/// Path of the written report.
pub fn apply_panel(
    report: &VariantReport,
    label: &str,
    keep: &FxHashSet<String>,
) -> Result<PathBuf> {
    let provenance = format!(
        "#Panel(s) applied: {}. Date: {}",
        label.replace('_', " "),
        Local::now().date_naive()
    );

    let out = output_path(&report.path, label);
    write_filtered(report, &out, &provenance, |fields| {
        keep.contains(&fields[TOKEN_FIELD])
    })?;

    Ok(out)
}

///
/// Keep only the data rows whose workflow field marks a de novo call.
///
/// The workflow string may carry several classifications; a substring
/// match anywhere in the field retains the row.
///
/// # Arguments:
/// - report: the report to filter
///
/// # Returns:
/// Path of the written report.
pub fn filter_de_novo(report: &VariantReport) -> Result<PathBuf> {
    let provenance = format!(
        "#Filtered: DE NOVO calls only. Date: {}",
        Local::now().date_naive()
    );

    let out = output_path(&report.path, DE_NOVO_SUFFIX);
    write_filtered(report, &out, &provenance, |fields| {
        fields[WORKFLOW_FIELD].contains(DE_NOVO_MARKER)
    })?;

    Ok(out)
}

fn write_filtered<F>(
    report: &VariantReport,
    out: &Path,
    provenance: &str,
    retain: F,
) -> Result<()>
where
    F: Fn(&Vec<String>) -> bool,
{
    let file = File::create(out)
        .with_context(|| format!("Failed to create output report: {:?}", out))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", provenance)?;
    for comment in report.comments() {
        writeln!(writer, "{}", comment)?;
    }
    for fields in report.data_rows() {
        if retain(fields) {
            writeln!(writer, "{}", fields.join("\t"))?;
        }
    }

    writer.flush()?;
    Ok(())
}
