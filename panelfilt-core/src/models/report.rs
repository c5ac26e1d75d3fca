use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::consts::{COMMENT_MARKER, DELIMITER, MIN_DATA_FIELDS};
use crate::errors::ReportError;
use crate::utils::get_dynamic_reader;

///
/// One row of a variant report: either an opaque comment line or a
/// tab-split data row.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ReportRow {
    /// Raw line starting with `#`, passed through verbatim.
    Comment(String),
    /// Positional fields; index 1 is the workflow string, index 2 the
    /// variant token. Guaranteed to have at least [MIN_DATA_FIELDS]
    /// fields.
    Data(Vec<String>),
}

///
/// A trio variant report, read once and never mutated. Rows keep their
/// original order.
///
#[derive(Debug, Clone)]
pub struct VariantReport {
    pub path: PathBuf,
    pub rows: Vec<ReportRow>,
}

impl TryFrom<&Path> for VariantReport {
    type Error = anyhow::Error;

    ///
    /// Read a [VariantReport] from a tab-delimited report file.
    ///
    /// # Arguments:
    /// - value: path to the report on disk. Gzipped reports are
    ///   read transparently.
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;

        let mut rows: Vec<ReportRow> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(ReportError::Io)?;

            if line.is_empty() {
                continue;
            }

            if line.starts_with(COMMENT_MARKER) {
                rows.push(ReportRow::Comment(line));
                continue;
            }

            let fields: Vec<String> = line.split(DELIMITER).map(|f| f.to_string()).collect();
            if fields.len() < MIN_DATA_FIELDS {
                return Err(ReportError::TooFewColumns {
                    line: index + 1,
                    expected: MIN_DATA_FIELDS,
                    found: fields.len(),
                }
                .into());
            }

            rows.push(ReportRow::Data(fields));
        }

        if rows.is_empty() {
            return Err(ReportError::EmptyReport(value.display().to_string()).into());
        }

        Ok(VariantReport {
            path: value.to_owned(),
            rows,
        })
    }
}

impl TryFrom<&str> for VariantReport {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        VariantReport::try_from(Path::new(value))
    }
}

impl VariantReport {
    ///
    /// Iterate comment rows in original order
    ///
    pub fn comments(&self) -> impl Iterator<Item = &String> {
        self.rows.iter().filter_map(|row| match row {
            ReportRow::Comment(line) => Some(line),
            ReportRow::Data(_) => None,
        })
    }

    ///
    /// Iterate data rows in original order
    ///
    pub fn data_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.rows.iter().filter_map(|row| match row {
            ReportRow::Data(fields) => Some(fields),
            ReportRow::Comment(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn write_report(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[fixture]
    fn report_text() -> &'static str {
        "#Analysis: trio\n\
         #Sample: FAM001_sample1\n\
         var1\tDE_NOVO\t12:109915190C>T\tPASS\n\
         var2\tINHERITED\t1:114437355C>T\tPASS\n"
    }

    #[rstest]
    fn test_partitions_comments_and_data(report_text: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_report(tempdir.path(), "report.txt", report_text);

        let report = VariantReport::try_from(path.as_path()).unwrap();

        assert_eq!(report.comments().count(), 2);
        assert_eq!(report.data_rows().count(), 2);
        assert_eq!(report.rows.len(), 4);
    }

    #[rstest]
    fn test_data_fields_are_positional(report_text: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_report(tempdir.path(), "report.txt", report_text);

        let report = VariantReport::try_from(path.as_path()).unwrap();
        let first = report.data_rows().next().unwrap();

        assert_eq!(first[1], "DE_NOVO");
        assert_eq!(first[2], "12:109915190C>T");
    }

    #[rstest]
    fn test_short_data_row_is_fatal() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_report(
            tempdir.path(),
            "short.txt",
            "#header\nvar1\tDE_NOVO\n",
        );

        let result = VariantReport::try_from(path.as_path());
        assert!(result.is_err());
    }

    #[rstest]
    fn test_empty_report_is_fatal() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_report(tempdir.path(), "empty.txt", "");

        let result = VariantReport::try_from(path.as_path());
        assert!(result.is_err());
    }

    #[rstest]
    fn test_comment_rows_kept_verbatim(report_text: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = write_report(tempdir.path(), "report.txt", report_text);

        let report = VariantReport::try_from(path.as_path()).unwrap();
        let comments: Vec<&String> = report.comments().collect();

        assert_eq!(comments[0], "#Analysis: trio");
        assert_eq!(comments[1], "#Sample: FAM001_sample1");
    }
}
