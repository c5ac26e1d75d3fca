use thiserror::Error;

#[derive(Error, Debug)]
pub enum VariantTokenError {
    #[error("No ':' between chromosome and position in token: {0}")]
    MissingPositionDelimiter(String),

    #[error("No '>' between reference and alternate allele in token: {0}")]
    MissingAlleleDelimiter(String),

    #[error("No position found in token: {0}")]
    MissingPosition(String),

    #[error("Position is not a valid 1-based coordinate in token: {0}")]
    InvalidPosition(String),

    #[error("Empty {allele} allele in token: {token}")]
    EmptyAllele { allele: &'static str, token: String },

    #[error("Non-ACGT character in {allele} allele of token: {token}")]
    InvalidAllele { allele: &'static str, token: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Data row at line {line} has {found} columns, expected at least {expected}")]
    TooFewColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Malformed variant token at line {line}: {source}")]
    BadToken {
        line: usize,
        #[source]
        source: VariantTokenError,
    },

    #[error("Report contains no rows: {0}")]
    EmptyReport(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
