pub const DELIMITER: char = '\t';
pub const COMMENT_MARKER: char = '#';

// Positional report columns the pipeline depends on
pub const WORKFLOW_FIELD: usize = 1;
pub const TOKEN_FIELD: usize = 2;
pub const MIN_DATA_FIELDS: usize = 3;

pub const DE_NOVO_MARKER: &str = "DE_NOVO";
pub const DE_NOVO_SUFFIX: &str = "DE_NOVO";

pub const OUTPUT_EXTENSION: &str = "txt";
