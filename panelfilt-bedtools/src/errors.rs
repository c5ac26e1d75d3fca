use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to launch interval engine '{tool}': {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interval engine '{tool}' exited with an error: {stderr}")]
    EngineFailed { tool: String, stderr: String },

    #[error("Unexpected interval line from intersect engine: {0}")]
    UnexpectedOutput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
