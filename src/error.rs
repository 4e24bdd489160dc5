use std::path::PathBuf;

use thiserror::Error;

/// Every way a pipeline run can fail. All of them abort the run.
///
/// An indicator pair outside the known codes is deliberately absent here:
/// it is carried through as raw data, not reported.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read pointer file {path}")]
    MissingPointerFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pointer file {path} does not name a run directory")]
    EmptyPointerFile { path: PathBuf },

    #[error("cannot list run directory {path}")]
    MissingRunDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no data-* directories below {path}")]
    NoDataDirectories { path: PathBuf },

    #[error("missing source table {path}")]
    MissingSourceTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed source table {path}")]
    MalformedTable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{stage}: {detail}")]
    SchemaMismatch { stage: &'static str, detail: String },

    #[error("rendering report")]
    Report(#[from] arrow::error::ArrowError),

    #[error("writing output")]
    Output(#[from] std::io::Error),
}

impl PipelineError {
    pub(crate) fn missing_column(stage: &'static str, column: &str) -> Self {
        PipelineError::SchemaMismatch {
            stage,
            detail: format!("column '{column}' not found"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
