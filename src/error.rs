use std::path::PathBuf;

use thiserror::Error;

/// Timestamp that isn't exactly `yyyy-MM-dd HH:mm:ss`.
#[derive(Error, Debug)]
pub enum RecordTimeError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    #[error("fields are not zero padded to fixed width")]
    NotExact,

    #[error("leap seconds are not allowed")]
    LeapSecond,
}

/// Reason a log line was rejected while loading.
#[derive(Error, Debug)]
pub enum MalformedReason {
    #[error("expected 3 fields separated by a double tab, found {0}")]
    FieldCount(usize),

    #[error("START `{value}` is not in yyyy-MM-dd HH:mm:ss format")]
    Start {
        value: String,
        #[source]
        source: RecordTimeError,
    },

    #[error("END `{value}` is not in yyyy-MM-dd HH:mm:ss format")]
    End {
        value: String,
        #[source]
        source: RecordTimeError,
    },
}

#[derive(Error, Debug)]
pub enum ActilogError {
    #[error("Failed to read activity log: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        #[source]
        reason: MalformedReason,
    },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ActilogError>;
