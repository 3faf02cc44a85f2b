use std::path::Path;

use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};
use tracing::{debug, instrument};

use crate::{
    error::{ActilogError, MalformedReason, Result},
    utils::time::parse_record_time,
};

use super::record::ActivityRecord;

/// Separator between `START`, `END` and `NAME` columns of the activity log.
pub const FIELD_SEPARATOR: &str = "\t\t";

/// Parses a single log line. `line` is the 1-based position used for error reporting.
///
/// Returns `Ok(None)` for blank lines. Every other line must have exactly 3 fields, otherwise the
/// whole load is expected to fail.
pub fn parse_line(line: usize, content: &str) -> Result<Option<ActivityRecord>> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let malformed = |reason| ActilogError::MalformedRecord {
        line,
        content: content.to_string(),
        reason,
    };

    let mut fields = content
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .collect::<Vec<_>>();
    // Logs in the wild end lines with a dangling separator.
    while fields.last().is_some_and(|v| v.is_empty()) {
        fields.pop();
    }

    let &[start, end, name] = fields.as_slice() else {
        return Err(malformed(MalformedReason::FieldCount(fields.len())));
    };

    let start = parse_record_time(start).map_err(|source| {
        malformed(MalformedReason::Start {
            value: start.to_string(),
            source,
        })
    })?;
    let end = parse_record_time(end).map_err(|source| {
        malformed(MalformedReason::End {
            value: end.to_string(),
            source,
        })
    })?;

    Ok(Some(ActivityRecord::new(name, start, end)))
}

/// Parses the whole log. Stops on the first malformed line, nothing is returned in that case.
pub fn parse_str(content: &str) -> Result<Vec<ActivityRecord>> {
    let mut records = vec![];
    for (index, line) in content.lines().enumerate() {
        if let Some(record) = parse_line(index + 1, line)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Loads every record of the log at `path`, in line order.
#[instrument]
pub async fn load(path: &Path) -> Result<Vec<ActivityRecord>> {
    let unavailable = |source| ActilogError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(unavailable)?;
    file.lock_shared().map_err(unavailable)?;

    let mut lines = BufReader::new(file).lines();
    let mut records = vec![];
    let mut index = 0;
    let result = loop {
        let line = match lines.next_line().await {
            Ok(Some(v)) => v,
            Ok(None) => break Ok(()),
            Err(e) => break Err(unavailable(e)),
        };
        index += 1;
        match parse_line(index, &line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => (),
            Err(e) => break Err(e),
        }
    };

    lines
        .into_inner()
        .into_inner()
        .unlock_async()
        .await
        .map_err(unavailable)?;
    result?;

    debug!("Loaded {} records from {} lines", records.len(), index);
    Ok(records)
}
