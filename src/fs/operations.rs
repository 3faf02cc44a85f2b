use std::path::Path;

use fs4::tokio::AsyncFileExt;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::error::{ActilogError, Result};

/// Writes a report verbatim into `path`, replacing anything that was there before. The file is
/// held under an exclusive lock while truncating and writing.
pub async fn write_report(path: &Path, content: &str) -> Result<()> {
    let failed = |source| ActilogError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .await
        .map_err(failed)?;

    // Semi-safe acquire-release for a file
    file.lock_exclusive().map_err(failed)?;
    let result = write_with_file(&mut file, content).await;
    file.unlock_async().await.map_err(failed)?;
    result.map_err(failed)
}

async fn write_with_file(file: &mut File, content: &str) -> std::io::Result<()> {
    // Truncated only once the lock is held.
    file.set_len(0).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
