use std::path::Path;

use tokio::{fs::File, io::AsyncReadExt};
use tracing::info;

use crate::{
    application::error::ApplicationError,
    domain::models::{
        file::SelectedFile,
        signature::{sniff_mime_type, SIGNATURE_LEN},
    },
};

/// Builds a path-backed [`SelectedFile`] without reading the whole file.
///
/// The declared MIME type comes from the leading bytes and is left empty when
/// they match no known signature, the same way a browser may report nothing.
pub async fn load_file(path: &Path) -> Result<SelectedFile, ApplicationError> {
    let access_error = |e: std::io::Error| {
        ApplicationError::FileAccess(format!("{}: {}", path.display(), e))
    };

    let metadata = tokio::fs::metadata(path).await.map_err(access_error)?;
    if !metadata.is_file() {
        return Err(ApplicationError::FileAccess(format!(
            "{}: not a regular file",
            path.display()
        )));
    }

    let mut head = [0u8; SIGNATURE_LEN];
    let mut filled = 0;
    let mut file = File::open(path).await.map_err(access_error)?;
    while filled < head.len() {
        let read = file.read(&mut head[filled..]).await.map_err(access_error)?;
        if read == 0 {
            break;
        }
        filled += read;
    }

    let mime_type = sniff_mime_type(&head[..filled]).unwrap_or_default();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    info!(
        "Loaded {} ({} bytes, detected mime '{}')",
        path.display(),
        metadata.len(),
        mime_type
    );

    Ok(SelectedFile::from_path(
        path.to_path_buf(),
        filename,
        mime_type.to_string(),
        metadata.len(),
    ))
}
