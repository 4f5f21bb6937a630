use std::{
    io::{Error, ErrorKind},
    path::PathBuf,
};

use tokio::{fs::File, io::AsyncReadExt};

/// Where the bytes of a selected file live until submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Memory(Vec<u8>),
    /// Read lazily, right before the upload request is built.
    Path(PathBuf),
}

/// A user-chosen file: the metadata the validator looks at plus a handle to its content.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub filename: String,
    pub mime_type: String,
    pub size: u64,
    pub content: FileContent,
}

impl SelectedFile {
    pub fn new(content: Vec<u8>, filename: String, mime_type: String) -> Self {
        Self {
            size: content.len() as u64,
            content: FileContent::Memory(content),
            filename,
            mime_type,
        }
    }

    pub fn from_path(path: PathBuf, filename: String, mime_type: String, size: u64) -> Self {
        Self {
            content: FileContent::Path(path),
            filename,
            mime_type,
            size,
        }
    }

    /// Returns exactly the `size` bytes that were validated.
    ///
    /// A path-backed file that grew or shrank since selection is an error; at
    /// most `size + 1` bytes are read from disk.
    pub async fn read_content(&self) -> std::io::Result<Vec<u8>> {
        match &self.content {
            FileContent::Memory(bytes) => Ok(bytes.clone()),
            FileContent::Path(path) => {
                let file = File::open(path).await?;
                let mut content = Vec::new();
                file.take(self.size.saturating_add(1))
                    .read_to_end(&mut content)
                    .await?;

                if content.len() as u64 != self.size {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        "file changed since it was selected",
                    ));
                }
                Ok(content)
            }
        }
    }
}
