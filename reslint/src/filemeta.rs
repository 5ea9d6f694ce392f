use dir_walker::FileMeta as DirMeta;
use std::fs::Metadata;
use std::io::Result;
use std::path::{Path, PathBuf};
use tokio::fs::{metadata, read_to_string};

/// Everything the checks are allowed to know about a candidate file.
///
/// The absolute path is kept for I/O; `display_path` is what ends up in
/// diagnostics (relative to the scan root when walking, verbatim when a
/// single file was named on the command line).
pub struct FileMeta {
    display: PathBuf,
    lines: Option<Vec<String>>,
    meta: Metadata,
    path: PathBuf,
}

impl FileMeta {
    pub async fn from_path<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let meta = metadata(path.as_path()).await?;
        let lines = read_lines(&path, &meta).await?;
        let display = path.clone();

        Ok(Self {
            display,
            lines,
            meta,
            path,
        })
    }

    pub async fn from_dir_walker(file: DirMeta, root: &Path) -> Result<Self> {
        let display = file
            .path
            .strip_prefix(root)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|_| file.path.clone());
        let lines = read_lines(&file.path, &file.meta).await?;

        Ok(Self {
            display,
            lines,
            meta: file.meta,
            path: file.path,
        })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn display_path(&self) -> &Path {
        self.display.as_path()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    /// Text lines, pre-read for extensionless regular files only. Line rules
    /// never run against anything else.
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }
}

async fn read_lines(path: &Path, meta: &Metadata) -> Result<Option<Vec<String>>> {
    if meta.is_file() && path.extension().is_none() {
        let text = read_to_string(path).await?;
        Ok(Some(text.lines().map(str::to_owned).collect()))
    } else {
        Ok(None)
    }
}
