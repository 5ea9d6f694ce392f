use futures::future::{ready, BoxFuture, FutureExt};
use futures::stream::{once, BoxStream, Stream, StreamExt, TryStreamExt};
use std::{
    fs::Metadata,
    io::Result,
    path::{Path, PathBuf},
};
use tokio::fs::{metadata, read_dir, DirEntry};
use tokio_stream::wrappers::ReadDirStream;

type MetaResult = Result<FileMeta>;

pub struct FileMeta {
    pub depth: usize,
    pub meta: Metadata,
    pub path: PathBuf,
}

impl FileMeta {
    pub async fn from_path<P: AsRef<Path>>(path: P, depth: usize) -> Result<Self> {
        let meta = metadata(path.as_ref()).await?;
        let path = path.as_ref().to_path_buf();

        Ok(Self { meta, path, depth })
    }

    async fn from_dir_entry(entry: DirEntry, depth: usize) -> Result<Self> {
        let path = entry.path();
        let meta = metadata(&path).await?;

        Ok(Self { meta, depth, path })
    }
}

/// Walk a directory tree, yielding every entry beneath `path` (directories
/// included) in depth-first order. Hidden entries and anything below them
/// are skipped.
pub async fn walk(path: PathBuf) -> Result<impl Stream<Item = MetaResult>> {
    Ok(dir(path, 1).await?.and_then(expand).boxed().try_flatten())
}

async fn dir<P: AsRef<Path>>(path: P, depth: usize) -> Result<impl Stream<Item = MetaResult>> {
    let entries = read_dir(path).await?;
    Ok(ReadDirStream::new(entries)
        .try_filter(|entry| ready(!is_hidden(entry)))
        .and_then(move |entry| FileMeta::from_dir_entry(entry, depth)))
}

fn expand(file: FileMeta) -> BoxFuture<'static, Result<BoxStream<'static, MetaResult>>> {
    async move {
        if file.meta.is_dir() {
            let children = dir(file.path.clone(), file.depth + 1).await?;
            let rest = children.and_then(expand).try_flatten();
            Ok(once(async { Ok(file) }).chain(rest).boxed())
        } else {
            Ok(once(async { Ok(file) }).boxed())
        }
    }
    .boxed()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
