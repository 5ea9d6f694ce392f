use super::check;
use crate::commands::lint::LintContext;
use crate::error::{IoErr, Result};
use crate::filemeta::FileMeta;
use crate::ui::{Message, Report, Summary};
use dir_walker::walk;
use futures::TryStreamExt;
use snafu::prelude::*;

/// Walk the documentation root and check every regular file. Per-file
/// faults are reported and counted; they never stop the scan.
pub async fn scan<F>(ctx: &LintContext, summary: &mut Summary, on_message: &F) -> Result<()>
where
    F: Fn(Message) -> Result<()>,
{
    let root = ctx.cwd().to_path_buf();
    let stream = walk(root.clone()).await.context(IoErr {
        path: root.as_path(),
    })?;
    let mut stream = Box::pin(stream);

    loop {
        match stream.try_next().await {
            Ok(Some(entry)) => {
                if entry.meta.is_dir() {
                    continue;
                }

                let path = entry.path.clone();
                let report = match FileMeta::from_dir_walker(entry, root.as_path())
                    .await
                    .context(IoErr {
                        path: path.as_path(),
                    }) {
                    Ok(file) => check(ctx, &file, on_message)?,
                    Err(err) => {
                        log::warn!("{err}");
                        let display = path.strip_prefix(&root).unwrap_or(&path);

                        Report {
                            diagnostics: Vec::new(),
                            faults: vec![err.to_string()],
                            path: display.display().to_string(),
                        }
                    }
                };

                summary.add_report(&report);
                on_message(Message::Report(report))?;
            }
            Ok(None) => break,
            Err(err) => log::warn!("skipping unreadable entry: {err}"),
        }
    }

    Ok(())
}
