use crate::args::{Args, LintArgs, Reporter};
use crate::commands::{check, scan};
use crate::config::{self, Config};
use crate::error::{BrokenPipeErr, IoErr, Result};
use crate::filemeta::FileMeta;
use crate::linter::{self, LineRules, Rules, RunMode};
use crate::ui::{AnsiReporter, JsonReporter, Message, Summary, Ui};
use snafu::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::spawn;
use std::time::Instant;

/// Everything a single lint run needs: the scan root and the rule sets
/// assembled once for the process lifetime.
pub struct LintContext {
    cwd: PathBuf,
    line_rules: LineRules,
    rules: Rules,
}

impl LintContext {
    pub fn new(cwd: PathBuf, config: &Config, mode: RunMode) -> Self {
        Self {
            cwd,
            line_rules: linter::line_rules(),
            rules: linter::path_rules(config, mode),
        }
    }

    pub fn cwd(&self) -> &Path {
        self.cwd.as_path()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn line_rules(&self) -> &LineRules {
        &self.line_rules
    }
}

/// Run the linter. Returns whether every checked file passed.
pub async fn lint(args: &Args, lint_args: &LintArgs, mode: RunMode) -> Result<bool> {
    let config = config::from_path(args.config_path()).await?;
    let (tx, rx) = mpsc::channel();

    let reporter: Box<dyn crate::ui::Reporter + Send + Sync> = match lint_args.reporter {
        Reporter::Ansi => Box::new(AnsiReporter::new(!lint_args.hide_passes)),
        Reporter::Json => Box::new(JsonReporter::new()),
    };
    let ui_thread = spawn(move || Ui::new(rx, reporter).run());
    let on_message = |message: Message| tx.send(message).ok().context(BrokenPipeErr);

    let ctx = LintContext::new(args.cwd(), &config, mode);
    let mut summary = Summary::new(Instant::now());

    if let Some(file) = lint_args.file.as_ref() {
        let file = FileMeta::from_path(file.as_str())
            .await
            .context(IoErr { path: file.as_str() })?;
        let report = check(&ctx, &file, &on_message)?;

        summary.add_report(&report);
        on_message(Message::Report(report))?;
    } else {
        scan(&ctx, &mut summary, &on_message).await?;
    }

    summary.mark_ended();
    let passed = summary.all_passed();
    on_message(Message::Finished(summary))?;
    ui_thread.join().unwrap()?;

    Ok(passed)
}
