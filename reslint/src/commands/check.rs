use crate::commands::lint::LintContext;
use crate::error::Result;
use crate::filemeta::FileMeta;
use crate::linter::Diagnostic;
use crate::ui::{Message, Report};

/// Run every registered check against one file and collect the outcome into
/// a single report. A faulting rule loses its remaining contribution for
/// this file; the other rules still run.
pub fn check<F>(ctx: &LintContext, file: &FileMeta, on_message: &F) -> Result<Report>
where
    F: Fn(Message) -> Result<()>,
{
    let path = file.display_path().display().to_string();
    on_message(Message::SetStatus(path.clone()))?;

    let mut diagnostics = Vec::new();
    let mut faults = Vec::new();

    for rule in ctx.rules() {
        if let Err(err) = rule.check(file, &mut diagnostics) {
            log::warn!("{path}: {} check aborted: {err}", rule.name());
            faults.push(err.to_string());
        }
    }

    // Line rules only ever see extensionless regular files; FileMeta holds
    // pre-read lines exactly for those.
    if let Some(lines) = file.lines() {
        for rule in ctx.line_rules() {
            for (line, message) in rule.check(file, lines) {
                diagnostics.push(Diagnostic::from_file(file, line, message, rule.name()));
            }
        }
    }

    Ok(Report {
        diagnostics,
        faults,
        path,
    })
}
