use crate::config::Config;
use crate::error::Result;
use crate::filemeta::FileMeta;
use crate::rules::{FileExtension, ImageSize, MediaNameFormat};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// A single reported finding. Constructed by a rule, rendered once, never
/// mutated.
#[derive(Debug, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub message: String,
    pub checker: &'static str,
}

impl Diagnostic {
    pub fn from_file<M: Into<String>>(
        file: &FileMeta,
        line: usize,
        message: M,
        checker: &'static str,
    ) -> Self {
        Self {
            path: file.display_path().to_path_buf(),
            line,
            message: message.into(),
            checker,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} ({})",
            self.path.display(),
            self.line,
            self.message,
            self.checker
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Strict,
    Local,
}

impl RunMode {
    /// `LOCAL=1` selects the relaxed local mode; any other value or absence
    /// selects strict mode.
    pub fn from_env() -> Self {
        match std::env::var("LOCAL") {
            Ok(value) if value == "1" => Self::Local,
            _ => Self::Strict,
        }
    }

    pub fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }
}

/// A check over a candidate file's metadata. Findings go into `diagnostics`;
/// an `Err` is a fault which aborts this rule's contribution for the file
/// without stopping the run.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn check(&self, file: &FileMeta, diagnostics: &mut Vec<Diagnostic>) -> Result<()>;
}

/// A line-oriented check, invoked with a file's text lines. The driver only
/// runs these against extensionless regular files.
pub trait LineRule {
    fn name(&self) -> &'static str;
    fn check(&self, file: &FileMeta, lines: &[String]) -> Box<dyn Iterator<Item = Finding>>;
}

/// One `(line, message)` pair yielded by a [`LineRule`].
pub type Finding = (usize, String);

pub type Rules = Vec<Box<dyn Rule + Send + Sync>>;
pub type LineRules = Vec<Box<dyn LineRule + Send + Sync>>;

/// Assemble the per-path rule set for a run. The naming check only exists
/// in strict mode.
pub fn path_rules(config: &Config, mode: RunMode) -> Rules {
    let mut rules: Rules = vec![Box::new(ImageSize::new(
        config.max_image_sizes().clone(),
        mode,
    ))];

    if !mode.is_local() {
        rules.push(Box::new(MediaNameFormat));
    }

    rules
}

pub fn line_rules() -> LineRules {
    vec![Box::new(FileExtension)]
}
