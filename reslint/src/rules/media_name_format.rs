use crate::error::Result;
use crate::filemeta::FileMeta;
use crate::linter::{Diagnostic, Rule};

/// Media file names use hyphens, never underscores. Only the final path
/// segment counts; parent directories may be named however they like.
pub struct MediaNameFormat;

impl Rule for MediaNameFormat {
    fn name(&self) -> &'static str {
        "media-name-format"
    }

    fn check(&self, file: &FileMeta, diagnostics: &mut Vec<Diagnostic>) -> Result<()> {
        let name = file.file_name().unwrap_or("");

        if name.contains('_') {
            diagnostics.push(Diagnostic::from_file(
                file,
                0,
                "Media name should use hyphens and not underscores",
                self.name(),
            ));
        }

        Ok(())
    }
}
