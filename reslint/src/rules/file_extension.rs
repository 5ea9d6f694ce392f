use crate::filemeta::FileMeta;
use crate::linter::{Finding, LineRule};
use std::iter::once;

/// Flags every file it is invoked on as missing an extension. The driver is
/// responsible for only routing extensionless files here; the rule itself is
/// unconditional.
pub struct FileExtension;

impl LineRule for FileExtension {
    fn name(&self) -> &'static str {
        "file-extensions"
    }

    fn check(&self, _file: &FileMeta, _lines: &[String]) -> Box<dyn Iterator<Item = Finding>> {
        Box::new(once((0, "the file does not have an extension".to_string())))
    }
}
