use crate::error::Result;
use crate::filemeta::FileMeta;
use crate::linter::{Diagnostic, Rule, RunMode};
use crate::pixels;
use std::collections::HashMap;

/// Checks that images stay under the byte ceiling for their extension and,
/// in strict mode, that PNGs were actually palette-compressed.
pub struct ImageSize {
    max_sizes: HashMap<String, u64>,
    mode: RunMode,
}

impl ImageSize {
    pub fn new(max_sizes: HashMap<String, u64>, mode: RunMode) -> Self {
        Self { max_sizes, mode }
    }

    fn max_size(&self, file: &FileMeta) -> Option<u64> {
        file.extension()
            .and_then(|ext| self.max_sizes.get(ext))
            .copied()
    }
}

impl Rule for ImageSize {
    fn name(&self) -> &'static str {
        "image-size"
    }

    fn check(&self, file: &FileMeta, diagnostics: &mut Vec<Diagnostic>) -> Result<()> {
        let size = file.metadata().len();

        if let Some(max_size) = self.max_size(file) {
            if size > max_size {
                diagnostics.push(Diagnostic::from_file(
                    file,
                    0,
                    format!(
                        "the file has a size of {} MB, larger than the maximum allowed \
                         size of {} MB; compress it with pngquant",
                        megabytes(size),
                        megabytes(max_size),
                    ),
                    self.name(),
                ));
            }
        }

        if self.mode.is_local() {
            return Ok(());
        }

        if file.extension() == Some("png") {
            let bpp = pixels::bits_per_pixel(file.path())?;
            if bpp > 8 {
                diagnostics.push(Diagnostic::from_file(
                    file,
                    0,
                    "File was not compressed through pngquant, bit depth is still too high.",
                    self.name(),
                ));
            }
        }

        Ok(())
    }
}

/// Bytes as megabytes rounded to two decimals, so that `{}` formatting drops
/// trailing zeros ("0.5", "0.51", "2.1").
fn megabytes(bytes: u64) -> f64 {
    (bytes as f64 / 1_000_000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::Error;
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::Path;

    fn rule(mode: RunMode) -> ImageSize {
        ImageSize::new(Config::default().max_image_sizes().clone(), mode)
    }

    fn write_rgb_png(path: &Path) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 1);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0; 6]).unwrap();
    }

    fn write_palette_png(path: &Path) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 1);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![0, 0, 0, 255, 255, 255]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 1]).unwrap();
    }

    #[test]
    fn megabytes_round_to_two_decimals() {
        assert_eq!(megabytes(505_000).to_string(), "0.5");
        assert_eq!(megabytes(505_001).to_string(), "0.51");
        assert_eq!(megabytes(2_100_000).to_string(), "2.1");
        assert_eq!(megabytes(2_100_001).to_string(), "2.1");
    }

    #[tokio::test]
    async fn size_at_the_ceiling_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        std::fs::write(&path, vec![0u8; 505_000]).unwrap();
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Local).check(&file, &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn one_byte_over_the_ceiling_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        std::fs::write(&path, vec![0u8; 505_001]).unwrap();
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Local).check(&file, &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].checker, "image-size");
        assert_eq!(
            diagnostics[0].message,
            "the file has a size of 0.51 MB, larger than the maximum allowed \
             size of 0.5 MB; compress it with pngquant"
        );
    }

    #[tokio::test]
    async fn rounding_can_display_identical_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        std::fs::write(&path, vec![0u8; 2_100_001]).unwrap();
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Local).check(&file, &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .contains("2.1 MB, larger than the maximum allowed size of 2.1 MB"));
    }

    #[tokio::test]
    async fn extensions_without_a_ceiling_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.mp4");
        std::fs::write(&path, vec![0u8; 3_000_000]).unwrap();
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Local).check(&file, &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn strict_mode_flags_truecolor_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        write_rgb_png(&path);
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Strict).check(&file, &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].checker, "image-size");
        assert_eq!(
            diagnostics[0].message,
            "File was not compressed through pngquant, bit depth is still too high."
        );
    }

    #[tokio::test]
    async fn strict_mode_accepts_palette_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_palette_png(&path);
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Strict).check(&file, &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn local_mode_never_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        rule(RunMode::Local).check(&file, &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn strict_mode_faults_on_undecodable_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        let file = FileMeta::from_path(path).await.unwrap();

        let mut diagnostics = Vec::new();
        let err = rule(RunMode::Strict)
            .check(&file, &mut diagnostics)
            .unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
        assert!(diagnostics.is_empty());
    }
}
