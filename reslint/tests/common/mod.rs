#![allow(dead_code)]

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the reslint binary.
#[macro_export]
macro_rules! reslint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("reslint"))
    };
}

/// A temporary documentation tree to lint.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file of exactly `bytes` bytes.
    pub fn create_sized_file(&self, relative_path: &str, bytes: usize) {
        self.create_file(relative_path, &vec![0u8; bytes]);
    }

    /// Creates a reslint config file.
    pub fn create_config(&self, content: &str) {
        self.create_file("reslint.toml", content.as_bytes());
    }

    /// Creates a tiny 8-bit truecolor PNG (24 bits per pixel).
    pub fn create_rgb_png(&self, relative_path: &str) {
        self.write_png(relative_path, png::ColorType::Rgb, &[0; 6]);
    }

    /// Creates a tiny palette PNG (8 bits per pixel), the shape pngquant
    /// produces.
    pub fn create_palette_png(&self, relative_path: &str) {
        self.write_png(relative_path, png::ColorType::Indexed, &[0, 1]);
    }

    fn write_png(&self, relative_path: &str, color: png::ColorType, data: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        let file = File::create(&path).expect("Failed to create png");
        let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 1);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        if color == png::ColorType::Indexed {
            encoder.set_palette(vec![0, 0, 0, 255, 255, 255]);
        }
        let mut writer = encoder.write_header().expect("Failed to write png header");
        writer
            .write_image_data(data)
            .expect("Failed to write png data");
    }
}
