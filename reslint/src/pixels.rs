use crate::error::{DecodeErr, IoErr, Result, UnknownColorModeErr};
use png::{BitDepth, ColorType};
use snafu::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a PNG's color depth from its header, without decoding pixel data.
pub fn bits_per_pixel<P: AsRef<Path>>(path: P) -> Result<u8> {
    let path = path.as_ref();
    let file = File::open(path).context(IoErr { path })?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let reader = decoder.read_info().context(DecodeErr { path })?;
    let info = reader.info();

    mode_bits(info.color_type, info.bit_depth).context(UnknownColorModeErr {
        path,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
    })
}

/// Fixed color-mode table. A combination missing here is an error for the
/// caller to surface, never a guessed default.
fn mode_bits(color_type: ColorType, bit_depth: BitDepth) -> Option<u8> {
    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => Some(1),
        (ColorType::Grayscale, BitDepth::Two | BitDepth::Four | BitDepth::Eight) => Some(8),
        (ColorType::Grayscale, BitDepth::Sixteen) => Some(32),
        (ColorType::Indexed, _) => Some(8),
        (ColorType::Rgb, BitDepth::Eight | BitDepth::Sixteen) => Some(24),
        (ColorType::Rgba, BitDepth::Eight | BitDepth::Sixteen) => Some(32),
        _ => None,
    }
}
