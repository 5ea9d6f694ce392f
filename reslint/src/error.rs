use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(Err)))]
pub enum Error {
    #[snafu(display("{}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("invalid config file: {source}"))]
    ConfigRead { source: toml::de::Error },

    #[snafu(display("{}: unreadable image: {source}", path.display()))]
    Decode {
        path: PathBuf,
        source: png::DecodingError,
    },

    #[snafu(display(
        "{}: unknown color mode ({color_type:?}, {bit_depth:?})",
        path.display()
    ))]
    UnknownColorMode {
        path: PathBuf,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[snafu(display("the reporting channel closed early"))]
    BrokenPipe,
}

pub type Result<T> = std::result::Result<T, Error>;
