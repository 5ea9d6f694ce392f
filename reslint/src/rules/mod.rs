mod file_extension;
mod image_size;
mod media_name_format;

pub use file_extension::FileExtension;
pub use image_size::ImageSize;
pub use media_name_format::MediaNameFormat;
