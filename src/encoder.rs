use std::fs;
use std::io;
use std::io::Cursor;
use image::{ImageOutputFormat, RgbaImage};
use thiserror::Error;
use crate::data::Image;


#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("cannot encode identicon image ({0})")]
    EncodingFailed(#[from] image::ImageError),

    #[error("pixel buffer does not match the declared {width}x{height} size")]
    PixelBufferMismatch {
        width: u32,
        height: u32
    },

    #[error("cannot write identicon file ({0})")]
    PersistenceFailed(#[from] io::Error)
}

pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Serializes a finished image into a container format.
pub trait ImageEncoder {
    fn encode(&self, image: &Image) -> Result<Vec<u8>>;

    fn file_extension(&self) -> &'static str;
}

/// Persists encoded bytes under a name. The pipeline never touches
/// storage directly; this is its only seam to the outside world.
pub trait ArtifactStore {
    fn persist(&self, bytes: &[u8], name: &str) -> Result<()>;
}

pub fn encode_and_persist(encoder: &impl ImageEncoder,
                          store: &impl ArtifactStore,
                          image: &Image,
                          name: &str) -> Result<()> {
    let bytes = encoder.encode(image)?;
    store.persist(&bytes, name)
}

#[derive(Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, image: &Image) -> Result<Vec<u8>> {
        let size = image.size();

        let buffer = RgbaImage::from_raw(size.width, size.height, image.pixels().to_vec())
            .ok_or(ErrorKind::PixelBufferMismatch {
                width: size.width,
                height: size.height
            })?;

        let mut bytes = Cursor::new(Vec::new());
        buffer.write_to(&mut bytes, ImageOutputFormat::Png)?;
        Ok(bytes.into_inner())
    }

    fn file_extension(&self) -> &'static str {
        "png"
    }
}

#[derive(Default)]
pub struct FileStore;

impl ArtifactStore for FileStore {
    fn persist(&self, bytes: &[u8], name: &str) -> Result<()> {
        fs::write(name, bytes)?;
        Ok(())
    }
}
