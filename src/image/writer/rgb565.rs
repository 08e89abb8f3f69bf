use std::io::Write;

mod transformer;

use threadpool::ThreadPool;
use transformer::Transformer;

use crate::{
    color::Rgb565ColorFormat,
    image::{Image, ImageWriter},
    Error,
};

/// Writes the packed dots as headerless little-endian 16 bit values.
pub struct Rgb565ImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image<u8>,
    threadpool: &'a ThreadPool,
    destination_name: String,
}

impl<'a, T: Write> Rgb565ImageWriter<'a, T> {
    pub fn new(
        writer: T,
        image: &'a Image<u8>,
        threadpool: &'a ThreadPool,
        destination_name: impl Into<String>,
    ) -> Self {
        Self {
            writer,
            image,
            threadpool,
            destination_name: destination_name.into(),
        }
    }

    pub fn into_inner(self) -> T {
        self.writer
    }

    fn write_bands(&mut self, bands: &[Vec<Rgb565ColorFormat>]) -> std::io::Result<usize> {
        let mut bytes_written = 0;
        for dot in bands.iter().flatten() {
            self.writer.write_all(&dot.to_le_bytes())?;
            bytes_written += 2;
        }
        self.writer.flush()?;
        Ok(bytes_written)
    }
}

impl<T: Write> ImageWriter for Rgb565ImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<usize> {
        let transformer = Transformer::new(self.image, self.threadpool);
        let bands = transformer.transform()?;
        self.write_bands(&bands)
            .map_err(|e| Error::FailedToWriteImageData(self.destination_name.clone(), e))
    }
}
