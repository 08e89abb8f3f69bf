use std::sync::Arc;

use crate::color::RGBColorFormat;

pub mod reader;
pub mod writer;

pub trait ImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image<T>>;
}

pub trait ImageWriter {
    /// Writes the image and returns the number of bytes produced.
    fn write_image(&mut self) -> crate::Result<usize>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn number_of_dots(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Decoded pixels in row-major order, origin top left.
pub struct Image<T> {
    width: u32,
    height: u32,
    dots: Arc<[RGBColorFormat<T>]>,
}

impl<T> Image<T> {
    pub fn new(width: u32, height: u32, dots: Vec<RGBColorFormat<T>>) -> Self {
        assert_eq!(
            dots.len(),
            width as usize * height as usize,
            "Number of dots must match the image size"
        );
        Self {
            width,
            height,
            dots: dots.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn dots(&self) -> &[RGBColorFormat<T>] {
        &self.dots
    }

    /// The dots behind a shared handle, for jobs that outlive a borrow.
    pub fn shared_dots(&self) -> Arc<[RGBColorFormat<T>]> {
        Arc::clone(&self.dots)
    }
}
