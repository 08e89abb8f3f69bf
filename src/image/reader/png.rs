use std::io::{BufRead, Seek};

use ::image::{DynamicImage, ImageFormat, ImageReader as Decoder};

use super::super::Image;
use super::super::ImageReader;
use crate::color::RGBColorFormat;
use crate::Error;

/// Decodes PNG (or any other format the decoder recognizes) into 8 bit RGB.
pub struct PngImageReader<T: BufRead + Seek> {
    reader: T,
    source_name: String,
    format_hint: Option<ImageFormat>,
}

impl<T: BufRead + Seek> PngImageReader<T> {
    pub fn new(reader: T, source_name: impl Into<String>) -> Self {
        Self {
            reader,
            source_name: source_name.into(),
            format_hint: None,
        }
    }

    /// Format to fall back on when the content carries no magic bytes,
    /// usually derived from the file extension.
    pub fn with_format_hint(mut self, format_hint: Option<ImageFormat>) -> Self {
        self.format_hint = format_hint;
        self
    }

    fn decode(&mut self) -> crate::Result<DynamicImage> {
        let mut decoder = Decoder::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| Error::UnableToDetectImageFormat(self.source_name.clone(), e))?;
        if decoder.format().is_none() {
            if let Some(format) = self.format_hint {
                decoder.set_format(format);
            }
        }
        log::debug!(
            "Detected format {:?} for '{}'",
            decoder.format(),
            self.source_name
        );
        decoder
            .decode()
            .map_err(|e| Error::UnableToDecodeImage(self.source_name.clone(), e))
    }
}

impl<T: BufRead + Seek> ImageReader<u8> for PngImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image<u8>> {
        let decoded = self.decode()?;
        // alpha is dropped, palettes and 16 bit channels are flattened
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        let dots = rgb
            .pixels()
            .map(|pixel| RGBColorFormat::new(pixel[0], pixel[1], pixel[2]))
            .collect();
        Ok(Image::new(width, height, dots))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use ::image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    use super::PngImageReader;
    use crate::color::RGBColorFormat;
    use crate::image::ImageReader;
    use crate::Error;

    fn encode(image: impl Into<::image::DynamicImage>, format: ImageFormat) -> Cursor<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .into()
            .write_to(&mut buffer, format)
            .expect("Encoding of test image failed");
        buffer.set_position(0);
        buffer
    }

    fn encode_png(image: impl Into<::image::DynamicImage>) -> Cursor<Vec<u8>> {
        encode(image, ImageFormat::Png)
    }

    #[test]
    fn read_rgb_png_row_major() {
        let mut source = RgbImage::new(2, 2);
        source.put_pixel(0, 0, Rgb([255, 0, 0]));
        source.put_pixel(1, 0, Rgb([0, 255, 0]));
        source.put_pixel(0, 1, Rgb([0, 0, 255]));
        source.put_pixel(1, 1, Rgb([10, 20, 30]));
        let mut reader = PngImageReader::new(encode_png(source), "memory");
        let image = reader.read_image().expect("Decoding failed");
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(
            image.dots(),
            &[
                RGBColorFormat::new(255, 0, 0),
                RGBColorFormat::new(0, 255, 0),
                RGBColorFormat::new(0, 0, 255),
                RGBColorFormat::new(10, 20, 30),
            ]
        );
    }

    #[test]
    fn read_rgba_png_discards_alpha() {
        let source = RgbaImage::from_pixel(3, 1, Rgba([200, 100, 50, 0]));
        let mut reader = PngImageReader::new(encode_png(source), "memory");
        let image = reader.read_image().expect("Decoding failed");
        for dot in image.dots() {
            assert_eq!(*dot, RGBColorFormat::new(200, 100, 50), "alpha was applied");
        }
    }

    #[test]
    fn read_garbage_fails_with_decode_error() {
        let data = Cursor::new(b"definitely not an image".to_vec());
        let mut reader = PngImageReader::new(data, "garbage.png");
        match reader.read_image() {
            Err(Error::UnableToDecodeImage(name, _)) => assert_eq!(name, "garbage.png"),
            Err(other) => panic!("Unexpected error: {}", other),
            Ok(_) => panic!("Garbage must not decode"),
        }
    }

    #[test]
    fn read_tga_with_format_hint() {
        let source = RgbImage::from_pixel(2, 1, Rgb([255, 0, 0]));
        let data = encode(source, ImageFormat::Tga);
        let mut reader =
            PngImageReader::new(data, "image.tga").with_format_hint(Some(ImageFormat::Tga));
        let image = reader.read_image().expect("Decoding failed");
        assert_eq!(image.dots(), &[RGBColorFormat::new(255, 0, 0); 2]);
    }

    #[test]
    fn read_tga_without_format_hint_fails() {
        let source = RgbImage::from_pixel(2, 1, Rgb([255, 0, 0]));
        let mut reader = PngImageReader::new(encode(source, ImageFormat::Tga), "image");
        assert!(matches!(
            reader.read_image(),
            Err(Error::UnableToDecodeImage(_, _))
        ));
    }

    #[test]
    fn content_wins_over_wrong_format_hint() {
        let source = RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]));
        let mut reader = PngImageReader::new(encode_png(source), "image.tga")
            .with_format_hint(Some(ImageFormat::Tga));
        let image = reader.read_image().expect("Decoding failed");
        assert_eq!(image.dots(), &[RGBColorFormat::new(0, 0, 255)]);
    }
}
