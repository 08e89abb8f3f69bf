use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use crate::image::{
    reader::png::PngImageReader, writer::rgb565::Rgb565ImageWriter, ImageDimensions, ImageReader,
    ImageWriter,
};
use output_file::AtomicOutputFile;
use threadpool::ThreadPool;

mod cli;
pub mod color;
mod error;
pub mod image;
mod logger;
mod output_file;

pub type Result<T> = std::result::Result<T, error::Error>;

pub const DEFAULT_INPUT_FILE: &str = "input.png";
pub const DEFAULT_OUTPUT_FILE: &str = "output.raw";

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    number_of_threads: usize,
}

impl Arguments {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            number_of_threads: 1,
        }
    }

    pub fn with_threads(mut self, number_of_threads: usize) -> Self {
        self.number_of_threads = number_of_threads;
        self
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    if !file_path.exists() {
        return Err(Error::InputFileNotFound(file_path.display().to_string()));
    }
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<AtomicOutputFile> {
    AtomicOutputFile::create(file_path).map_err(|e| {
        Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
    })
}

/// Decodes the input file and writes it as raw little-endian RGB565.
///
/// The output file is only replaced when every step succeeded.
pub fn convert_png_to_rgb565(arguments: &Arguments) -> Result<ImageDimensions> {
    let input_file = open_input_file(&arguments.input_file)?;
    let input_name = arguments.input_file.display().to_string();
    let format_hint = ::image::ImageFormat::from_path(&arguments.input_file).ok();
    let image = PngImageReader::new(BufReader::new(input_file), input_name)
        .with_format_hint(format_hint)
        .read_image()?;
    let dimensions = image.dimensions();

    let output_name = arguments.output_file.display().to_string();
    let output_file = open_output_file(&arguments.output_file)?;
    let number_of_threads = arguments.number_of_threads.max(1);
    log::debug!("Converting with {} threads", number_of_threads);
    let threadpool = ThreadPool::new(number_of_threads);
    let mut writer = Rgb565ImageWriter::new(output_file, &image, &threadpool, &output_name);
    let bytes_written = writer.write_image()?;
    let output_file = writer.into_inner();
    output_file
        .commit()
        .map_err(|e| Error::FailedToPersistOutputFile(output_name, e))?;

    logger::log_conversion(
        &arguments.input_file,
        &arguments.output_file,
        &dimensions,
        bytes_written,
    );
    Ok(dimensions)
}

/// Converts `input_file` into a raw RGB565 buffer at `output_file`.
///
/// Failures are logged and reported as `false`.
pub fn convert(input_file: impl AsRef<Path>, output_file: impl AsRef<Path>) -> bool {
    let arguments = Arguments::new(input_file.as_ref(), output_file.as_ref());
    match convert_png_to_rgb565(&arguments) {
        Ok(_) => true,
        Err(e) => {
            log::error!("Conversion failed: {}", e);
            false
        }
    }
}
