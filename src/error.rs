use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDetectImageFormat(String, std::io::Error),
    UnableToDecodeImage(String, ::image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteImageData(String, std::io::Error),
    FailedToPersistOutputFile(String, std::io::Error),
    FailedToConvertImageRows(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDetectImageFormat(path, error) => {
                write!(
                    f,
                    "Unable to detect image format of '{}': {}",
                    path, error
                )
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteImageData(path, error) => {
                write!(f, "Failed to write image data to '{}': {}", path, error)
            }
            Self::FailedToPersistOutputFile(path, error) => {
                write!(f, "Failed to persist output file '{}': {}", path, error)
            }
            Self::FailedToConvertImageRows(received, expected) => {
                write!(
                    f,
                    "Conversion workers stopped early. Received {} of {} row bands.",
                    received, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToDetectImageFormat(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteImageData(_, error)
            | Self::FailedToPersistOutputFile(_, error) => Some(error),
            Self::UnableToDecodeImage(_, error) => Some(error),
            Self::InputFileNotFound(_) | Self::FailedToConvertImageRows(_, _) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use super::Error;

    #[test]
    fn display_input_file_not_found() {
        let error = Error::InputFileNotFound("missing.png".to_owned());
        assert_eq!(error.to_string(), "Input file 'missing.png' not found");
    }

    #[test]
    fn io_errors_are_exposed_as_source() {
        let error = Error::FailedToWriteImageData(
            "out.raw".to_owned(),
            io::Error::new(io::ErrorKind::WriteZero, "disk full"),
        );
        let source = std::error::Error::source(&error).expect("Source must be present");
        assert_eq!(source.to_string(), "disk full");
    }
}
