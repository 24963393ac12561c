use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Zip(zip::result::ZipError),
    /// The parent directory of the requested output path does not exist.
    /// Missing directories are reported, never created.
    OutputDir(PathBuf),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Zip(e) => write!(f, "ZIP error: {e}"),
            Error::OutputDir(dir) => {
                write!(f, "output directory does not exist: {}", dir.display())
            }
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
