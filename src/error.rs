use std::error::Error as StdError;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    BitIndexOutOfRange { index: usize, width: usize },
    Message(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::BitIndexOutOfRange { index, width } => {
                write!(f, "BitIndexOutOfRange: bit {} of a {}-bit value", index, width)
            }
            Error::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn from_index(index: usize, width: usize) -> Self {
        Error::BitIndexOutOfRange { index, width }
    }

    pub fn from_message(msg: String) -> Self {
        Error::Message(msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::from_message(format!("output error: {}", value))
    }
}
