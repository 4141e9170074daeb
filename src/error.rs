// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure: client construction, connection, body read.
    Http(String),
    /// The response body could not be decoded as an image.
    Decode(String),
    /// A background download task failed or was dropped before completing.
    Task(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Task(e) => write!(f, "Task Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
