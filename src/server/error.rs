use std::{error::Error, fmt::Display};

use hyper::StatusCode;

#[derive(Debug)]
pub struct ServerError {
    pub prefix: &'static str,
    pub message: String,
    pub status_code: StatusCode
}

impl Error for ServerError {}

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

impl From<hyper::Error> for ServerError {
    fn from(err: hyper::Error) -> Self {
        ServerError {
            prefix: "[HYPER ERROR]",
            message: err.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
