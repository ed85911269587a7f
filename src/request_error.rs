use std::io::Cursor;

use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder, Response};
use rocket::Request;

/// Everything that makes the API reject a request.
///
/// `Unauthorized` answers with 401, the malformed-input variants with 400,
/// and `Storage` passes a database failure through as a plain 500.
#[derive(Debug)]
pub enum RequestError {
    Unauthorized,
    InvalidBoard { state: String },
    BoardFull { state: String },
    MissingOutcome,
    Storage(sqlx::Error),
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Storage(error) => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "no authenticated player"),
            Self::InvalidBoard { state } => write!(f, "invalid board: {}", state),
            Self::BoardFull { state } => {
                write!(f, "no empty cell left on the board: {}", state)
            }
            Self::MissingOutcome => write!(f, "an outcome must be provided"),
            Self::Storage(error) => write!(f, "database request failed: {}", error),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(error: sqlx::Error) -> Self {
        Self::Storage(error)
    }
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        let status = match &self {
            RequestError::Unauthorized => Status::Unauthorized,
            RequestError::Storage(_) => Status::InternalServerError,
            _ => Status::BadRequest,
        };
        if let RequestError::Storage(error) = &self {
            log::error!("a database request failed: {}", error);
        }

        let body = self.to_string();
        Response::build()
            .status(status)
            .header(ContentType::Plain)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;
