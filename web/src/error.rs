use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};

extern crate log;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => {
                        (StatusCode::NOT_FOUND, "NOT FOUND").into_response()
                    }
                    EntityErrorKind::Invalid => {
                        (StatusCode::BAD_REQUEST, "BAD REQUEST").into_response()
                    }
                    EntityErrorKind::Other(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                    }
                },
                InternalErrorKind::Config | InternalErrorKind::Other(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                }
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Network => {
                    (StatusCode::BAD_GATEWAY, "BAD GATEWAY").into_response()
                }
                ExternalErrorKind::Format | ExternalErrorKind::Other(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                }
            },
        }
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_status(error_kind: DomainErrorKind) -> StatusCode {
        Error(DomainError {
            source: None,
            error_kind,
        })
        .into_response()
        .status()
    }

    #[test]
    fn not_found_maps_to_404() {
        let status = response_status(DomainErrorKind::Internal(InternalErrorKind::Entity(
            EntityErrorKind::NotFound,
        )));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_maps_to_400() {
        let status = response_status(DomainErrorKind::Internal(InternalErrorKind::Entity(
            EntityErrorKind::Invalid,
        )));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_configuration_maps_to_500() {
        let status = response_status(DomainErrorKind::Internal(InternalErrorKind::Config));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_format_failure_maps_to_500() {
        let status = response_status(DomainErrorKind::External(ExternalErrorKind::Format));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn network_failure_maps_to_502() {
        let status = response_status(DomainErrorKind::External(ExternalErrorKind::Network));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
