use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to render view: {0}")]
    Render(#[from] askama::Error),

    #[error("scores do not average to a usable number")]
    InvalidScore,
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        match self {
            ViewError::Render(_) => {
                tracing::error!(error = %self, "view rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            ViewError::InvalidScore => {
                tracing::debug!(error = %self, "rejected score submission");
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
            }
        }
    }
}
