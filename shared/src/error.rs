use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("学籍番号またはパスワードが正しくありません。")]
    UnauthenticatedError,
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ResourceConflict(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ResourceConflict(_) => StatusCode::CONFLICT,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self, error.message = %self,
                "Unexpected error happened"
            );
        }

        // フロントエンドは message をそのまま表示する
        (status_code, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_taxonomy() {
        assert_eq!(
            AppError::UnauthenticatedError.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::EntityNotFound("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ResourceConflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::UnprocessableEntity("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::NoRowsAffectedError("none".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthenticated_message_does_not_leak_which_part_was_wrong() {
        // ユーザー不存在とパスワード不一致で同じ文言を返す
        assert_eq!(
            AppError::UnauthenticatedError.to_string(),
            "学籍番号またはパスワードが正しくありません。"
        );
    }
}
