use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use super::ActionError;
use crate::models::ActionErrorBody;

/// Every action failure is a `400` carrying `{ "message": ... }`, matching
/// what Actions clients display to the user.
impl ResponseError for ActionError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ActionErrorBody {
            message: self.user_message(),
        })
    }
}
