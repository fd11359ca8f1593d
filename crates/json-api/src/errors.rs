//! API error responses.
//!
//! Every handler failure renders the same JSON body: `message` names the
//! failure class, `error` carries the detail.

use salvo::{
    async_trait,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Wire shape for all non-2xx responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Failure class, e.g. `"Validation error"`.
    pub message: String,

    /// Detail for this specific failure.
    pub error: String,
}

/// A handler error carrying its HTTP status and response body.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    #[must_use]
    pub(crate) fn new(
        status: StatusCode,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            status,
            body: ErrorBody {
                message: message.into(),
                error: error.into(),
            },
        }
    }

    /// 400 with the validation failure class.
    #[must_use]
    pub(crate) fn validation(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation error", error)
    }

    /// 404 for an unknown promotion identifier.
    #[must_use]
    pub(crate) fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Promotion not found", error)
    }

    /// 500 for anything unclassified.
    #[must_use]
    pub(crate) fn server_error(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server error", error)
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.body.message, self.body.error)
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            "4XX",
            oapi::Response::new("Request error")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
        operation.responses.insert(
            "5XX",
            oapi::Response::new("Server error")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
    }
}
