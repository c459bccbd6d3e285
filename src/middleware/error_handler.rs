use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    web, Error, HttpRequest,
};

use crate::core::AppError;

/// Route body deserialization failures through `AppError`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);

    match err {
        JsonPayloadError::Deserialize(e) => AppError::Json(e).into(),
        other => AppError::validation(other.to_string()).into(),
    }
}

/// Route query string failures through `AppError`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(err.to_string()).into()
}

/// Route path parameter failures through `AppError`
///
/// A malformed id is a bad request, not an unknown route.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(err.to_string()).into()
}

/// Register the extractor handlers on a scope or app
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}

fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::debug!(path = %req.path(), error = %err, "Rejected request input");
}
