pub mod error_handler;
pub mod request_id;

pub use error_handler::{
    configure_extractors, json_error_handler, path_error_handler, query_error_handler,
};
pub use request_id::{RequestId, RequestIdValue, RequestIdRootSpan, REQUEST_ID_HEADER};
