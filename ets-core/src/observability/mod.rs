pub mod logging;
pub mod request_id;

pub use logging::{init_tracing, try_init_tracing};
pub use request_id::{REQUEST_ID_HEADER, extract_request_id, inject_request_id, new_request_id};
