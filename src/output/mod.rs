//! Output formatting.

mod response;

pub use response::{Response, format_json_error, format_response};
