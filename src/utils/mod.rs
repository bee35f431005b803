// URL handling utilities
pub mod url_encoding;
pub mod url_parser;

// Parsing utilities
pub mod parse_flag;
pub mod parse_int;

// JSON utilities
pub mod json_text;

pub mod random_token;
pub mod status_formatter;

// Re-export all utilities for convenient access
pub use url_encoding::{parse_urlencoded_body, first_values};
pub use url_parser::hostname_from_url;
pub use parse_flag::parse_flag;
pub use parse_int::parse_optional_index;
pub use json_text::json_to_text;
pub use random_token::random_token;
pub use status_formatter::format_status;
