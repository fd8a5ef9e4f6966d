//! Rendering module for serializing bookmark forests to output formats.

mod json;
mod netscape;

pub use json::{to_json, JsonFormat};
pub use netscape::to_netscape_html;
