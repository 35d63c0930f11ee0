//! Serializers from the rendered document tree to terminal text or HTML.
mod html;
mod text;

pub use html::to_html;
pub use text::{to_text, TextOptions};
