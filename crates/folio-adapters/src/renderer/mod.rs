//! Site renderers.

mod html;

pub use html::HtmlRenderer;
