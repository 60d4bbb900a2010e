//! Response rendering adapters.

mod template;

pub use template::TemplateRenderer;
