mod compilation;
pub use compilation::*;
mod html_document;
pub use html_document::*;
mod preload_plugin_options;
pub use preload_plugin_options::*;
mod normalized_preload_options;
pub use normalized_preload_options::*;
