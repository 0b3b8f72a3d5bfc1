#![deny(clippy::all)]

mod error;
mod links;
pub mod plugin;
mod plugin_driver;
pub mod types;
pub mod utils;

pub use error::PreloadError;
pub use links::*;
pub use plugin::preload::Preload;
pub use plugin_driver::*;
pub use types::*;
