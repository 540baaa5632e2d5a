pub mod alternates;
pub(crate) mod brahmic;
pub mod cache;
pub mod engine;
pub mod error;
pub mod map;
pub mod options;
pub mod preprocess;
pub mod registry;
pub(crate) mod roman;
pub mod scheme;
pub mod settings;

#[cfg(test)]
mod tests;

pub use alternates::Alternates;
pub use engine::Sanscript;
pub use error::{SanscriptError, SchemeError};
pub use map::TransliterationMap;
pub use options::Options;
pub use preprocess::Preprocessor;
pub use registry::Registry;
pub use scheme::{Category, Scheme, SchemeData, SchemeKind};
