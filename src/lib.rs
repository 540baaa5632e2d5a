//! Transliteration between Brahmic scripts and roman schemes for Sanskrit.
//!
//! ```
//! use sanscript::{t, Options};
//!
//! let out = t("rAmaH", "hk", "devanagari", &Options::default()).unwrap();
//! assert_eq!(out, "रामः");
//! ```

mod global;
mod trace_init;

pub use global::{global, install, t, GlobalError};
pub use trace_init::{init_tracing, TraceGuard};

pub use sanscript_core::{
    alternates, cache, engine, error, map, options, preprocess, registry, scheme, settings,
};
pub use sanscript_core::{
    Alternates, Category, Options, Preprocessor, Registry, Sanscript, SanscriptError, Scheme,
    SchemeData, SchemeError, SchemeKind, TransliterationMap,
};
