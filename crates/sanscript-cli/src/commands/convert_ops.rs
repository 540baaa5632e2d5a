use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use sanscript::settings::settings;
use sanscript::{Options, Registry, Sanscript};

use crate::CliError;

/// The bundled schemes plus any scheme documents given on the command line.
pub fn load_registry(scheme_files: &[PathBuf]) -> Result<Registry, CliError> {
    let mut registry = Registry::builtin();
    for path in scheme_files {
        registry
            .load_file(path)
            .map_err(|source| CliError::SchemeFile {
                path: path.clone(),
                source,
            })?;
    }
    Ok(registry)
}

pub fn build_engine(scheme_files: &[PathBuf]) -> Result<Sanscript, CliError> {
    let registry = load_registry(scheme_files)?;
    Ok(Sanscript::with_registry(
        registry,
        settings().cache.capacity,
    ))
}

/// Settings defaults, overridden by whichever flags were given.
pub fn options_from_flags(skip_sgml: Option<bool>, syncope: Option<bool>) -> Options {
    apply_flags(&settings().options, skip_sgml, syncope)
}

fn apply_flags(defaults: &Options, skip_sgml: Option<bool>, syncope: Option<bool>) -> Options {
    Options {
        skip_sgml: skip_sgml.unwrap_or(defaults.skip_sgml),
        syncope: syncope.unwrap_or(defaults.syncope),
        ..defaults.clone()
    }
}

/// Transliterate all of `input` in one call and write the result.
///
/// The whole input is one text: a bare consonant at the end of a line still
/// sees the newline that follows it.
pub fn convert_stream(
    engine: &Sanscript,
    mut input: impl Read,
    mut output: impl Write,
    from: &str,
    to: &str,
    options: &Options,
) -> Result<(), CliError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let out = engine.transliterate(&text, from, to, options)?;
    output.write_all(out.as_bytes())?;
    output.flush()?;
    Ok(())
}

pub fn convert_file(
    engine: &Sanscript,
    path: &Path,
    output: impl Write,
    from: &str,
    to: &str,
    options: &Options,
) -> Result<(), CliError> {
    let file = std::fs::File::open(path)?;
    convert_stream(engine, file, output, from, to, options)
}
