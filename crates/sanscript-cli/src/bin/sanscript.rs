use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use sanscript_cli::commands::{config_ops, convert_ops, scheme_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "sanscript", about = "Transliterate between Indic scripts and roman schemes")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Write JSON trace events to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text, a file, or stdin
    Convert {
        /// Source scheme
        #[arg(long)]
        from: String,
        /// Destination scheme
        #[arg(long)]
        to: String,
        /// Leave <...> tags and [...] regions untouched
        #[arg(long, overrides_with = "no_skip_sgml")]
        skip_sgml: bool,
        /// Transliterate tags even if settings enable skip_sgml
        #[arg(long, overrides_with = "skip_sgml")]
        no_skip_sgml: bool,
        /// Drop the virama after a final consonant (Hindi-style)
        #[arg(long, overrides_with = "no_syncope")]
        syncope: bool,
        /// Keep the final virama even if settings enable syncope
        #[arg(long, overrides_with = "syncope")]
        no_syncope: bool,
        /// Extra scheme TOML files to register (repeatable)
        #[arg(long = "scheme-file")]
        scheme_files: Vec<PathBuf>,
        /// Read input from this file
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
    },
    /// List registered schemes
    Schemes {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Extra scheme TOML files to register (repeatable)
        #[arg(long = "scheme-file")]
        scheme_files: Vec<PathBuf>,
    },
    /// Validate a scheme TOML file
    SchemeValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

/// `Some` only when one of a `--x`/`--no-x` pair was given.
fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let _trace = cli.trace_dir.as_deref().map(sanscript::init_tracing);
    if let Some(path) = &cli.config {
        die!(config_ops::load_config(path), "Error loading settings: {}");
    }

    match cli.command {
        Command::Convert {
            from,
            to,
            skip_sgml,
            no_skip_sgml,
            syncope,
            no_syncope,
            scheme_files,
            input,
            text,
        } => {
            let engine = die!(convert_ops::build_engine(&scheme_files), "Error: {}");
            let options = convert_ops::options_from_flags(
                flag(skip_sgml, no_skip_sgml),
                flag(syncope, no_syncope),
            );
            match (input, text) {
                (Some(path), _) => die!(
                    convert_ops::convert_file(
                        &engine,
                        &path,
                        io::stdout().lock(),
                        &from,
                        &to,
                        &options
                    ),
                    "Error: {}"
                ),
                (None, Some(text)) => {
                    let out = die!(
                        engine.transliterate(&text, &from, &to, &options),
                        "Error: {}"
                    );
                    println!("{out}");
                }
                (None, None) => die!(
                    convert_ops::convert_stream(
                        &engine,
                        io::stdin().lock(),
                        io::stdout().lock(),
                        &from,
                        &to,
                        &options
                    ),
                    "Error: {}"
                ),
            }
        }
        Command::Schemes { json, scheme_files } => {
            let registry = die!(convert_ops::load_registry(&scheme_files), "Error: {}");
            let schemes = scheme_ops::list_schemes(&registry);
            if json {
                let out = die!(scheme_ops::render_json(&schemes), "Error: {}");
                println!("{out}");
            } else {
                print!("{}", scheme_ops::render_text(&schemes));
            }
        }
        Command::SchemeValidate { file } => {
            let info = die!(scheme_ops::validate_scheme_file(&file), "Error: {}");
            println!(
                "OK: {} ({}), {} alternate groups",
                info.name, info.kind, info.alternates
            );
        }
        Command::SettingsExport => {
            print!("{}", config_ops::settings_export());
            die!(io::stdout().flush(), "Error: {}");
        }
        Command::SettingsValidate { file } => {
            let summary = die!(config_ops::settings_validate(&file), "Error: {}");
            println!("{summary}");
        }
    }
}
