use std::fs;
use std::path::Path;

use serde::Serialize;

use sanscript::scheme::parse_scheme_toml;
use sanscript::Registry;

use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeInfo {
    pub name: String,
    pub kind: String,
    pub preprocess: Option<String>,
    /// Canonical graphemes that have alternate spellings.
    pub alternates: usize,
}

/// Every registered scheme, sorted by name.
pub fn list_schemes(registry: &Registry) -> Vec<SchemeInfo> {
    registry
        .names()
        .into_iter()
        .filter_map(|name| {
            let kind = registry.kind(name)?;
            Some(SchemeInfo {
                name: name.to_string(),
                kind: kind.to_string(),
                preprocess: registry.preprocessor(name).map(|p| p.to_string()),
                alternates: registry.alternates(name).map_or(0, |a| a.len()),
            })
        })
        .collect()
}

pub fn render_text(schemes: &[SchemeInfo]) -> String {
    let width = schemes.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for s in schemes {
        out.push_str(&format!("{:<width$}  {:<7}", s.name, s.kind));
        if let Some(p) = &s.preprocess {
            out.push_str(&format!("  preprocess={p}"));
        }
        if s.alternates > 0 {
            out.push_str(&format!("  alternates={}", s.alternates));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(schemes: &[SchemeInfo]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(schemes)?)
}

/// Parse a scheme document without registering it.
pub fn validate_scheme_file(path: &Path) -> Result<SchemeInfo, CliError> {
    let content = fs::read_to_string(path)?;
    let doc = parse_scheme_toml(&content).map_err(|source| CliError::SchemeFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SchemeInfo {
        name: doc.name,
        kind: doc.scheme.kind().to_string(),
        preprocess: doc.preprocessor.map(|p| p.to_string()),
        alternates: doc.alternates.len(),
    })
}
