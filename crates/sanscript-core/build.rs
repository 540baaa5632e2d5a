use std::fs;

const SCHEME_DIR: &str = "src/scheme/data";

fn main() {
    // Every file here is include_str!'d into the library.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );

    println!("cargo:rerun-if-changed={SCHEME_DIR}");
    let entries = fs::read_dir(SCHEME_DIR).expect("scheme data directory must exist");
    for entry in entries {
        let path = entry.expect("readable scheme data entry").path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let content = fs::read_to_string(&path).expect("readable scheme file");
        validate_scheme(&path.display().to_string(), &content);
    }
}

fn validate_toml(path: &str, content: &str) -> toml::Value {
    match content.parse::<toml::Value>() {
        Ok(value) => value,
        Err(_) => panic!("{path} contains invalid TOML"),
    }
}

fn validate_scheme(path: &str, content: &str) {
    let value = validate_toml(path, content);
    let Some(table) = value.as_table() else {
        panic!("{path}: top level must be a table");
    };
    for key in ["name", "kind"] {
        if !table.get(key).is_some_and(|v| v.is_str()) {
            panic!("{path}: missing string field `{key}`");
        }
    }
    if !table.get("categories").is_some_and(|v| v.is_table()) {
        panic!("{path}: missing [categories] table");
    }
}
