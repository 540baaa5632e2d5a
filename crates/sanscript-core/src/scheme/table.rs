//! Scheme tables bundled with the engine.

pub(crate) const BUILTIN_SCHEMES: &[(&str, &str)] = &[
    ("bengali", include_str!("data/bengali.toml")),
    ("devanagari", include_str!("data/devanagari.toml")),
    ("gujarati", include_str!("data/gujarati.toml")),
    ("gurmukhi", include_str!("data/gurmukhi.toml")),
    ("kannada", include_str!("data/kannada.toml")),
    ("malayalam", include_str!("data/malayalam.toml")),
    ("oriya", include_str!("data/oriya.toml")),
    ("tamil", include_str!("data/tamil.toml")),
    ("telugu", include_str!("data/telugu.toml")),
    ("iast", include_str!("data/iast.toml")),
    ("itrans", include_str!("data/itrans.toml")),
    ("itrans_dravidian", include_str!("data/itrans_dravidian.toml")),
    ("hk", include_str!("data/hk.toml")),
    ("kolkata", include_str!("data/kolkata.toml")),
    ("slp1", include_str!("data/slp1.toml")),
    ("velthuis", include_str!("data/velthuis.toml")),
    ("wx", include_str!("data/wx.toml")),
];
