//! Rust identifier construction for schema names.
//!
//! Schema names are arbitrary GraphQL names; they may collide with Rust
//! keywords. Keywords become raw identifiers (`r#type`), except the few that
//! cannot be raw, which get a trailing underscore.

use proc_macro2::{Ident, Span};

use crate::naming::to_snake_case;

/// Keywords that are valid as raw identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Returns `name` with a trailing underscore if it cannot be used as an
/// identifier even in raw form.
pub fn escape_non_raw(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Makes a cased name usable as an identifier.
///
/// Case conversion drops leading underscores, so `_720P` arrives here as
/// `720P`; a leading digit gets the underscore back.
fn legalize(name: &str) -> String {
    match name.chars().next() {
        None => "field_".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{name}"),
        Some(_) => escape_non_raw(name),
    }
}

/// Builds an identifier for an already-cased name.
///
/// ## Examples
///
/// ```
/// use clientgen::idents::ident;
///
/// assert_eq!(ident("user").to_string(), "user");
/// assert_eq!(ident("type").to_string(), "r#type");
/// assert_eq!(ident("self").to_string(), "self_");
/// assert_eq!(ident("1080P").to_string(), "_1080P");
/// ```
pub fn ident(name: &str) -> Ident {
    let name = legalize(name);
    if KEYWORDS.contains(&name.as_str()) {
        Ident::new_raw(&name, Span::call_site())
    } else {
        Ident::new(&name, Span::call_site())
    }
}

/// Identifier for a struct field or method derived from a schema field name.
pub fn field_ident(name: &str) -> Ident {
    ident(&field_name(name))
}

/// Identifier for a type or variant whose name is already PascalCase.
pub fn type_ident(name: &str) -> Ident {
    ident(name)
}

/// The snake_case spelling used for fields, methods and module files.
///
/// Names made only of underscores become `field_`.
pub fn field_name(name: &str) -> String {
    legalize(&to_snake_case(name))
}
