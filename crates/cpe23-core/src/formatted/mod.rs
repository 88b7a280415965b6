//! CPE 2.3 formatted-string decoding.
//!
//! The parser checks the `cpe:2.3:` prefix, splits the remainder on every
//! `:` into exactly eleven raw fields, then binds each field independently:
//! a bare `*` is ANY, a bare `-` is NA, anything else is a literal with the
//! quoted characters `\*`, `\?`, `\-` and `\\` resolved. Other `\X`
//! sequences are kept verbatim so malformed escapes stay visible.
//!
//! Literals, delimiters and the attribute order live in `layout`; prefix,
//! split and unescape conventions live in `reader`.
//!
//! Version française (résumé):
//! Le module décode les chaînes formatées CPE 2.3 : préfixe, découpage en
//! onze champs, puis liaison de chaque champ (ANY, NA ou littéral déséchappé).

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::DecodeError;
pub use parser::decode;
