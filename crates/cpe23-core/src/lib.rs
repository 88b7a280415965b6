//! CPE 2.3 core library for decoding formatted-string names.
//!
//! This crate turns a CPE 2.3 formatted string (`cpe:2.3:part:vendor:...`)
//! into a fixed-shape [`CpeRecord`] of eleven attributes. Decoding is a pure
//! function of its input: the `formatted` module validates the grammar and
//! binds each field, while the `batch` module isolates the only I/O (reading
//! newline-separated candidates from a file or reader).
//!
//! Invariants:
//! - A record always holds exactly the eleven attributes, bound once each.
//! - Decoding either succeeds completely or fails with a [`DecodeError`];
//!   there are no partial records.
//! - Decoding the same input twice yields equal records.
//!
//! Version française (résumé):
//! Cette crate décode les chaînes formatées CPE 2.3 en un enregistrement à
//! onze attributs. Le décodage est pur ; seules les entrées par lot lisent
//! des fichiers. Échec atomique, sans résultat partiel.
//!
//! # Examples
//! ```
//! use cpe23_core::{Attribute, AttributeValue, decode};
//!
//! let record = decode(r"cpe:2.3:a:vendor:prod\*uct:-:*:*:*:*:*:*:*")?;
//! assert_eq!(record.get(Attribute::Product).as_literal(), Some("prod*uct"));
//! assert_eq!(record.version, AttributeValue::NotApplicable);
//! # Ok::<(), cpe23_core::DecodeError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod batch;
mod formatted;

pub use batch::{BatchEntry, BatchError, decode_file, decode_lines};
pub use formatted::{DecodeError, decode};

/// Attribute names of a CPE 2.3 name, in formatted-string order.
///
/// # Examples
/// ```
/// use cpe23_core::Attribute;
///
/// assert_eq!(Attribute::ALL.len(), 11);
/// assert_eq!(Attribute::SwEdition.as_str(), "sw_edition");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    /// All attributes in the order they appear in a formatted string.
    pub const ALL: [Attribute; 11] = [
        Attribute::Part,
        Attribute::Vendor,
        Attribute::Product,
        Attribute::Version,
        Attribute::Update,
        Attribute::Edition,
        Attribute::Language,
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Part => "part",
            Attribute::Vendor => "vendor",
            Attribute::Product => "product",
            Attribute::Version => "version",
            Attribute::Update => "update",
            Attribute::Edition => "edition",
            Attribute::Language => "language",
            Attribute::SwEdition => "sw_edition",
            Attribute::TargetSw => "target_sw",
            Attribute::TargetHw => "target_hw",
            Attribute::Other => "other",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical value of one attribute.
///
/// `Display` renders the logical values as `ANY` and `NA`; literals are
/// written verbatim.
///
/// # Examples
/// ```
/// use cpe23_core::AttributeValue;
///
/// assert_eq!(AttributeValue::Any.to_string(), "ANY");
/// assert_eq!(AttributeValue::NotApplicable.to_string(), "NA");
/// assert_eq!(AttributeValue::Literal("1.0".to_string()).as_literal(), Some("1.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Bound from a bare `*`.
    Any,
    /// Bound from a bare `-`.
    NotApplicable,
    /// Any other field, with quoted characters resolved.
    Literal(String),
}

impl AttributeValue {
    pub fn is_any(&self) -> bool {
        matches!(self, AttributeValue::Any)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, AttributeValue::NotApplicable)
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            AttributeValue::Literal(value) => Some(value),
            _ => None,
        }
    }
}

/// Renders `ANY` and `NA` for the logical values. A literal spelled `ANY` or
/// `NA` prints the same way; use the serde form to tell them apart.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Any => f.write_str("ANY"),
            AttributeValue::NotApplicable => f.write_str("NA"),
            AttributeValue::Literal(value) => f.write_str(value),
        }
    }
}

/// Decoded CPE 2.3 name with exactly one value per attribute.
///
/// Records are only produced by [`decode`] (or [`str::parse`]).
///
/// # Examples
/// ```
/// use cpe23_core::CpeRecord;
///
/// let record: CpeRecord = "cpe:2.3:o:linux:linux_kernel:6.1:*:*:*:*:*:x64:*".parse()?;
/// assert_eq!(record.target_hw.as_literal(), Some("x64"));
/// assert!(record.to_string().starts_with("part: o\n"));
/// # Ok::<(), cpe23_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpeRecord {
    pub part: AttributeValue,
    pub vendor: AttributeValue,
    pub product: AttributeValue,
    pub version: AttributeValue,
    pub update: AttributeValue,
    pub edition: AttributeValue,
    pub language: AttributeValue,
    pub sw_edition: AttributeValue,
    pub target_sw: AttributeValue,
    pub target_hw: AttributeValue,
    pub other: AttributeValue,
}

impl CpeRecord {
    pub fn get(&self, attribute: Attribute) -> &AttributeValue {
        match attribute {
            Attribute::Part => &self.part,
            Attribute::Vendor => &self.vendor,
            Attribute::Product => &self.product,
            Attribute::Version => &self.version,
            Attribute::Update => &self.update,
            Attribute::Edition => &self.edition,
            Attribute::Language => &self.language,
            Attribute::SwEdition => &self.sw_edition,
            Attribute::TargetSw => &self.target_sw,
            Attribute::TargetHw => &self.target_hw,
            Attribute::Other => &self.other,
        }
    }

    /// Iterate attributes in formatted-string order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }
}

impl FromStr for CpeRecord {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for CpeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (attribute, value)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{attribute}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_order_matches_names() {
        let names: Vec<_> = Attribute::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(
            names,
            [
                "part",
                "vendor",
                "product",
                "version",
                "update",
                "edition",
                "language",
                "sw_edition",
                "target_sw",
                "target_hw",
                "other",
            ]
        );
    }

    #[test]
    fn attribute_serializes_as_name() {
        for attribute in Attribute::ALL {
            let value = serde_json::to_value(attribute).expect("attribute json");
            assert_eq!(value, attribute.as_str());
        }
    }

    #[test]
    fn record_json_uses_attribute_names() {
        let record = decode("cpe:2.3:a:vendor:product:-:*:*:*:*:*:*:*").expect("decode");
        let value = serde_json::to_value(&record).expect("record json");
        assert_eq!(value["part"]["literal"], "a");
        assert_eq!(value["version"], "not_applicable");
        assert_eq!(value["other"], "any");
        for attribute in Attribute::ALL {
            assert!(value.get(attribute.as_str()).is_some(), "{attribute} missing");
        }
    }

    #[test]
    fn record_display_lists_attributes_in_order() {
        let record = decode("cpe:2.3:h:cisco:router:-:*:*:*:*:*:*:*").expect("decode");
        let text = record.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "part: h");
        assert_eq!(lines[3], "version: NA");
        assert_eq!(lines[10], "other: ANY");
    }

    #[test]
    fn literal_any_displays_like_sentinel_but_serializes_apart() {
        let record = decode("cpe:2.3:a:ANY:NA:*:-:*:*:*:*:*:*").expect("decode");
        assert_eq!(record.vendor.to_string(), record.version.to_string());
        assert_eq!(record.product.to_string(), record.update.to_string());
        let vendor = serde_json::to_value(&record.vendor).expect("vendor json");
        let version = serde_json::to_value(&record.version).expect("version json");
        assert_ne!(vendor, version);
        assert!(record.update.is_not_applicable());
        assert!(!record.product.is_not_applicable());
    }

    #[test]
    fn record_iter_matches_get() {
        let record = decode("cpe:2.3:a:b:c:d:e:f:g:h:i:j:k").expect("decode");
        for (attribute, value) in record.iter() {
            assert_eq!(value, record.get(attribute));
        }
        assert_eq!(record.iter().count(), 11);
    }
}
