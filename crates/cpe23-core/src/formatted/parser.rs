use tracing::{debug, trace};

use super::error::DecodeError;
use super::layout;
use super::reader::{FormattedReader, unescape};
use crate::{AttributeValue, CpeRecord};

/// Decode a CPE 2.3 formatted string into a [`CpeRecord`].
///
/// # Examples
/// ```
/// use cpe23_core::{AttributeValue, decode};
///
/// let record = decode("cpe:2.3:a:vendor:product:1.0:*:*:*:*:*:*:*")?;
/// assert_eq!(record.version, AttributeValue::Literal("1.0".to_string()));
/// assert!(record.update.is_any());
/// # Ok::<(), cpe23_core::DecodeError>(())
/// ```
pub fn decode(input: &str) -> Result<CpeRecord, DecodeError> {
    let reader = FormattedReader::new(input);
    let fields = reader.read_fields().inspect_err(|err| {
        debug!(input, error = %err, "rejected formatted string");
    })?;

    let [
        part,
        vendor,
        product,
        version,
        update,
        edition,
        language,
        sw_edition,
        target_sw,
        target_hw,
        other,
    ] = fields.map(bind_field);

    trace!(input, "decoded formatted string");
    Ok(CpeRecord {
        part,
        vendor,
        product,
        version,
        update,
        edition,
        language,
        sw_edition,
        target_sw,
        target_hw,
        other,
    })
}

/// Binds one raw field; `*` and `-` are sentinels only when they are the whole field.
pub fn bind_field(raw: &str) -> AttributeValue {
    match raw {
        layout::ANY_VALUE => AttributeValue::Any,
        layout::NOT_APPLICABLE_VALUE => AttributeValue::NotApplicable,
        _ => AttributeValue::Literal(unescape(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::{bind_field, decode};
    use crate::formatted::error::DecodeError;
    use crate::{Attribute, AttributeValue};

    fn literal(value: &str) -> AttributeValue {
        AttributeValue::Literal(value.to_string())
    }

    #[test]
    fn decode_basic_application() {
        let record = decode("cpe:2.3:a:vendor:product:1.0:*:*:*:*:*:*:*").unwrap();
        assert_eq!(record.part, literal("a"));
        assert_eq!(record.vendor, literal("vendor"));
        assert_eq!(record.product, literal("product"));
        assert_eq!(record.version, literal("1.0"));
        for attribute in &Attribute::ALL[4..] {
            assert!(record.get(*attribute).is_any(), "{attribute} should be ANY");
        }
    }

    #[test]
    fn decode_escaped_wildcard_and_na() {
        let record = decode(r"cpe:2.3:a:vendor:prod\*uct:-:*:*:*:*:*:*:*").unwrap();
        assert_eq!(record.product, literal("prod*uct"));
        assert!(record.version.is_not_applicable());
        assert!(!record.product.is_not_applicable());
    }

    #[test]
    fn decode_missing_field() {
        let err = decode("cpe:2.3:a:b:c:d:e:f:g:h:i:j").unwrap_err();
        assert_eq!(
            err,
            DecodeError::WrongArity {
                expected: 11,
                actual: 10,
            }
        );
    }

    #[test]
    fn decode_old_version_prefix() {
        let err = decode("cpe:2.2:a:b:c:d:e:f:g:h:i:j:k").unwrap_err();
        assert_eq!(err, DecodeError::InvalidPrefix);
    }

    #[test]
    fn decode_uri_binding_is_rejected() {
        let err = decode("cpe:/a:vendor:product:1.0").unwrap_err();
        assert_eq!(err, DecodeError::InvalidPrefix);
    }

    #[test]
    fn decode_empty_fields_are_empty_literals() {
        let record = decode(&format!("cpe:2.3:{}", ":".repeat(10))).unwrap();
        for (_, value) in record.iter() {
            assert_eq!(value, &literal(""));
        }
    }

    #[test]
    fn bind_field_sentinels_only_when_whole_field() {
        assert_eq!(bind_field("*"), AttributeValue::Any);
        assert_eq!(bind_field("-"), AttributeValue::NotApplicable);
        assert_eq!(bind_field("**"), literal("**"));
        assert_eq!(bind_field("1.0-rc1"), literal("1.0-rc1"));
        assert_eq!(bind_field("*foo"), literal("*foo"));
    }

    #[test]
    fn bind_field_escaped_sentinels_are_literals() {
        assert_eq!(bind_field(r"\*"), literal("*"));
        assert_eq!(bind_field(r"\-"), literal("-"));
    }

    #[test]
    fn bind_field_keeps_unknown_escape() {
        assert_eq!(bind_field(r"internet_explorer\.exe"), literal(r"internet_explorer\.exe"));
    }
}
