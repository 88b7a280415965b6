use crate::Attribute;

pub const PREFIX: &str = "cpe:2.3:";
pub const DELIMITER: char = ':';
pub const ESCAPE: char = '\\';

pub const FIELD_COUNT: usize = Attribute::ALL.len();

pub const ANY_VALUE: &str = "*";
pub const NOT_APPLICABLE_VALUE: &str = "-";

/// Characters that may follow `\` in a literal; any other escape is kept as-is.
pub const QUOTABLE: [char; 4] = ['*', '?', '-', '\\'];
