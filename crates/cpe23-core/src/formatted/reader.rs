use super::error::DecodeError;
use super::layout;

pub struct FormattedReader<'a> {
    input: &'a str,
}

impl<'a> FormattedReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn strip_prefix(&self) -> Result<&'a str, DecodeError> {
        self.input
            .strip_prefix(layout::PREFIX)
            .ok_or(DecodeError::InvalidPrefix)
    }

    /// Splits on every `:`; the grammar has no escaped delimiter.
    pub fn read_fields(&self) -> Result<[&'a str; layout::FIELD_COUNT], DecodeError> {
        let body = self.strip_prefix()?;
        let fields: Vec<&'a str> = body.split(layout::DELIMITER).collect();
        let actual = fields.len();
        fields.try_into().map_err(|_| DecodeError::WrongArity {
            expected: layout::FIELD_COUNT,
            actual,
        })
    }
}

pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == layout::ESCAPE {
            if let Some(&next) = chars.peek() {
                if layout::QUOTABLE.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
