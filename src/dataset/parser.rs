use tracing::warn;

/// Safety bound on the number of fields produced for a single CSV line.
///
/// Once a line reaches this many fields, further commas stop splitting and the
/// remainder of the line accumulates into the final field. This is a defensive
/// limit against pathological input, not a format rule.
pub const MAX_FIELDS_PER_LINE: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// One parsed data row: an ordered mapping from CSV header name to field
/// value.
///
/// Keys keep header order. A duplicated header keeps its first position but
/// takes the value of its last occurrence, matching positional-then-keyed
/// assignment. All values are strings; there is no type coercion.
pub struct Record {
    entries: Vec<(String, String)>,
}

impl Record {
    /// Construct an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, overwriting the value (but keeping the
    /// position) of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Lookup the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(key, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in header order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    /// Number of keys in this record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse raw CSV text into records keyed by the header line.
///
/// The first non-blank line is the header set; every later non-blank line
/// becomes one [`Record`] in input order. Lines shorter than the header pad
/// missing trailing fields with `""`; extra fields beyond the header count
/// are dropped. Both LF and CRLF line endings are accepted and blank or
/// all-whitespace lines are ignored.
///
/// Input with no usable lines yields an empty vec and a diagnostic; this
/// function never fails on malformed input.
#[tracing::instrument(skip(text))]
pub fn parse_records(text: &str) -> Vec<Record> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        warn!("csv input contains no usable lines");
        return Vec::new();
    };

    let headers = split_line(header_line);
    let mut records = Vec::with_capacity(data_lines.len());
    for line in data_lines {
        let fields = split_line(line);
        let mut record = Record::new();
        for (i, header) in headers.iter().enumerate() {
            record.insert(header.clone(), fields.get(i).cloned().unwrap_or_default());
        }
        records.push(record);
    }
    records
}

/// Split one CSV line into trimmed fields.
///
/// Single-pass state machine with one boolean state: inside a quoted field.
/// Two consecutive quotes inside a quoted field collapse to one literal quote;
/// an unterminated quote at end of line is tolerated, not rejected.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut capped = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                if fields.len() + 1 < MAX_FIELDS_PER_LINE {
                    fields.push(current.trim().to_string());
                    current.clear();
                } else {
                    // Cap reached: stop splitting, keep the rest literal.
                    if !capped {
                        warn!(cap = MAX_FIELDS_PER_LINE, "line exceeds field cap");
                        capped = true;
                    }
                    current.push(c);
                }
            }
            other => current.push(other),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Serialize `records` back to CSV text with every field double-quoted.
///
/// Embedded quotes are doubled; fields missing from a record are written as
/// empty. Lines end with `\n`.
pub fn write_records(headers: &[String], records: &[Record]) -> String {
    let mut out = String::new();
    push_row(&mut out, headers.iter().map(String::as_str));
    for record in records {
        push_row(&mut out, headers.iter().map(|h| record.get(h).unwrap_or("")));
    }
    out
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/parser.rs"]
mod tests;
