//! Delimited text decoding and export encoding for classification rows.
//!
//! # Responsibility
//! - Decode header-mapped CSV text into `Record` lists.
//! - Encode a record view back into always-quoted CSV text.
//!
//! # Invariants
//! - Rows whose `code` is blank after trim are dropped silently.
//! - Empty or non-numeric weights decode to `None`, never to `0` or an error.
//! - Columns may appear in any order; unknown columns are ignored.
//! - A leading UTF-8 byte order mark is not part of the header.
//! - Encoded fields are always quoted, internal quotes doubled.

use crate::model::record::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field delimiter for both decode and encode.
pub const FIELD_DELIMITER: char = ',';
/// Export column order, also accepted as input header names.
pub const EXPORT_COLUMNS: [&str; 5] = ["code", "label_fr", "parent", "level", "weight"];

const LABEL_COLUMNS: [&str; 2] = ["label_fr", "label"];

// Leading numeric prefix, matching lenient float parsing ("12.5 %" -> 12.5).
static NUMERIC_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid numeric regex")
});

/// Structural decode failures. Row-level problems never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvDecodeError {
    /// Input has no non-blank line to use as header.
    MissingHeader,
    /// Header row has no `code` column.
    MissingCodeColumn { header: Vec<String> },
}

impl Display for CsvDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "csv input has no header row"),
            Self::MissingCodeColumn { header } => {
                write!(f, "csv header has no `code` column: [{}]", header.join(", "))
            }
        }
    }
}

impl Error for CsvDecodeError {}

/// Header name to column position mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnMap {
    code: usize,
    label: Option<usize>,
    parent: Option<usize>,
    level: Option<usize>,
    weight: Option<usize>,
}

impl ColumnMap {
    fn from_header(names: &[String]) -> Result<Self, CsvDecodeError> {
        // Later duplicates shadow earlier ones.
        let positions = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
            .collect::<HashMap<_, _>>();

        let code = *positions
            .get("code")
            .ok_or_else(|| CsvDecodeError::MissingCodeColumn {
                header: names.to_vec(),
            })?;
        let label = LABEL_COLUMNS
            .iter()
            .find_map(|name| positions.get(*name).copied());

        Ok(Self {
            code,
            label,
            parent: positions.get("parent").copied(),
            level: positions.get("level").copied(),
            weight: positions.get("weight").copied(),
        })
    }
}

/// Decodes CSV text into records, in input order.
///
/// # Errors
/// - `MissingHeader` when no non-blank line exists.
/// - `MissingCodeColumn` when the header lacks `code`.
pub fn decode_records(text: &str) -> Result<Vec<Record>, CsvDecodeError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty());

    let header_line = lines.next().ok_or(CsvDecodeError::MissingHeader)?;
    let columns = ColumnMap::from_header(&split_fields(header_line))?;

    Ok(lines
        .filter_map(|line| decode_row(&columns, &split_fields(line)))
        .collect())
}

fn decode_row(columns: &ColumnMap, cells: &[String]) -> Option<Record> {
    let cell = |idx: Option<usize>| {
        idx.and_then(|idx| cells.get(idx))
            .map(|value| value.trim())
            .unwrap_or("")
    };

    let record = Record::new(
        cell(Some(columns.code)),
        cell(columns.label),
        cell(columns.parent),
    )
    .ok()?;
    Some(
        record
            .with_level(cell(columns.level))
            .with_weight(parse_weight(cell(columns.weight))),
    )
}

/// Splits one line into fields, honoring double-quoted fields.
///
/// Inside quotes, the delimiter is literal and `""` is one quote character.
/// Text after a closing quote and before the next delimiter is kept verbatim.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
            continue;
        }

        match ch {
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            FIELD_DELIMITER => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);
    fields
}

/// Parses a weight cell. Empty, non-numeric and non-finite input yield `None`.
pub fn parse_weight(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let prefix = NUMERIC_PREFIX_RE.find(trimmed)?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Encodes records as CSV with a bare header and always-quoted values.
///
/// Returns an empty string for an empty view.
pub fn encode_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        return String::new();
    }

    let mut out = EXPORT_COLUMNS.join(",");
    out.push('\n');
    for record in records {
        let weight = record
            .weight
            .map(|value| value.to_string())
            .unwrap_or_default();
        let fields = [
            record.code.as_str(),
            record.label.as_str(),
            record.parent.as_str(),
            record.level.as_str(),
            weight.as_str(),
        ];
        let line = fields
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn quote_field(raw: &str) -> String {
    let escaped = raw.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
