use std::collections::HashMap;

/// Column holding the course name.
pub const COURSE: &str = "Course";
/// Column holding the hole number.
pub const HOLE: &str = "Hole";
/// Column holding the raw photo reference.
pub const PHOTO: &str = "photo";
/// Optional par column.
pub const PAR: &str = "par";
/// Optional yardage column.
pub const YARDAGE: &str = "yardage";

/// One parsed CSV record, keyed by header name.
///
/// Every field is untrusted: lookups of absent columns yield an empty string
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw value of a column, if the record carried it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of a column, defaulting to `""` when absent.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn course(&self) -> &str {
        self.field(COURSE)
    }

    pub fn hole(&self) -> &str {
        self.field(HOLE)
    }

    pub fn photo(&self) -> &str {
        self.field(PHOTO)
    }

    pub fn par(&self) -> &str {
        self.field(PAR)
    }

    pub fn yardage(&self) -> &str {
        self.field(YARDAGE)
    }

    /// Dedup key: the course name trimmed and lowercased.
    pub fn course_key(&self) -> String {
        self.course().trim().to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
