// src/reference.rs
//
// The d100 table behind the Treasure Hoard tab. Read once from CSV (header
// row + data rows), never written, looked up by 1-based roll.

use std::io;
use std::path::Path;

use crate::error::{LoadError, RangeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// One row, paired with the table's column names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceRow<'a> {
    pub index: usize,
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> ReferenceRow<'a> {
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        let pos = self.headers.iter().position(|h| h == column)?;
        self.values.get(pos).map(String::as_str)
    }

    /// `(column, value)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

impl ReferenceTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::Missing { path: path.to_path_buf() });
        }
        let file = std::fs::File::open(path).map_err(|e| LoadError::Read {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let table = Self::from_reader(file).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        logf!("Reference: {} row(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Rows must all have the header's width.
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(rdr);
        let headers = rdr.headers()?.iter().map(|h| s!(h)).collect();
        let rows = rdr
            .records()
            .map(|r| r.map(|rec| rec.iter().map(|v| s!(v)).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;
        Ok(Self { headers, rows })
    }

    pub fn get(&self, index: usize) -> Result<ReferenceRow<'_>, RangeError> {
        if index == 0 || index > self.rows.len() {
            return Err(RangeError { index, count: self.rows.len() });
        }
        Ok(ReferenceRow {
            index,
            headers: &self.headers,
            values: &self.rows[index - 1],
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Startup path: a missing or broken file still yields a usable (empty)
/// table, with the error handed back for display.
pub fn load_or_empty(path: &Path) -> (ReferenceTable, Option<LoadError>) {
    match ReferenceTable::load(path) {
        Ok(t) => (t, None),
        Err(e) => {
            logw!("Reference: {e}; using an empty table");
            (ReferenceTable::empty(), Some(e))
        }
    }
}
