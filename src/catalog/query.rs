use crate::catalog::types::{Record, SearchField};
use crate::{LibraryError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Placeholder for "most frequent" values of an empty catalog
pub const NOT_APPLICABLE: &str = "N/A";

/// Read-only search and statistics over a slice of records
pub struct CatalogQuery<'a> {
    records: &'a [Record],
}

impl<'a> CatalogQuery<'a> {
    /// Create a new query over the given records
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// All records whose `field` equals `query`, compared as lowercase text.
    ///
    /// For [`SearchField::Year`] the query must be an integer; it is compared
    /// in its canonical form, so "01999" finds 1999.
    pub fn search(&self, field: SearchField, query: &str) -> Result<Vec<&'a Record>> {
        let needle = normalize_query(field, query)?;

        Ok(self
            .records
            .iter()
            .filter(|record| record.field_text(field).to_lowercase() == needle)
            .collect())
    }

    /// Aggregate statistics over every record
    pub fn statistics(&self) -> CatalogStats {
        let total = self.records.len();
        let read = self.records.iter().filter(|record| record.is_read).count();

        let mut authors = FrequencyTable::default();
        let mut genres = FrequencyTable::default();
        let mut total_years: i64 = 0;

        for record in self.records {
            authors.record(&record.author);
            genres.record(&record.genre);
            total_years += i64::from(record.year);
        }

        let average_year = if total > 0 {
            total_years as f64 / total as f64
        } else {
            0.0
        };

        CatalogStats {
            total,
            read,
            unread: total - read,
            most_popular_author: authors.most_frequent().unwrap_or(NOT_APPLICABLE).to_string(),
            most_popular_genre: genres.most_frequent().unwrap_or(NOT_APPLICABLE).to_string(),
            average_year,
        }
    }
}

/// Summary numbers for a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    pub most_popular_author: String,
    pub most_popular_genre: String,
    pub average_year: f64,
}

impl CatalogStats {
    /// Share of read books in percent. Undefined for an empty catalog.
    pub fn read_percentage(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(LibraryError::Division(
                "read percentage of an empty catalog".to_string(),
            ));
        }
        Ok(self.read as f64 / self.total as f64 * 100.0)
    }
}

/// Counts occurrences while remembering first-seen order
#[derive(Default)]
struct FrequencyTable<'a> {
    positions: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, usize)>,
}

impl<'a> FrequencyTable<'a> {
    fn record(&mut self, value: &'a str) {
        match self.positions.get(value) {
            Some(&index) => self.counts[index].1 += 1,
            None => {
                self.positions.insert(value, self.counts.len());
                self.counts.push((value, 1));
            }
        }
    }

    /// Highest count; ties go to the value seen first
    fn most_frequent(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(value, count) in &self.counts {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

fn normalize_query(field: SearchField, query: &str) -> Result<String> {
    let query = query.trim().to_lowercase();
    match field {
        SearchField::Year => query
            .parse::<i128>()
            .map(|year| year.to_string())
            .map_err(|_| {
                LibraryError::InvalidQuery(format!("'{}' is not a valid year", query))
            }),
        _ => Ok(query),
    }
}
