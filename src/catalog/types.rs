use crate::{LibraryError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single book in the catalog
///
/// Field order here is the field order of the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Title, the (case-insensitive) match key for remove and edit
    pub title: String,
    pub author: String,
    /// Publication year, `0 < year <= current year`
    pub year: i32,
    pub genre: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
}

impl Record {
    /// Build a record from already-gathered field values and validate it
    /// against the current calendar year.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        is_read: bool,
    ) -> Result<Self> {
        let record = Self {
            title: title.into().trim().to_string(),
            author: author.into().trim().to_string(),
            year,
            genre: genre.into().trim().to_string(),
            is_read,
        };
        record.validate()?;
        Ok(record)
    }

    /// Validate against the current calendar year
    pub fn validate(&self) -> Result<()> {
        self.validate_for_year(current_year())
    }

    /// Validate with an explicit notion of "current year"
    pub fn validate_for_year(&self, current_year: i32) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("author", &self.author)?;
        if self.year <= 0 {
            return Err(LibraryError::validation(
                "year",
                format!("{} must be greater than 0", self.year),
            ));
        }
        if self.year > current_year {
            return Err(LibraryError::validation(
                "year",
                format!("{} is after the current year {}", self.year, current_year),
            ));
        }
        require_text("genre", &self.genre)?;
        Ok(())
    }

    /// Case-insensitive exact comparison of the title
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    /// Render a searchable field as text
    pub fn field_text(&self, field: SearchField) -> String {
        match field {
            SearchField::Title => self.title.clone(),
            SearchField::Author => self.author.clone(),
            SearchField::Year => self.year.to_string(),
            SearchField::Genre => self.genre.clone(),
        }
    }

    /// Merge a patch onto this record, producing a new (unvalidated) record
    pub fn merged(&self, patch: &RecordPatch) -> Self {
        Self {
            title: pick_text(&patch.title, &self.title),
            author: pick_text(&patch.author, &self.author),
            year: patch.year.unwrap_or(self.year),
            genre: pick_text(&patch.genre, &self.genre),
            is_read: patch.is_read.unwrap_or(self.is_read),
        }
    }
}

/// Partial update for [`Record`]
///
/// Absent fields, and text fields that are empty after trimming, keep the
/// existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub is_read: Option<bool>,
}

impl RecordPatch {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_read(mut self, is_read: bool) -> Self {
        self.is_read = Some(is_read);
        self
    }

    /// True when applying this patch can't change anything
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.author, &self.genre]
            .iter()
            .all(|field| field.as_deref().map(str::trim).unwrap_or("").is_empty())
            && self.year.is_none()
            && self.is_read.is_none()
    }
}

/// Record fields that can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
    Genre,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Year => "year",
            SearchField::Genre => "genre",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            "genre" => Ok(SearchField::Genre),
            other => Err(LibraryError::InvalidQuery(format!(
                "unknown search field '{}' (expected title, author, year or genre)",
                other
            ))),
        }
    }
}

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(field, "cannot be empty"));
    }
    Ok(())
}

fn pick_text(candidate: &Option<String>, current: &str) -> String {
    match candidate.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current.to_string(),
    }
}
