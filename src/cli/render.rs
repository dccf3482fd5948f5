//! Text and JSON rendering of catalog results

use crate::catalog::{CatalogStats, Record};
use crate::Result;
use clap::ValueEnum;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Output format for commands that print records or statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Table row for a book
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Read")]
    read: &'static str,
}

impl From<&Record> for BookRow {
    fn from(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            year: record.year,
            genre: record.genre.clone(),
            read: if record.is_read { "Yes" } else { "No" },
        }
    }
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Statistic")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render records, or `None` when there is nothing to show
pub fn records<'a, I>(records: I, format: OutputFormat) -> Result<Option<String>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    if records.is_empty() {
        return Ok(None);
    }

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Table => {
            let rows: Vec<BookRow> = records.iter().copied().map(BookRow::from).collect();
            Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()))
                .to_string()
        }
    };
    Ok(Some(rendered))
}

/// Render statistics. The read percentage is left out for an empty catalog.
pub fn stats(stats: &CatalogStats, format: OutputFormat) -> Result<String> {
    let read_percentage = stats.read_percentage().ok();

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "total": stats.total,
                "read": stats.read,
                "unread": stats.unread,
                "most_popular_author": stats.most_popular_author,
                "most_popular_genre": stats.most_popular_genre,
                "average_year": round2(stats.average_year),
                "read_percentage": read_percentage.map(round2),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            let mut rows = vec![
                StatRow {
                    name: "Total books",
                    value: stats.total.to_string(),
                },
                StatRow {
                    name: "Unread books",
                    value: stats.unread.to_string(),
                },
                StatRow {
                    name: "Read books",
                    value: stats.read.to_string(),
                },
                StatRow {
                    name: "Most popular author",
                    value: stats.most_popular_author.clone(),
                },
                StatRow {
                    name: "Most popular genre",
                    value: stats.most_popular_genre.clone(),
                },
                StatRow {
                    name: "Average year",
                    value: format!("{:.2}", stats.average_year),
                },
            ];
            if let Some(percentage) = read_percentage {
                rows.push(StatRow {
                    name: "Read percentage",
                    value: format!("{:.2}%", percentage),
                });
            }
            Ok(Table::new(&rows).with(Style::rounded()).to_string())
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogQuery;

    fn catalog() -> Vec<Record> {
        vec![
            Record::new("Dune", "Frank Herbert", 1965, "Science Fiction", true).unwrap(),
            Record::new("Emma", "Jane Austen", 1815, "Romance", false).unwrap(),
        ]
    }

    #[test]
    fn test_records_table_contains_fields() {
        let catalog = catalog();
        let table = records(&catalog, OutputFormat::Table).unwrap().unwrap();

        assert!(table.contains("Title"));
        assert!(table.contains("Frank Herbert"));
        assert!(table.contains("1815"));
        assert!(table.contains("Yes"));
        assert!(table.contains("No"));
    }

    #[test]
    fn test_records_json_uses_document_field_names() {
        let catalog = catalog();
        let json = records(&catalog, OutputFormat::Json).unwrap().unwrap();
        let parsed: Vec<Record> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, catalog);
        assert!(json.contains("\"isRead\""));
    }

    #[test]
    fn test_records_empty_is_none() {
        let empty: Vec<Record> = Vec::new();
        assert!(records(&empty, OutputFormat::Table).unwrap().is_none());
    }

    #[test]
    fn test_stats_empty_omits_percentage() {
        let stats = CatalogQuery::new(&[]).statistics();

        let table = stats_text(&stats);
        assert!(table.contains("N/A"));
        assert!(!table.contains("Read percentage"));

        let json: serde_json::Value =
            serde_json::from_str(&super::stats(&stats, OutputFormat::Json).unwrap()).unwrap();
        assert!(json["read_percentage"].is_null());
        assert_eq!(json["total"], 0);
    }

    #[test]
    fn test_stats_json_rounds() {
        let catalog = vec![
            Record::new("A", "X", 2000, "G", true).unwrap(),
            Record::new("B", "Y", 2001, "H", true).unwrap(),
            Record::new("C", "Y", 2002, "H", false).unwrap(),
        ];
        let stats = CatalogQuery::new(&catalog).statistics();

        let json: serde_json::Value =
            serde_json::from_str(&super::stats(&stats, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["read_percentage"], 66.67);
        assert_eq!(json["average_year"], 2001.0);
        assert!(stats_text(&stats).contains("66.67%"));
    }

    fn stats_text(stats: &CatalogStats) -> String {
        super::stats(stats, OutputFormat::Table).unwrap()
    }
}
