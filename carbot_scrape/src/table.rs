//! Wikitable scraping into a [`SpecBook`].
//!
//! The source page is an external dependency that changes without
//! notice, so everything here is tolerant: columns are located by
//! header text rather than position, tables without the needed headers
//! are skipped, and malformed rows are dropped row-by-row. The scraper
//! itself never fails; an empty result is the caller's warning to give.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use carbot_core::{ModelRecord, SpecBook};

fn static_selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid static selector {css:?}: {e}"))
}

static TABLE: Lazy<Selector> = Lazy::new(|| static_selector("table.wikitable"));
static ROW: Lazy<Selector> = Lazy::new(|| static_selector("tr"));
static CELL: Lazy<Selector> = Lazy::new(|| static_selector("th, td"));

/// `[1]`, `[a]`, `[note 3]` citation markers left in cell text.
static CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\[\]]+\]").unwrap_or_else(|e| panic!("invalid citation regex: {e}"))
});

/// Column indices for one table, located by header text.
#[derive(Debug, Clone, Copy)]
struct Columns {
    model: usize,
    production: Option<usize>,
    engine: Option<usize>,
    top_speed: Option<usize>,
}

impl Columns {
    /// Locate columns in a lowercased header row. Requires a model/name
    /// column and at least one attribute column; otherwise the table is
    /// not a spec table and gets skipped.
    fn locate(headers: &[String]) -> Option<Self> {
        let find = |needle: &str| headers.iter().position(|h| h.contains(needle));

        let model = find("model").or_else(|| find("name"))?;
        let production = find("production").or_else(|| find("duration"));
        let engine = find("engine");
        let top_speed = find("top speed").or_else(|| find("speed"));

        if production.is_none() && engine.is_none() && top_speed.is_none() {
            return None;
        }

        Some(Self {
            model,
            production,
            engine,
            top_speed,
        })
    }
}

/// Visible text of one cell, with citation markers stripped and
/// whitespace collapsed.
fn cell_text(cell: &ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    let cleaned = CITATION.replace_all(&raw, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A cleaned cell value, or `None` for empty and placeholder cells.
fn cell_value(cells: &[String], index: Option<usize>) -> Option<String> {
    let text = cells.get(index?)?;
    if text.is_empty() || matches!(text.as_str(), "-" | "—" | "–" | "N/A" | "n/a" | "TBA") {
        return None;
    }
    Some(text.clone())
}

/// Scrape every recognizable spec table in `html` into one book.
///
/// Model cells listing variants separated by `/` register each variant
/// under its own key with the row's values. When a key appears in more
/// than one table, the first occurrence wins; the page's primary table
/// precedes the appendix tables.
#[must_use]
pub fn scrape_spec_book(html: &str) -> SpecBook {
    let document = Html::parse_document(html);
    let mut book = SpecBook::new();

    for (table_index, table) in document.select(&TABLE).enumerate() {
        let mut rows = table.select(&ROW);

        let Some(header_row) = rows.next() else {
            debug!("Table {}: empty, skipping", table_index);
            continue;
        };

        let headers: Vec<String> = header_row
            .select(&CELL)
            .map(|cell| cell_text(&cell).to_lowercase())
            .collect();

        let Some(columns) = Columns::locate(&headers) else {
            debug!(
                "Table {}: headers {:?} lack a model or attribute column, skipping",
                table_index, headers
            );
            continue;
        };

        let mut scraped = 0_usize;
        for row in rows {
            let cells: Vec<String> = row.select(&CELL).map(|cell| cell_text(&cell)).collect();

            let Some(model_cell) = cells.get(columns.model) else {
                continue; // short row, likely a spanning section header
            };
            if model_cell.is_empty() {
                continue;
            }

            let production = cell_value(&cells, columns.production);
            let engine = cell_value(&cells, columns.engine);
            let top_speed = cell_value(&cells, columns.top_speed);

            for variant in model_cell.split('/') {
                let name = variant.trim();
                if name.is_empty() {
                    continue;
                }
                if book.contains(name) {
                    debug!("Duplicate model key '{}', keeping first occurrence", name);
                    continue;
                }
                let mut record = ModelRecord::new(name);
                record.production.clone_from(&production);
                record.engine.clone_from(&engine);
                record.top_speed.clone_from(&top_speed);
                book.insert(name, record);
                scraped += 1;
            }
        }

        debug!("Table {}: scraped {} model entries", table_index, scraped);
    }

    info!("Scraped {} model records", book.len());
    book
}
