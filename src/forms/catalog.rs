use std::io::Read;
use std::path::Path;

use csv::{StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::catalog::CatalogSeedEntry;
use crate::domain::product::NewProduct;

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum allowed length for a category name.
const CATEGORY_MAX_LEN: u64 = 64;

/// ISO 4217 currency codes are three ASCII alphabetic characters.
const CURRENCY_CODE_LEN: u64 = 3;

/// Separator used inside the `images` and `sizes` columns.
const LIST_SEPARATOR: char = '|';

const REQUIRED_HEADERS: [&str; 4] = ["name", "category", "price", "currency"];

/// Result type returned by the catalog upload helpers.
pub type CatalogFormResult<T> = Result<T, CatalogFormError>;

/// Errors that can occur while reading a catalog seed file.
#[derive(Debug, Error)]
pub enum CatalogFormError {
    /// The file is missing one or more required columns.
    #[error("upload is missing required headers: {}", .missing.join(", "))]
    MissingRequiredHeaders { missing: Vec<&'static str> },
    /// A row failed field validation.
    #[error("row {row} is invalid: {source}")]
    Validation {
        row: usize,
        #[source]
        source: ValidationErrors,
    },
    /// A row has an empty product name after sanitization.
    #[error("row {row} is missing a product name")]
    MissingName { row: usize },
    /// A row has an unparseable price.
    #[error("row {row} has invalid price `{value}`")]
    InvalidPrice { row: usize, value: String },
    /// A row has a currency code that is not three letters.
    #[error("row {row} has invalid currency `{value}`")]
    InvalidCurrency { row: usize, value: String },
    /// A row has a negative stock count.
    #[error("row {row} has negative stock")]
    NegativeStock { row: usize },
    /// The file did not contain any product rows.
    #[error("upload contains no products")]
    EmptyUpload,
    /// CSV parsing failures.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize, Validate)]
struct CatalogCsvRow {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    name: String,
    #[validate(length(min = 1, max = CATEGORY_MAX_LEN))]
    category: String,
    price: String,
    #[validate(length(equal = CURRENCY_CODE_LEN))]
    currency: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    images: Option<String>,
    #[serde(default)]
    sizes: Option<String>,
    #[serde(default)]
    stock: Option<i32>,
}

/// CSV catalog file used to seed the product tables.
///
/// Columns (case-insensitive): `name`, `category`, `price`, `currency`, and the
/// optional `description`, `images`, `sizes`, `stock`. `images` and `sizes`
/// hold `|`-separated lists.
#[derive(Debug)]
pub struct CatalogUpload {
    bytes: Vec<u8>,
}

impl CatalogUpload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read the whole catalog file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogFormResult<Self> {
        Ok(Self::new(std::fs::read(path)?))
    }

    /// Parse and validate every row into seed entries.
    pub fn into_seed_entries(self) -> CatalogFormResult<Vec<CatalogSeedEntry>> {
        parse_catalog(self.bytes.as_slice())
    }
}

fn parse_catalog<R: Read>(reader: R) -> CatalogFormResult<Vec<CatalogSeedEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|header| header.to_ascii_lowercase())
        .collect();

    let missing: Vec<&'static str> = REQUIRED_HEADERS
        .into_iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .collect();
    if !missing.is_empty() {
        return Err(CatalogFormError::MissingRequiredHeaders { missing });
    }

    let mut entries = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let row = index + 2; // account for header row
        let record = record?;
        let parsed: CatalogCsvRow = record.deserialize(Some(&headers))?;
        entries.push(into_seed_entry(parsed, row)?);
    }

    if entries.is_empty() {
        return Err(CatalogFormError::EmptyUpload);
    }

    Ok(entries)
}

fn into_seed_entry(row_data: CatalogCsvRow, row: usize) -> CatalogFormResult<CatalogSeedEntry> {
    row_data
        .validate()
        .map_err(|source| CatalogFormError::Validation { row, source })?;

    let name = sanitize_inline_text(&row_data.name);
    if name.is_empty() {
        return Err(CatalogFormError::MissingName { row });
    }

    let category = sanitize_inline_text(&row_data.category).to_lowercase();

    let price_cents =
        parse_price_cents(&row_data.price).ok_or_else(|| CatalogFormError::InvalidPrice {
            row,
            value: row_data.price.clone(),
        })?;

    let currency = row_data.currency.trim();
    if !currency.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(CatalogFormError::InvalidCurrency {
            row,
            value: currency.to_string(),
        });
    }

    let stock = row_data.stock.unwrap_or_default();
    if stock < 0 {
        return Err(CatalogFormError::NegativeStock { row });
    }

    let mut product = NewProduct::new(name, category, price_cents, currency.to_ascii_uppercase());
    if let Some(description) = row_data
        .description
        .as_deref()
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
    {
        product = product.with_description(description);
    }

    Ok(CatalogSeedEntry {
        product,
        image_urls: split_list(row_data.images.as_deref()),
        sizes: split_list(row_data.sizes.as_deref())
            .into_iter()
            .map(|size| size.to_uppercase())
            .collect(),
        stock,
    })
}

/// Convert a decimal price such as `35`, `35.5` or `35.00` into cents.
fn parse_price_cents(raw: &str) -> Option<i64> {
    let trimmed = raw.trim().trim_start_matches('$');
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if whole.is_empty() || fraction.len() > 2 {
        return None;
    }
    if !whole.chars().all(|ch| ch.is_ascii_digit())
        || !fraction.chars().all(|ch| ch.is_ascii_digit())
    {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(fraction)
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}
