//! extractor.rs - Collects distinct taxonomy values from a product export.
//!
//! The export is a CSV file with a header row. For every configured column,
//! each cell is split on commas, every piece is trimmed, empty pieces are
//! discarded and the rest is accumulated into a per-attribute set of unique
//! raw values. The input is read once, top to bottom.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::config::AttributeMapping;
use crate::errors::{BoostRulesError, Result};

/// Unique raw values observed for one taxonomy attribute.
///
/// Values are kept in first-seen order; [`AttributeValues::sorted`] gives the
/// lexicographic order used for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeValues {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl AttributeValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning `false` if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.ordered.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Values in the order they first appeared in the input.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Values in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.iter().collect();
        values.sort_unstable();
        values
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut values = AttributeValues::new();
        for v in iter {
            values.insert(v);
        }
        values
    }
}

/// Result of scanning an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedValues {
    /// Number of data rows read (header excluded).
    pub rows: u64,
    /// Taxonomy identifier -> unique raw values. Every configured taxonomy has an entry.
    pub attributes: BTreeMap<String, AttributeValues>,
    /// Configured columns that were not present in the header.
    pub missing_columns: Vec<String>,
}

impl ExtractedValues {
    /// Values for a taxonomy, if it was configured.
    pub fn values(&self, taxonomy: &str) -> Option<&AttributeValues> {
        self.attributes.get(taxonomy)
    }
}

/// Splits one cell into trimmed, non-empty pieces.
pub fn split_cell(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').map(str::trim).filter(|piece| !piece.is_empty())
}

/// Opens the export file, telling a missing file apart from other failures.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BoostRulesError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => BoostRulesError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Scans every row of `reader` and collects the unique values of each mapped column.
///
/// With `flexible_rows` a short row simply has no value for the columns it
/// lacks and extra trailing fields are ignored. Otherwise a row whose field
/// count differs from the header is reported as [`BoostRulesError::MalformedRow`].
pub fn extract_values<R: Read>(
    reader: R,
    mappings: &[AttributeMapping],
    flexible_rows: bool,
) -> Result<ExtractedValues> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(flexible_rows)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(BoostRulesError::from_csv)?.clone();
    debug!("Export header has {} columns.", headers.len());

    let mut extracted = ExtractedValues::default();
    let mut targets: Vec<(usize, &str)> = Vec::with_capacity(mappings.len());

    for mapping in mappings {
        extracted
            .attributes
            .entry(mapping.taxonomy.clone())
            .or_default();

        // A repeated header name resolves to its last occurrence.
        let position = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == mapping.column)
            .map(|(i, _)| i)
            .last();
        match position {
            Some(index) => {
                debug!("Column '{}' found at index {}.", mapping.column, index);
                targets.push((index, mapping.taxonomy.as_str()));
            }
            None => {
                warn!("Column '{}' is not present in the export header.", mapping.column);
                extracted.missing_columns.push(mapping.column.clone());
            }
        }
    }

    let mut record = csv::StringRecord::new();
    while csv_reader
        .read_record(&mut record)
        .map_err(BoostRulesError::from_csv)?
    {
        extracted.rows += 1;
        for &(index, taxonomy) in &targets {
            let Some(cell) = record.get(index) else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            if let Some(values) = extracted.attributes.get_mut(taxonomy) {
                for piece in split_cell(cell) {
                    values.insert(piece);
                }
            }
        }
    }

    info!(
        "Read {} rows; distinct values: {}",
        extracted.rows,
        extracted
            .attributes
            .iter()
            .map(|(taxonomy, values)| format!("{}={}", taxonomy, values.len()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    fn default_mappings() -> Vec<AttributeMapping> {
        GeneratorConfig::default().attributes
    }

    #[test]
    fn split_cell_trims_and_drops_empty_pieces() {
        let pieces: Vec<&str> = split_cell(" A, B ,,  ,C ").collect();
        assert_eq!(pieces, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicates_across_rows_collapse() {
        let csv = "ID,attribute:pa_manufacturer\n1,\"A, B\"\n2,A\n";
        let extracted = extract_values(csv.as_bytes(), &default_mappings(), false).unwrap();
        let makers = extracted.values("pa_manufacturer").unwrap();
        assert_eq!(extracted.rows, 2);
        assert_eq!(makers.len(), 2);
        assert!(makers.contains("A"));
        assert!(makers.contains("B"));
    }

    #[test]
    fn missing_columns_are_reported_and_empty() {
        let csv = "ID,attribute:pa_manufacturer\n1,Acme\n";
        let extracted = extract_values(csv.as_bytes(), &default_mappings(), false).unwrap();
        assert_eq!(
            extracted.missing_columns,
            vec![
                "attribute:pa_caliber-gauge".to_string(),
                "attribute:pa_brand-fit".to_string(),
                "attribute:pa_model-fit".to_string(),
            ]
        );
        assert!(extracted.values("pa_caliber-gauge").unwrap().is_empty());
        assert_eq!(extracted.attributes.len(), 4);
    }

    #[test]
    fn unused_attributes_are_still_extracted() {
        let csv = "attribute:pa_brand-fit,attribute:pa_model-fit\n\"Glock, Sig\",G19\n";
        let extracted = extract_values(csv.as_bytes(), &default_mappings(), false).unwrap();
        assert_eq!(extracted.values("pa_brand-fit").unwrap().sorted(), vec!["Glock", "Sig"]);
        assert_eq!(extracted.values("pa_model-fit").unwrap().sorted(), vec!["G19"]);
    }

    #[test]
    fn ragged_rows_are_read_when_flexible() {
        let csv = "ID,attribute:pa_manufacturer,attribute:pa_caliber-gauge\n\
                   1,Acme Corp,9mm\n\
                   2,Beta\n\
                   3,Gamma,12 Gauge,extra\n";
        let extracted = extract_values(csv.as_bytes(), &default_mappings(), true).unwrap();
        assert_eq!(extracted.rows, 3);
        assert_eq!(
            extracted.values("pa_manufacturer").unwrap().sorted(),
            vec!["Acme Corp", "Beta", "Gamma"]
        );
        assert_eq!(
            extracted.values("pa_caliber-gauge").unwrap().sorted(),
            vec!["12 Gauge", "9mm"]
        );
    }

    #[test]
    fn ragged_row_is_malformed_in_strict_mode() {
        let csv = "ID,attribute:pa_manufacturer\n1,Acme\n2\n";
        match extract_values(csv.as_bytes(), &default_mappings(), false) {
            Err(BoostRulesError::MalformedRow { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn repeated_header_uses_last_column() {
        let csv = "attribute:pa_manufacturer,ID,attribute:pa_manufacturer\n\
                   Ignored Co,1,Acme Corp\n";
        let extracted = extract_values(csv.as_bytes(), &default_mappings(), true).unwrap();
        let makers = extracted.values("pa_manufacturer").unwrap();
        assert_eq!(makers.sorted(), vec!["Acme Corp"]);
        assert!(!makers.contains("Ignored Co"));
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let extracted = extract_values("".as_bytes(), &default_mappings(), false).unwrap();
        assert_eq!(extracted.rows, 0);
        assert_eq!(extracted.missing_columns.len(), 4);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let values: AttributeValues = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(values.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(values.sorted(), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = open_input(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, BoostRulesError::InputNotFound { .. }));
    }
}
