//! US substance registry loading.
//!
//! The registry export opens with a fixed block of title and notes lines
//! that is not part of the table. The header row follows it. Column order
//! is not fixed, so columns are resolved by name.

use std::path::Path;

use csv::StringRecord;

use additives_model::{MAX_SYNONYMS, UsSubstance};

use crate::encoding::{SourceEncoding, read_text, skip_preamble};
use crate::error::{IngestError, Result};
use crate::schema;

/// Number of non-tabular lines before the header row of the US registry.
pub const US_PREAMBLE_LINES: usize = 4;

/// Loads the US substance registry, discarding `preamble_lines` leading lines.
pub fn load_us_substances(path: &Path, preamble_lines: usize) -> Result<Vec<UsSubstance>> {
    let text = read_text(path, SourceEncoding::Latin1)?;
    let substances = parse_us_substances(&text, preamble_lines, path)?;

    let prohibited = substances.iter().filter(|s| s.is_prohibited()).count();
    tracing::info!(
        path = %path.display(),
        records = substances.len(),
        prohibited,
        "Loaded US substance records"
    );
    Ok(substances)
}

/// Parses decoded registry text. `path` is used for error context only.
pub fn parse_us_substances(
    text: &str,
    preamble_lines: usize,
    path: &Path,
) -> Result<Vec<UsSubstance>> {
    let table = skip_preamble(text, preamble_lines).map_err(|found| {
        IngestError::TruncatedPreamble {
            path: path.to_path_buf(),
            expected: preamble_lines,
            found,
        }
    })?;

    let csv_error = |source: csv::Error| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(table.as_bytes());
    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = UsColumns::resolve(&headers, path)?;

    tracing::debug!(
        columns = headers.len(),
        synonym_columns = columns.synonyms.len(),
        has_other_names = columns.other_names.is_some(),
        "Resolved US registry columns"
    );

    let mut substances = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        substances.push(columns.extract(&record));
    }
    Ok(substances)
}

/// Column positions in the registry header.
struct UsColumns {
    substance: usize,
    other_names: Option<usize>,
    cas_number: usize,
    prohibited: usize,
    /// Positions of the synonym columns present, in `SYN01`.. order.
    synonyms: Vec<usize>,
}

impl UsColumns {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        for column in schema::us::REQUIRED {
            if header_index(headers, column).is_none() {
                return Err(IngestError::MissingColumn {
                    column: (*column).to_string(),
                    path: path.to_path_buf(),
                });
            }
        }

        let required = |name: &str| header_index(headers, name).unwrap_or_default();
        let synonyms = (1..=MAX_SYNONYMS)
            .filter_map(|i| header_index(headers, &schema::us::synonym(i)))
            .collect();

        Ok(Self {
            substance: required(schema::us::SUBSTANCE),
            other_names: header_index(headers, schema::us::OTHER_NAMES),
            cas_number: required(schema::us::CAS_NUMBER),
            prohibited: required(schema::us::PROHIBITED),
            synonyms,
        })
    }

    fn extract(&self, record: &StringRecord) -> UsSubstance {
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        UsSubstance {
            substance: field(self.substance),
            other_names: self.other_names.map(field),
            synonyms: self.synonyms.iter().map(|idx| field(*idx)).collect(),
            cas_number: field(self.cas_number),
            prohibited_flag: field(self.prohibited),
        }
    }
}

fn header_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = "Indirect Additives used in Food Contact Substances\n\
                            Generated 2024-01-01\n\
                            \n\
                            Notes: see 21 CFR\n";

    fn parse(table: &str) -> Result<Vec<UsSubstance>> {
        let text = format!("{PREAMBLE}{table}");
        parse_us_substances(&text, US_PREAMBLE_LINES, Path::new("us.csv"))
    }

    #[test]
    fn test_parse_minimal_registry() {
        let substances = parse(
            "Substance,CAS Registry No. (or other ID),Reg prohibited189\n\
             Sodium Benzoate,532-32-1,X\n\
             Curcumin,458-37-7,\n",
        )
        .unwrap();

        assert_eq!(substances.len(), 2);
        assert_eq!(substances[0].substance, "Sodium Benzoate");
        assert_eq!(substances[0].cas_number, "532-32-1");
        assert!(substances[0].is_prohibited());
        assert!(!substances[1].is_prohibited());
        assert!(substances[1].other_names.is_none());
        assert!(substances[1].synonyms.is_empty());
    }

    #[test]
    fn test_parse_synonyms_and_other_names() {
        let substances = parse(
            "Substance,Other Names,SYN01,SYN02,SYN03,CAS Registry No. (or other ID),Reg prohibited189\n\
             Curcumin,\"Turmeric yellow, natural\",CI 75300,,Diferuloylmethane,458-37-7,\n",
        )
        .unwrap();

        let curcumin = &substances[0];
        assert_eq!(
            curcumin.other_names.as_deref(),
            Some("Turmeric yellow, natural")
        );
        assert_eq!(curcumin.synonyms, vec!["CI 75300", "", "Diferuloylmethane"]);
    }

    #[test]
    fn test_parse_columns_in_any_order() {
        let substances = parse(
            "Reg prohibited189,CAS Registry No. (or other ID),SYN02,Substance\n\
             ,64-17-5,Alcohol,Ethanol\n",
        )
        .unwrap();

        assert_eq!(substances[0].substance, "Ethanol");
        assert_eq!(substances[0].synonyms, vec!["Alcohol"]);
    }

    #[test]
    fn test_parse_missing_required_column() {
        let result = parse("Substance,Reg prohibited189\nEthanol,\n");
        match result {
            Err(IngestError::MissingColumn { column, .. }) => {
                assert_eq!(column, "CAS Registry No. (or other ID)");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ragged_row_is_fatal() {
        let result = parse(
            "Substance,CAS Registry No. (or other ID),Reg prohibited189\n\
             Ethanol,64-17-5\n",
        );
        assert!(matches!(result, Err(IngestError::CsvRead { .. })));
    }

    #[test]
    fn test_parse_truncated_preamble() {
        let result = parse_us_substances("only\ntwo lines\n", US_PREAMBLE_LINES, Path::new("us.csv"));
        assert!(matches!(
            result,
            Err(IngestError::TruncatedPreamble {
                expected: 4,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_header_only() {
        let substances =
            parse("Substance,CAS Registry No. (or other ID),Reg prohibited189\n").unwrap();
        assert!(substances.is_empty());
    }
}
