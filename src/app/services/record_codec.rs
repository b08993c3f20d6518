//! Tab-delimited record codec
//!
//! Every stage artifact except the export stores entries as one line per
//! record with 13 positional, tab-separated cells. Decoding is lenient:
//! short rows, empty cells and unparsable numbers all become `None` so that
//! a malformed row is kept rather than dropped.
//!
//! Encoding is the structural inverse for text cells. Numeric cells are
//! re-rendered from their parsed value, so `47.84150` in a source file is
//! written back as `47.8415`; that formatting difference is the one place
//! a decode/encode cycle does not reproduce its input byte for byte.

use crate::app::models::{EntryRecord, FieldValue};
use crate::constants::{FIELD_COUNT, FIELD_DELIMITER, RECORD_DELIMITER};

/// Decode artifact content into entry records
pub fn decode(content: &str) -> Vec<EntryRecord> {
    content
        .split(RECORD_DELIMITER)
        .map(|line| line.trim_matches(|c| c == ' ' || c == '\r'))
        .filter(|line| !line.is_empty())
        .map(decode_line)
        .collect()
}

/// Decode a single non-empty line
pub fn decode_line(line: &str) -> EntryRecord {
    let mut cells = line.split(FIELD_DELIMITER).map(str::trim);
    let mut next = || cells.next().filter(|cell| !cell.is_empty());

    let country_code = next().unwrap_or_default().to_string();
    let postal_code = next().unwrap_or_default().to_string();
    let municipality = next().map(str::to_string);
    let admin_name_1 = next().map(str::to_string);
    let admin_code_1 = next().map(str::to_string);
    let admin_name_2 = next().map(str::to_string);
    let admin_code_2 = next().map(str::to_string);
    let admin_name_3 = next().map(str::to_string);
    let admin_code_3 = next().map(str::to_string);
    let latitude = next().and_then(parse_coordinate);
    let longitude = next().and_then(parse_coordinate);
    let accuracy = next().and_then(parse_accuracy);
    let region_code = next().map(str::to_string);

    // Coordinates only make sense as a pair
    let (latitude, longitude) = match (latitude, longitude) {
        (Some(lat), Some(lon)) => (Some(lat), Some(lon)),
        _ => (None, None),
    };

    EntryRecord {
        country_code,
        postal_code,
        municipality,
        admin_name_1,
        admin_code_1,
        admin_name_2,
        admin_code_2,
        admin_name_3,
        admin_code_3,
        latitude,
        longitude,
        accuracy,
        region_code,
    }
}

fn parse_coordinate(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_accuracy(cell: &str) -> Option<i32> {
    cell.parse::<i32>().ok().or_else(|| {
        cell.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .map(|value| value as i32)
    })
}

/// Encode entry records into artifact content
pub fn encode(records: &[EntryRecord]) -> String {
    records
        .iter()
        .map(encode_line)
        .collect::<Vec<_>>()
        .join(&RECORD_DELIMITER.to_string())
}

/// Encode a single record as one line without a trailing delimiter
pub fn encode_line(record: &EntryRecord) -> String {
    let mut cells: Vec<String> = Vec::with_capacity(FIELD_COUNT);
    for field in record.fields() {
        let cell = match field {
            FieldValue::Text(value) => value.map(sanitize).unwrap_or_default(),
            FieldValue::Float(value) => value.map(|v| v.to_string()).unwrap_or_default(),
            FieldValue::Integer(value) => value.map(|v| v.to_string()).unwrap_or_default(),
        };
        cells.push(cell);
    }
    cells.join(&FIELD_DELIMITER.to_string())
}

/// Delimiters inside a value would shift every following cell
fn sanitize(value: &str) -> String {
    value.replace([FIELD_DELIMITER, RECORD_DELIMITER, '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::AdminLevel;

    #[test]
    fn test_decode_short_row() {
        let records = decode("AT\t7000\t\t\t01\t\t\t\t\t\t\t\t");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.country_code, "AT");
        assert_eq!(record.postal_code, "7000");
        assert_eq!(record.municipality, None);
        assert_eq!(record.admin_name_1, None);
        assert_eq!(record.admin_code_1.as_deref(), Some("01"));
        assert_eq!(record.admin_name_2, None);
        assert_eq!(record.latitude, None);
        assert_eq!(record.accuracy, None);
        assert_eq!(record.region_code, None);
    }

    #[test]
    fn test_decode_missing_trailing_cells() {
        let record = decode_line("DE\t10115\tBerlin");
        assert_eq!(record.municipality.as_deref(), Some("Berlin"));
        assert_eq!(record.admin_name_1, None);
        assert_eq!(record.region_code, None);
    }

    #[test]
    fn test_decode_full_geonames_row() {
        let line = "AT\t7000\tEisenstadt\tBurgenland\t01\tEisenstadt\t101\tEisenstadt\t10101\t47.8456\t16.5232\t4";
        let record = decode_line(line);
        assert_eq!(record.admin_name_1.as_deref(), Some("Burgenland"));
        assert_eq!(record.admin_code_3.as_deref(), Some("10101"));
        assert_eq!(record.latitude, Some(47.8456));
        assert_eq!(record.longitude, Some(16.5232));
        assert_eq!(record.accuracy, Some(4));
        assert_eq!(record.region_code, None);
    }

    #[test]
    fn test_decode_skips_blank_lines_and_carriage_returns() {
        let records = decode("AT\t1010\r\n\n   \nAT\t1020\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].postal_code, "1010");
        assert_eq!(records[1].postal_code, "1020");
    }

    #[test]
    fn test_decode_leading_empty_cell_keeps_alignment() {
        let record = decode_line("\t1010\tWien");
        assert_eq!(record.country_code, "");
        assert_eq!(record.postal_code, "1010");
        assert_eq!(record.municipality.as_deref(), Some("Wien"));
    }

    #[test]
    fn test_decode_unparsable_numbers_become_none() {
        let record = decode_line("AT\t1010\t\t\t\t\t\t\t\tnorth\t16.37\tx");
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
        assert_eq!(record.accuracy, None);
    }

    #[test]
    fn test_decode_integral_float_accuracy() {
        let record = decode_line("AT\t1010\t\t\t\t\t\t\t\t48.2\t16.37\t4.0");
        assert_eq!(record.accuracy, Some(4));
    }

    #[test]
    fn test_encode_writes_empty_cells_for_none() {
        let record = EntryRecord::new("AT", "7000").with_admin(AdminLevel::One, None, Some("01"));
        assert_eq!(encode_line(&record), "AT\t7000\t\t\t01\t\t\t\t\t\t\t\t");
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let records = vec![
            EntryRecord::new("AT", "7000")
                .with_municipality("Eisenstadt")
                .with_admin(AdminLevel::One, Some("Burgenland"), Some("01"))
                .with_coordinates(47.8456, 16.5232)
                .with_region_code("1"),
            EntryRecord::new("SM", "47890").with_municipality("San Marino"),
        ];

        assert_eq!(decode(&encode(&records)), records);
    }

    #[test]
    fn test_encode_replaces_embedded_delimiters() {
        let record = EntryRecord::new("FR", "75001").with_municipality("Paris\t1er");
        let line = encode_line(&record);
        assert_eq!(line.split('\t').count(), FIELD_COUNT);
        assert_eq!(decode_line(&line).municipality.as_deref(), Some("Paris 1er"));
    }

    #[test]
    fn test_float_formatting_is_normalized() {
        let record = decode_line("AT\t1010\t\t\t\t\t\t\t\t47.84150\t16.00\t");
        let line = encode_line(&record);
        assert!(line.contains("47.8415\t16\t"));
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").is_empty());
    }
}
