use base64::{engine::general_purpose, Engine as _};
use csv_table::{decode, encode, is_tabular_path, parse_csv, write_csv, CsvError, Table};

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn sample_table() -> Table {
    Table::from_rows(
        cells(&["name", "note"]),
        vec![
            cells(&["Smith, Jane", "says \"hi\""]),
            cells(&["plain", ""]),
            cells(&["multi\nline", "cr\rcell"]),
        ],
    )
    .expect("sample table")
}

#[test]
fn csv_round_trip_preserves_rows() {
    let table = sample_table();
    let text = write_csv(&table);
    assert_eq!(parse_csv(&text).expect("reparse"), table);
}

#[test]
fn codec_round_trip_preserves_rows() {
    let table = sample_table();
    let decoded = decode(&encode(&table), "data.csv").expect("decode");
    assert_eq!(decoded.table, Some(table));
}

#[test]
fn encode_emits_unwrapped_base64_of_valid_utf8() {
    let encoded = encode(&sample_table());
    assert!(!encoded.contains('\n'));
    let bytes = general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .expect("valid base64");
    String::from_utf8(bytes).expect("valid UTF-8");
}

#[test]
fn decode_strips_transfer_whitespace() {
    let encoded = general_purpose::STANDARD.encode("a,b\n1,2\n");
    let wrapped: String = encoded
        .as_bytes()
        .chunks(8)
        .map(|chunk| format!("{}\n", String::from_utf8_lossy(chunk)))
        .collect();

    let decoded = decode(&wrapped, "data.csv").expect("decode wrapped base64");
    assert_eq!(decoded.text, "a,b\n1,2\n");
    let table = decoded.table.expect("tabular content");
    assert_eq!(table.columns(), cells(&["a", "b"]).as_slice());
    assert_eq!(table.rows(), &[cells(&["1", "2"])]);
}

#[test]
fn decode_keeps_non_tabular_paths_opaque() {
    let encoded = general_purpose::STANDARD.encode("# Readme\nnot,a,table\nrag\n");
    let decoded = decode(&encoded, "README.md").expect("decode");
    assert!(decoded.table.is_none());
    assert!(decoded.text.starts_with("# Readme"));
}

#[test]
fn decode_recognizes_extension_case_insensitively() {
    assert!(is_tabular_path("reports/Q3.CSV"));
    assert!(is_tabular_path("data.csv"));
    assert!(!is_tabular_path("data.csv.bak"));
    assert!(!is_tabular_path("notes.txt"));
    assert!(!is_tabular_path("csv"));
}

#[test]
fn decode_rejects_invalid_base64() {
    let error = decode("not/base64!!", "data.csv").expect_err("invalid base64");
    assert!(matches!(error, CsvError::InvalidBase64(_)));
}

#[test]
fn decode_rejects_non_utf8_content() {
    let encoded = general_purpose::STANDARD.encode([0xff, 0xfe, 0x00]);
    let error = decode(&encoded, "data.csv").expect_err("invalid UTF-8");
    assert!(matches!(error, CsvError::InvalidUtf8(_)));
}

#[test]
fn decode_surfaces_ragged_rows_as_parse_error() {
    let encoded = general_purpose::STANDARD.encode("a,b\n1\n");
    let error = decode(&encoded, "data.csv").expect_err("ragged row");
    assert_eq!(
        error,
        CsvError::ColumnCount {
            line: 2,
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn decode_rejects_empty_tabular_content() {
    let error = decode("", "data.csv").expect_err("no header");
    assert_eq!(error, CsvError::EmptyHeader);
}

#[test]
fn single_column_empty_cells_round_trip() {
    let table = Table::from_rows(cells(&["only"]), vec![cells(&[""]), cells(&["x"])])
        .expect("single column table");
    let text = write_csv(&table);
    assert_eq!(parse_csv(&text).expect("reparse"), table);
}
