use crate::error::CsvError;
use crate::table::Table;

/// Parse comma-delimited text with a header row naming the columns.
///
/// Parsing rules:
/// 1) fields may be quoted; `""` inside a quoted field is a literal quote
/// 2) commas, quotes, CR and LF are allowed inside quoted fields
/// 3) records end at LF or CRLF; blank lines carry no record
/// 4) a stray quote inside an unquoted field is taken literally
pub fn parse_csv(input: &str) -> Result<Table, CsvError> {
    let mut records = split_records(input)?.into_iter();

    let Some((_, columns)) = records.next() else {
        return Err(CsvError::EmptyHeader);
    };
    let mut table = Table::new(columns)?;

    for (line, row) in records {
        if row.len() != table.columns().len() {
            return Err(CsvError::ColumnCount {
                line,
                expected: table.columns().len(),
                found: row.len(),
            });
        }
        table.push_row(row)?;
    }

    Ok(table)
}

/// Serialize a table back to comma-delimited text.
///
/// The header keeps the original column order, records are LF-separated
/// with a trailing newline, and fields are quoted only when they contain a
/// comma, quote, CR or LF. `parse_csv(write_csv(t)) == t` for any table.
pub fn write_csv(table: &Table) -> String {
    let mut out = String::new();
    write_record(&mut out, table.columns());
    for row in table.rows() {
        write_record(&mut out, row);
    }
    out
}

fn split_records(input: &str) -> Result<Vec<(usize, Vec<String>)>, CsvError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted_field = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() && !quoted_field => {
                in_quotes = true;
                quoted_field = true;
                quote_line = line;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                quoted_field = false;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                end_record(
                    &mut records,
                    &mut fields,
                    &mut field,
                    &mut quoted_field,
                    record_line,
                );
                record_line = line;
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line: quote_line });
    }
    end_record(
        &mut records,
        &mut fields,
        &mut field,
        &mut quoted_field,
        record_line,
    );

    Ok(records)
}

fn end_record(
    records: &mut Vec<(usize, Vec<String>)>,
    fields: &mut Vec<String>,
    field: &mut String,
    quoted_field: &mut bool,
    record_line: usize,
) {
    if fields.is_empty() && field.is_empty() && !*quoted_field {
        return;
    }
    fields.push(std::mem::take(field));
    records.push((record_line, std::mem::take(fields)));
    *quoted_field = false;
}

fn write_record(out: &mut String, fields: &[String]) {
    // A lone empty field must be quoted or it would read back as a blank line.
    let lone_field = fields.len() == 1;
    for (index, value) in fields.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        write_field(out, value, lone_field);
    }
    out.push('\n');
}

fn write_field(out: &mut String, value: &str, quote_when_empty: bool) {
    let needs_quotes = value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | '\n' | '\r'))
        || (value.is_empty() && quote_when_empty);

    if !needs_quotes {
        out.push_str(value);
        return;
    }

    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::parse_csv;
    use crate::error::CsvError;

    #[test]
    fn parse_reads_quoted_commas_and_escapes() {
        let table = parse_csv("name,note\n\"Smith, Jane\",\"says \"\"hi\"\"\"\n").expect("parse");
        assert_eq!(table.rows()[0][0], "Smith, Jane");
        assert_eq!(table.rows()[0][1], "says \"hi\"");
    }

    #[test]
    fn parse_accepts_crlf_and_blank_lines() {
        let table = parse_csv("a,b\r\n1,2\r\n\r\n3,4\r\n").expect("parse");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn parse_reports_ragged_row_line() {
        let error = parse_csv("a,b\n1,2\n1\n").expect_err("ragged row");
        assert_eq!(
            error,
            CsvError::ColumnCount {
                line: 3,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn parse_reports_unterminated_quote_line() {
        let error = parse_csv("a,b\n\"open,2\n").expect_err("unterminated quote");
        assert_eq!(error, CsvError::UnterminatedQuote { line: 2 });
    }
}
