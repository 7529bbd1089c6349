pub type CsvRow = Vec<String>;

/// Splits `text` into rows of fields.
///
/// Quote-aware: `"` toggles quoting, `""` inside quotes is a literal quote,
/// and separators/newlines inside quotes are kept in the field. `\r`, `\n`
/// and `\r\n` all end a row. Rows whose fields are all blank are dropped.
/// Never fails; an unterminated quote just runs to the end of input.
pub fn parse(text: &str) -> Vec<CsvRow> {
    let mut rows: Vec<CsvRow> = Vec::new();
    let mut row: CsvRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    row.push(field);
    push_row(&mut rows, row);

    rows
}

fn push_row(rows: &mut Vec<CsvRow>, row: CsvRow) {
    if row.iter().any(|f| !f.trim().is_empty()) {
        rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(expected: &[&[&str]]) -> Vec<CsvRow> {
        expected
            .iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn quoted_separator_and_blank_lines() {
        assert_eq!(parse("a,b\n\"c,d\",e\n\n"), rows(&[&["a", "b"], &["c,d", "e"]]));
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(parse("a,\"b\"\"c\""), rows(&[&["a", "b\"c"]]));
    }

    #[test]
    fn crlf_is_a_single_terminator() {
        assert_eq!(parse("a,b\r\nc,d\r\n"), rows(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn lone_cr_ends_a_row() {
        assert_eq!(parse("a\rb"), rows(&[&["a"], &["b"]]));
    }

    #[test]
    fn newline_inside_quotes_stays_in_field() {
        assert_eq!(parse("\"line1\nline2\",x"), rows(&[&["line1\nline2", "x"]]));
    }

    #[test]
    fn whitespace_only_rows_are_dropped() {
        assert_eq!(parse("a\n  ,  \n\nb"), rows(&[&["a"], &["b"]]));
    }

    #[test]
    fn fields_are_not_trimmed() {
        assert_eq!(parse(" a , b "), rows(&[&[" a ", " b "]]));
    }

    #[test]
    fn unterminated_quote_runs_to_eof() {
        assert_eq!(parse("a,\"b,c\nd"), rows(&[&["a", "b,c\nd"]]));
    }

    #[test]
    fn empty_fields_between_separators_are_kept() {
        assert_eq!(parse("a,,c"), rows(&[&["a", "", "c"]]));
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse("").is_empty());
        assert!(parse("\n\r\n").is_empty());
    }
}
