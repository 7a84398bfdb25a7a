use std::collections::HashMap;

use crate::error::{MonitorError, Result};

/// One data line keyed by header name.
pub type RawRow = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// The Meta export is not strict CSV. Each line picks its own delimiter:
/// semicolon when the line contains one, comma otherwise. Cells carry at most
/// one pair of surrounding double quotes; embedded delimiters inside quoted
/// fields are not supported.
fn split_line(line: &str) -> Vec<String> {
    let separator = if line.contains(';') { ';' } else { ',' };
    line.split(separator)
        .map(|cell| strip_quotes(cell.trim()).to_string())
        .collect()
}

fn strip_quotes(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}

fn parse_lines(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(split_line)
        .collect()
}

// ---------------------------------------------------------------------------
// parse_table
// ---------------------------------------------------------------------------

/// Parse raw export text into the header row plus data rows zipped against it
/// by position. A row shorter than the header list yields empty strings for
/// the missing trailing columns; a longer row drops its extra cells.
pub fn parse_table(text: &str) -> Result<(Vec<String>, Vec<RawRow>)> {
    let mut lines = parse_lines(text).into_iter();
    let headers = lines.next().ok_or(MonitorError::EmptyCsv)?;
    let rows = lines
        .map(|cells| {
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect();
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_comma() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_semicolon_wins_over_comma() {
        // A line containing any semicolon splits on semicolons only.
        assert_eq!(split_line("a;b,c;d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_cells_are_trimmed_and_unquoted() {
        assert_eq!(split_line(r#" "a" , b ,"c d""#), vec!["a", "b", "c d"]);
    }

    #[test]
    fn test_single_stray_quote_is_stripped() {
        assert_eq!(split_line(r#""a,b""#), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_table_zips_headers() {
        let (headers, rows) = parse_table("x,y\n1,2\n3,4").unwrap();
        assert_eq!(headers, vec!["x", "y"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["x"], "1");
        assert_eq!(rows[1]["y"], "4");
    }

    #[test]
    fn test_short_row_pads_with_empty_strings() {
        let (_, rows) = parse_table("x,y,z\n1,2").unwrap();
        assert_eq!(rows[0]["z"], "");
    }

    #[test]
    fn test_long_row_drops_extra_cells() {
        let (_, rows) = parse_table("x,y\n1,2,3,4").unwrap();
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (_, rows) = parse_table("x,y\n\n  \n1,2\n\n").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (headers, rows) = parse_table("x,y\r\n1,2\r\n").unwrap();
        assert_eq!(headers, vec!["x", "y"]);
        assert_eq!(rows[0]["y"], "2");
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert!(matches!(
            parse_table("  \n \n").unwrap_err(),
            MonitorError::EmptyCsv
        ));
        assert!(matches!(parse_table("").unwrap_err(), MonitorError::EmptyCsv));
    }

    #[test]
    fn test_mixed_delimiters_across_lines() {
        // Per-line detection: each line is split independently.
        let (headers, rows) = parse_table("a;b;c\n1,2,3").unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["c"], "3");
    }
}
