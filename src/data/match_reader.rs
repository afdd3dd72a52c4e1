//! Conversion of raw rows into typed match records
//!
//! The row mapping is total: malformed fields become sentinel values
//! (`None` dates and goal counts, `Unrecognized` result codes) instead of
//! errors, so bad rows flow through and simply never match a win condition.

use crate::data::{CsvFileReader, RowSource};
use crate::{MatchRecord, MatchResult, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Loads match records from a row source and holds them for analysis
pub struct MatchReader<R> {
    reader: R,
    matches: Vec<MatchRecord>,
}

impl MatchReader<CsvFileReader> {
    /// Reader over a comma-delimited results file
    pub fn from_csv<P: Into<PathBuf>>(path: P) -> Self {
        MatchReader::new(CsvFileReader::new(path))
    }
}

impl<R: RowSource> MatchReader<R> {
    pub fn new(reader: R) -> Self {
        MatchReader {
            reader,
            matches: Vec::new(),
        }
    }

    /// Read the source and map every row, in order
    pub fn load(&mut self) -> Result<()> {
        let rows = self.reader.read()?;
        self.matches = rows.iter().map(|row| map_row(row)).collect();
        log::debug!("Loaded {} match records", self.matches.len());
        Ok(())
    }

    /// The loaded records, in source row order
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }
}

/// Map one raw row to a record. Missing positions read as empty fields,
/// so short rows produce sentinel values rather than a failure.
fn map_row(row: &[String]) -> MatchRecord {
    let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
    MatchRecord {
        date: parse_date(field(0)),
        home_team: field(1).to_string(),
        away_team: field(2).to_string(),
        home_goals: parse_leading_int(field(3)),
        away_goals: parse_leading_int(field(4)),
        result: MatchResult::from_code(field(5)),
        note: field(6).to_string(),
    }
}

/// Parse a `dd/mm/yyyy` date, `None` for anything malformed or impossible
fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('/');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Longest leading integer prefix after optional whitespace and sign,
/// `None` when no digit leads (the not-a-number sentinel)
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse::<i64>().ok().map(|n| sign * n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRows(Vec<Vec<String>>);

    impl RowSource for FixedRows {
        fn read(&self) -> Result<Vec<Vec<String>>> {
            Ok(self.0.clone())
        }
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("01/02/2020"), NaiveDate::from_ymd_opt(2020, 2, 1));
        assert_eq!(parse_date("31/12/1999"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_date("31/02/2020"), None);
        assert_eq!(parse_date("2020-02-01"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int(" 13"), Some(13));
        assert_eq!(parse_leading_int("2 (aet)"), Some(2));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_map_well_formed_row() {
        let record = map_row(&row(&[
            "10/08/2018",
            "Man United",
            "Leicester",
            "2",
            "1",
            "H",
            "E0",
        ]));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2018, 8, 10));
        assert_eq!(record.home_team, "Man United");
        assert_eq!(record.away_team, "Leicester");
        assert_eq!(record.home_goals, Some(2));
        assert_eq!(record.away_goals, Some(1));
        assert_eq!(record.result, MatchResult::HomeWin);
        assert_eq!(record.note, "E0");
    }

    #[test]
    fn test_map_short_row_uses_sentinels() {
        let record = map_row(&row(&["10/08/2018", "Man United"]));
        assert_eq!(record.away_team, "");
        assert_eq!(record.home_goals, None);
        assert_eq!(record.away_goals, None);
        assert_eq!(record.result, MatchResult::Unrecognized(String::new()));
        assert!(!record.is_win_for("Man United"));
    }

    #[test]
    fn test_map_empty_row_does_not_panic() {
        // The row a trailing line terminator produces
        let record = map_row(&row(&[""]));
        assert_eq!(record.date, None);
        assert_eq!(record.home_team, "");
        assert!(!record.is_win_for(""));
    }

    #[test]
    fn test_load_preserves_row_order() {
        let mut reader = MatchReader::new(FixedRows(vec![
            row(&["01/02/2020", "TeamA", "TeamB", "2", "1", "H", "NoteX"]),
            row(&["08/02/2020", "TeamB", "TeamA", "0", "0", "D", "NoteY"]),
        ]));
        reader.load().unwrap();
        let matches = reader.matches();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].home_team, "TeamA");
        assert_eq!(matches[1].result, MatchResult::Draw);
    }
}
