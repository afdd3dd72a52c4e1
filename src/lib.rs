//! Football match analysis
//!
//! Reads delimited match results and reports simple per-team statistics.

pub mod analysis;
pub mod data;
pub mod report;
pub mod summary;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Outcome of a match as encoded in the source data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    HomeWin,
    AwayWin,
    Draw,
    /// Any source code outside `H`/`A`/`D`, carried through uninterpreted
    Unrecognized(String),
}

impl MatchResult {
    /// Map a raw source code to a result. Total: unknown codes are kept,
    /// not rejected, and never satisfy a win condition downstream.
    pub fn from_code(code: &str) -> Self {
        match code {
            "H" => MatchResult::HomeWin,
            "A" => MatchResult::AwayWin,
            "D" => MatchResult::Draw,
            other => MatchResult::Unrecognized(other.to_string()),
        }
    }

    /// The source encoding of this result
    pub fn code(&self) -> &str {
        match self {
            MatchResult::HomeWin => "H",
            MatchResult::AwayWin => "A",
            MatchResult::Draw => "D",
            MatchResult::Unrecognized(code) => code,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single match record parsed from one source row
///
/// Field order mirrors the source columns. Malformed input never aborts the
/// parse; it lands here as a sentinel (`None` date or goal count, an
/// `Unrecognized` result code) and flows through the analyses unremarked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: Option<NaiveDate>,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: Option<i64>,
    pub away_goals: Option<i64>,
    pub result: MatchResult,
    pub note: String,
}

impl MatchRecord {
    /// Check whether the named team won this match, home or away.
    /// Team matching is exact and case sensitive. A record contributes at
    /// most one win even if the same name fills both team fields.
    pub fn is_win_for(&self, team: &str) -> bool {
        if self.home_team == team && self.result == MatchResult::HomeWin {
            true
        } else {
            self.away_team == team && self.result == MatchResult::AwayWin
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum FootyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FootyError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path of the delimited results file
    pub input_path: String,
    /// Team the win count is computed for
    pub team: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// HTML report destination, resolved against the working directory
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                input_path: "football.csv".to_string(),
                team: "Man United".to_string(),
            },
            report: ReportConfig {
                output_path: "reportOutput/report.html".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FootyError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| FootyError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FootyError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
