//! Win counting for a single team

use crate::analysis::Analyzer;
use crate::MatchRecord;

/// Counts the matches a named team won, home or away
pub struct WinAnalysis {
    team: String,
}

impl WinAnalysis {
    pub fn new<S: Into<String>>(team: S) -> Self {
        WinAnalysis { team: team.into() }
    }
}

impl Analyzer for WinAnalysis {
    fn run(&self, matches: &[MatchRecord]) -> String {
        let wins = matches.iter().filter(|m| m.is_win_for(&self.team)).count();
        format!("{} won {} games", self.team, wins)
    }
}
