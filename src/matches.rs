use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full-time outcome from the tracked team's point of view.
///
/// Stored alongside the scores in the log file; it is always derived from
/// them at entry time, so the analytics never re-checks the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    pub fn from_scores(team_score: u32, opponent_score: u32) -> Self {
        if team_score > opponent_score {
            MatchResult::Win
        } else if team_score < opponent_score {
            MatchResult::Loss
        } else {
            MatchResult::Draw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    Starter,
    Substitute,
    Goalkeeper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    Yellow,
    Red,
}

/// One player's line in a match sheet. Lines are informational; they are not
/// required to sum to the team score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLine {
    pub name: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub minutes_played: u32,
    pub role: PlayerRole,
    #[serde(default)]
    pub card: Option<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub date: NaiveDate,
    pub result: MatchResult,
    pub team_score: u32,
    pub opponent_score: u32,
    /// The tracked individual's contribution in this match.
    #[serde(default)]
    pub my_goals: u32,
    #[serde(default)]
    pub my_assists: u32,
    #[serde(default)]
    pub players: Vec<PlayerLine>,
    #[serde(default)]
    pub opponent_players: Vec<PlayerLine>,
    #[serde(default)]
    pub tournament: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Match {
    /// Minimal entry: result is derived from the scoreline.
    pub fn from_scoreline(id: &str, date: NaiveDate, team_score: u32, opponent_score: u32) -> Self {
        Self {
            id: id.to_string(),
            date,
            result: MatchResult::from_scores(team_score, opponent_score),
            team_score,
            opponent_score,
            my_goals: 0,
            my_assists: 0,
            players: Vec::new(),
            opponent_players: Vec::new(),
            tournament: None,
            notes: None,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.team_score as i64 - self.opponent_score as i64
    }

    /// Goals plus assists by the tracked individual.
    pub fn contribution(&self) -> u32 {
        self.my_goals + self.my_assists
    }

    pub fn clean_sheet(&self) -> bool {
        self.opponent_score == 0
    }
}

/// Oldest first. Sorts borrowed refs so the caller's slice order is untouched.
/// The sort is stable: matches sharing a date keep their input order.
pub fn chronological(matches: &[Match]) -> Vec<&Match> {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|m| m.date);
    ordered
}

/// Most recent first, same non-mutating contract as [`chronological`].
pub fn most_recent_first(matches: &[Match]) -> Vec<&Match> {
    let mut ordered = chronological(matches);
    ordered.reverse();
    ordered
}
