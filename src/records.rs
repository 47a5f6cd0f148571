use serde::{Deserialize, Serialize};

use crate::matches::{Match, MatchResult, chronological};

/// Best value ever observed for one metric, plus how many disjoint
/// occurrences tied it ("equalled the record N times").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub value: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecords {
    pub longest_win_streak: HistoricalRecord,
    pub longest_undefeated_streak: HistoricalRecord,
    pub longest_draw_streak: HistoricalRecord,
    pub longest_loss_streak: HistoricalRecord,
    pub longest_winless_streak: HistoricalRecord,
    pub longest_goal_streak: HistoricalRecord,
    pub longest_assist_streak: HistoricalRecord,
    pub longest_goal_drought: HistoricalRecord,
    pub longest_assist_drought: HistoricalRecord,
    pub longest_clean_sheet_streak: HistoricalRecord,
    pub most_goals_in_match: HistoricalRecord,
    pub most_assists_in_match: HistoricalRecord,
    pub most_goals_for_in_match: HistoricalRecord,
    pub fewest_goals_conceded: HistoricalRecord,
    pub biggest_winning_margin: HistoricalRecord,
}

/// Run-length accumulator for one boolean condition. A match either extends
/// the open run or closes it; closed runs of length > 0 are kept so ties of
/// the eventual maximum can be counted.
#[derive(Debug, Default)]
struct StreakTally {
    open: u32,
    completed: Vec<u32>,
}

impl StreakTally {
    fn step(&mut self, holds: bool) {
        if holds {
            self.open += 1;
        } else {
            self.close();
        }
    }

    fn close(&mut self) {
        if self.open > 0 {
            self.completed.push(self.open);
            self.open = 0;
        }
    }

    /// A run still open at the end of history counts as completed.
    fn finish(mut self) -> HistoricalRecord {
        self.close();
        record_from_values(self.completed.into_iter())
    }
}

fn record_from_values(values: impl Iterator<Item = u32>) -> HistoricalRecord {
    let mut best = HistoricalRecord::default();
    let mut seen_any = false;
    for v in values {
        if !seen_any || v > best.value {
            seen_any = true;
            best = HistoricalRecord { value: v, count: 1 };
        } else if v == best.value {
            best.count += 1;
        }
    }
    best
}

fn min_record_from_values(values: impl Iterator<Item = u32>) -> HistoricalRecord {
    let mut best = HistoricalRecord::default();
    let mut seen_any = false;
    for v in values {
        if !seen_any || v < best.value {
            seen_any = true;
            best = HistoricalRecord { value: v, count: 1 };
        } else if v == best.value {
            best.count += 1;
        }
    }
    best
}

/// Full scan of the match history into the record bundle. Pure and total:
/// an empty log yields an all-zero bundle, and the input slice is read
/// through a sorted borrow so its order is never disturbed.
pub fn calculate_historical_records(matches: &[Match]) -> HistoricalRecords {
    let ordered = chronological(matches);

    let mut win = StreakTally::default();
    let mut undefeated = StreakTally::default();
    let mut draw = StreakTally::default();
    let mut loss = StreakTally::default();
    let mut winless = StreakTally::default();
    let mut goal = StreakTally::default();
    let mut assist = StreakTally::default();
    let mut goal_drought = StreakTally::default();
    let mut assist_drought = StreakTally::default();
    let mut clean_sheet = StreakTally::default();

    for m in &ordered {
        // Exhaustive on purpose: a missed result variant would silently
        // under-count several streaks at once.
        let (is_win, is_draw, is_loss) = match m.result {
            MatchResult::Win => (true, false, false),
            MatchResult::Draw => (false, true, false),
            MatchResult::Loss => (false, false, true),
        };

        win.step(is_win);
        undefeated.step(!is_loss);
        draw.step(is_draw);
        loss.step(is_loss);
        winless.step(!is_win);
        goal.step(m.my_goals > 0);
        assist.step(m.my_assists > 0);
        goal_drought.step(m.my_goals == 0);
        assist_drought.step(m.my_assists == 0);
        clean_sheet.step(m.clean_sheet());
    }

    HistoricalRecords {
        longest_win_streak: win.finish(),
        longest_undefeated_streak: undefeated.finish(),
        longest_draw_streak: draw.finish(),
        longest_loss_streak: loss.finish(),
        longest_winless_streak: winless.finish(),
        longest_goal_streak: goal.finish(),
        longest_assist_streak: assist.finish(),
        longest_goal_drought: goal_drought.finish(),
        longest_assist_drought: assist_drought.finish(),
        longest_clean_sheet_streak: clean_sheet.finish(),
        most_goals_in_match: record_from_values(ordered.iter().map(|m| m.my_goals)),
        most_assists_in_match: record_from_values(ordered.iter().map(|m| m.my_assists)),
        most_goals_for_in_match: record_from_values(ordered.iter().map(|m| m.team_score)),
        fewest_goals_conceded: min_record_from_values(ordered.iter().map(|m| m.opponent_score)),
        biggest_winning_margin: record_from_values(
            ordered
                .iter()
                .filter(|m| m.result == MatchResult::Win)
                .map(|m| m.goal_difference() as u32),
        ),
    }
}
