use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::achievements::{BUILTIN_ACHIEVEMENTS, evaluate_custom_achievement};
use crate::consistency::momentum_series;
use crate::matches::{Match, MatchResult, chronological};
use crate::morale::calculate_team_morale;
use crate::records::{HistoricalRecord, calculate_historical_records};

pub struct ExportReport {
    pub matches: usize,
    pub momentum_points: usize,
    pub achievements_unlocked: usize,
}

/// One workbook, one sheet per report. Everything is written as strings;
/// the numbers are already formatted the way the app displays them.
pub fn export_workbook(path: &Path, matches: &[Match]) -> Result<ExportReport> {
    let matches_rows = matches_rows(matches);
    let records_rows = records_rows(matches);
    let morale_rows = morale_rows(matches);
    let momentum_rows = momentum_rows(matches);
    let (achievement_rows, unlocked) = achievement_rows(matches);

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Matches")?;
        write_rows(sheet, &matches_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Records")?;
        write_rows(sheet, &records_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Morale")?;
        write_rows(sheet, &morale_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Momentum")?;
        write_rows(sheet, &momentum_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Achievements")?;
        write_rows(sheet, &achievement_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        matches: matches.len(),
        momentum_points: momentum_rows.len().saturating_sub(1),
        achievements_unlocked: unlocked,
    })
}

fn matches_rows(matches: &[Match]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Date".to_string(),
        "Result".to_string(),
        "Score".to_string(),
        "My Goals".to_string(),
        "My Assists".to_string(),
        "Tournament".to_string(),
        "Notes".to_string(),
    ]];
    for m in chronological(matches) {
        let result = match m.result {
            MatchResult::Win => "Win",
            MatchResult::Loss => "Loss",
            MatchResult::Draw => "Draw",
        };
        rows.push(vec![
            m.date.to_string(),
            result.to_string(),
            format!("{}-{}", m.team_score, m.opponent_score),
            m.my_goals.to_string(),
            m.my_assists.to_string(),
            m.tournament.clone().unwrap_or_default(),
            m.notes.clone().unwrap_or_default(),
        ]);
    }
    rows
}

fn records_rows(matches: &[Match]) -> Vec<Vec<String>> {
    let r = calculate_historical_records(matches);
    let named: [(&str, HistoricalRecord); 15] = [
        ("Longest win streak", r.longest_win_streak),
        ("Longest undefeated streak", r.longest_undefeated_streak),
        ("Longest draw streak", r.longest_draw_streak),
        ("Longest loss streak", r.longest_loss_streak),
        ("Longest winless streak", r.longest_winless_streak),
        ("Longest scoring streak", r.longest_goal_streak),
        ("Longest assist streak", r.longest_assist_streak),
        ("Longest goal drought", r.longest_goal_drought),
        ("Longest assist drought", r.longest_assist_drought),
        ("Longest clean sheet streak", r.longest_clean_sheet_streak),
        ("Most goals in a match", r.most_goals_in_match),
        ("Most assists in a match", r.most_assists_in_match),
        ("Most team goals in a match", r.most_goals_for_in_match),
        ("Fewest goals conceded", r.fewest_goals_conceded),
        ("Biggest winning margin", r.biggest_winning_margin),
    ];

    let mut rows = vec![vec![
        "Record".to_string(),
        "Value".to_string(),
        "Times equalled".to_string(),
    ]];
    rows.extend(
        named
            .iter()
            .map(|(name, rec)| vec![name.to_string(), rec.value.to_string(), rec.count.to_string()]),
    );
    rows
}

fn morale_rows(matches: &[Match]) -> Vec<Vec<String>> {
    let mut rows = vec![vec!["Field".to_string(), "Value".to_string()]];
    match calculate_team_morale(matches) {
        Some(morale) => {
            rows.push(vec!["Score".to_string(), format!("{:.1}", morale.score)]);
            rows.push(vec!["Level".to_string(), format!("{:?}", morale.level)]);
            rows.push(vec!["Trend".to_string(), format!("{:?}", morale.trend)]);
            rows.push(vec!["Recent record".to_string(), morale.recent.record]);
            rows.push(vec![
                "Recent goals".to_string(),
                morale.recent.goals.to_string(),
            ]);
            rows.push(vec![
                "Recent assists".to_string(),
                morale.recent.assists.to_string(),
            ]);
        }
        None => rows.push(vec![
            "Score".to_string(),
            "not enough matches".to_string(),
        ]),
    }
    rows
}

fn momentum_rows(matches: &[Match]) -> Vec<Vec<String>> {
    let ordered = chronological(matches);
    let series = momentum_series(matches);

    let mut rows = vec![vec!["Date".to_string(), "Consistency".to_string()]];
    rows.extend(
        ordered
            .iter()
            .zip(&series)
            .map(|(m, score)| vec![m.date.to_string(), format!("{score:.2}")]),
    );
    rows
}

fn achievement_rows(matches: &[Match]) -> (Vec<Vec<String>>, usize) {
    let mut rows = vec![vec![
        "Achievement".to_string(),
        "Description".to_string(),
        "Unlocked".to_string(),
    ]];
    let mut unlocked = 0usize;
    for achievement in BUILTIN_ACHIEVEMENTS.iter() {
        let hit = evaluate_custom_achievement(achievement, matches);
        if hit {
            unlocked += 1;
        }
        rows.push(vec![
            achievement.name.clone(),
            achievement.description.clone().unwrap_or_default(),
            if hit { "yes" } else { "no" }.to_string(),
        ]);
    }
    (rows, unlocked)
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
