use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use matchlog::achievements::{BUILTIN_ACHIEVEMENTS, CustomAchievement, evaluate_custom_achievement};
use matchlog::consistency::{momentum_series, period_consistency};
use matchlog::export::export_workbook;
use matchlog::matches::{Match, chronological};
use matchlog::morale::calculate_team_morale;
use matchlog::persist::{default_log_path, load_log, save_log};
use matchlog::records::{HistoricalRecord, calculate_historical_records};
use matchlog::sample_log::generate_sample_log;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "summary".to_string());

    match command.as_str() {
        "summary" => {
            let matches = load_matches()?;
            print_records(&matches);
            println!();
            print_morale(&matches);
            println!();
            print_achievements(&matches, &[]);
        }
        "records" => print_records(&load_matches()?),
        "morale" => print_morale(&load_matches()?),
        "momentum" => print_momentum(&load_matches()?),
        "achievements" => {
            let user_rules = match args.next() {
                Some(path) => load_rules(&PathBuf::from(path))?,
                None => Vec::new(),
            };
            print_achievements(&load_matches()?, &user_rules);
        }
        "export" => {
            let out = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("matchlog.xlsx"));
            let matches = load_matches()?;
            let report = export_workbook(&out, &matches)?;
            println!(
                "Exported {} matches, {} momentum points, {} achievements unlocked -> {}",
                report.matches,
                report.momentum_points,
                report.achievements_unlocked,
                out.display()
            );
        }
        "demo" => {
            let count = args
                .next()
                .and_then(|raw| raw.parse::<usize>().ok())
                .unwrap_or(60)
                .clamp(1, 2000);
            let path = log_path()?;
            let matches = generate_sample_log(count, 26);
            save_log(&path, &matches)?;
            println!("Wrote {} demo matches to {}", count, path.display());
        }
        other => bail!(
            "unknown command '{other}' (expected summary|records|morale|momentum|achievements|export|demo)"
        ),
    }

    Ok(())
}

fn log_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("MATCHLOG_FILE") {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_log_path().context("no home directory found; set MATCHLOG_FILE")
}

fn load_matches() -> Result<Vec<Match>> {
    let path = log_path()?;
    let matches = load_log(&path)?;
    if matches.is_empty() {
        println!("Match log {} is empty (try `matchlog demo`).", path.display());
    }
    Ok(matches)
}

fn load_rules(path: &Path) -> Result<Vec<CustomAchievement>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read rules {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse rules {}", path.display()))
}

fn print_records(matches: &[Match]) {
    let r = calculate_historical_records(matches);
    println!("Historical records ({} matches):", matches.len());
    print_record("Longest win streak", r.longest_win_streak);
    print_record("Longest undefeated streak", r.longest_undefeated_streak);
    print_record("Longest draw streak", r.longest_draw_streak);
    print_record("Longest loss streak", r.longest_loss_streak);
    print_record("Longest winless streak", r.longest_winless_streak);
    print_record("Longest scoring streak", r.longest_goal_streak);
    print_record("Longest assist streak", r.longest_assist_streak);
    print_record("Longest goal drought", r.longest_goal_drought);
    print_record("Longest assist drought", r.longest_assist_drought);
    print_record("Longest clean sheet streak", r.longest_clean_sheet_streak);
    print_record("Most goals in a match", r.most_goals_in_match);
    print_record("Most assists in a match", r.most_assists_in_match);
    print_record("Most team goals in a match", r.most_goals_for_in_match);
    print_record("Fewest goals conceded", r.fewest_goals_conceded);
    print_record("Biggest winning margin", r.biggest_winning_margin);
}

fn print_record(name: &str, record: HistoricalRecord) {
    if record.count > 1 {
        println!("  {name}: {} (equalled {} times)", record.value, record.count);
    } else {
        println!("  {name}: {}", record.value);
    }
}

fn print_morale(matches: &[Match]) {
    match calculate_team_morale(matches) {
        Some(morale) => {
            println!(
                "Morale: {:.1}/100 ({:?}, trend {:?})",
                morale.score, morale.level, morale.trend
            );
            println!(
                "  Recent: {} over {} matches, {} goals, {} assists",
                morale.recent.record, morale.recent.matches, morale.recent.goals, morale.recent.assists
            );
        }
        None => println!("Morale: not enough matches yet (need 3)."),
    }
}

fn print_momentum(matches: &[Match]) {
    let ordered = chronological(matches);
    let series = momentum_series(matches);
    println!("Momentum (trailing-10 consistency):");
    for (m, score) in ordered.iter().zip(&series) {
        println!("  {}  {score:.2}", m.date);
    }
    println!("Whole-period consistency: {:.2}", period_consistency(matches));
}

fn print_achievements(matches: &[Match], user_rules: &[CustomAchievement]) {
    println!("Achievements:");
    for achievement in BUILTIN_ACHIEVEMENTS.iter().chain(user_rules) {
        let mark = if evaluate_custom_achievement(achievement, matches) {
            "x"
        } else {
            " "
        };
        println!("  [{mark}] {}", achievement.name);
    }
}
