use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matches::{Card, Match, MatchResult, PlayerLine, PlayerRole};

const TEAMMATES: &[&str] = &["Alex", "Bruno", "Chema", "Dani", "Edu", "Fran", "Gorka"];
const TOURNAMENTS: &[&str] = &["Liga de los Miércoles", "Copa del Barrio", "Amistoso"];

/// Deterministic demo log: same seed, same matches. Used by the demo command
/// and the benches, so it must stay cheap for a few hundred entries.
pub fn generate_sample_log(count: usize, seed: u64) -> Vec<Match> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 10).expect("static start date");
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let team_score = rng.gen_range(0..=5u32);
        let opponent_score = rng.gen_range(0..=4u32);
        let my_goals = if team_score == 0 {
            0
        } else {
            rng.gen_range(0..=team_score.min(3))
        };
        let my_assists = rng.gen_range(0..=2u32).min(team_score.saturating_sub(my_goals));

        let mut m = Match::from_scoreline(&format!("demo-{i}"), date, team_score, opponent_score);
        m.my_goals = my_goals;
        m.my_assists = my_assists;
        m.players = sample_lineup(&mut rng, team_score.saturating_sub(my_goals));
        if rng.gen_bool(0.4) {
            m.tournament = Some(TOURNAMENTS[rng.gen_range(0..TOURNAMENTS.len())].to_string());
        }
        debug_assert_eq!(m.result, MatchResult::from_scores(team_score, opponent_score));
        out.push(m);

        date = date + Duration::days(rng.gen_range(3..=7));
    }

    out
}

fn sample_lineup(rng: &mut StdRng, mut goals_left: u32) -> Vec<PlayerLine> {
    let mut lines = Vec::new();
    for (idx, name) in TEAMMATES.iter().take(5).enumerate() {
        let goals = if goals_left > 0 && rng.gen_bool(0.5) {
            let g = rng.gen_range(1..=goals_left);
            goals_left -= g;
            g
        } else {
            0
        };
        lines.push(PlayerLine {
            name: name.to_string(),
            goals,
            assists: rng.gen_range(0..=1),
            minutes_played: rng.gen_range(30..=90),
            role: if idx == 0 {
                PlayerRole::Goalkeeper
            } else if rng.gen_bool(0.8) {
                PlayerRole::Starter
            } else {
                PlayerRole::Substitute
            },
            card: if rng.gen_bool(0.1) {
                Some(Card::Yellow)
            } else {
                None
            },
        });
    }
    lines
}
