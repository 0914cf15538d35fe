//! Many-game summaries

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::dice::stream;
use crate::core::error::Result;
use crate::core::types::Team;
use crate::game::{simulate_game_with, GameResult};
use crate::policy::CoachProfile;

/// One final score and how often it came up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub bombers: u32,
    pub gunners: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub seed: u64,
    pub bombers_wins: usize,
    pub gunners_wins: usize,
    pub ties: usize,
    pub average_total_points: f64,
    pub average_margin: f64,
    pub average_drives: f64,
    pub min_drives: usize,
    pub max_drives: usize,
    /// Most common final scores first
    pub common_scores: Vec<ScoreLine>,
}

impl BatchSummary {
    pub fn from_games(games: &[GameResult], seed: u64) -> Self {
        let n = games.len().max(1) as f64;
        let mut scores: BTreeMap<(u32, u32), usize> = BTreeMap::new();
        let (mut bombers_wins, mut gunners_wins, mut ties) = (0, 0, 0);

        for game in games {
            match game.winner() {
                Some(Team::Bombers) => bombers_wins += 1,
                Some(Team::Gunners) => gunners_wins += 1,
                None => ties += 1,
            }
            *scores.entry((game.score.bombers, game.score.gunners)).or_default() += 1;
        }

        let mut common_scores: Vec<ScoreLine> = scores
            .into_iter()
            .map(|((bombers, gunners), count)| ScoreLine {
                bombers,
                gunners,
                count,
            })
            .collect();
        common_scores.sort_by(|a, b| b.count.cmp(&a.count));
        common_scores.truncate(10);

        let drive_counts = games.iter().map(|g| g.drives.len());

        Self {
            games: games.len(),
            seed,
            bombers_wins,
            gunners_wins,
            ties,
            average_total_points: games.iter().map(|g| g.score.total() as f64).sum::<f64>() / n,
            average_margin: games.iter().map(|g| g.margin() as f64).sum::<f64>() / n,
            average_drives: games.iter().map(|g| g.drives.len() as f64).sum::<f64>() / n,
            min_drives: drive_counts.clone().min().unwrap_or(0),
            max_drives: drive_counts.max().unwrap_or(0),
            common_scores,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let pct = |count: usize| 100.0 * count as f64 / self.games.max(1) as f64;
        format!(
            "{} games (seed {})\nBombers {} ({:.1}%), Gunners {} ({:.1}%), ties {} ({:.1}%)\n\
             Avg total points {:.1}, avg margin {:.1}, avg drives {:.1} (min {}, max {})",
            self.games,
            self.seed,
            self.bombers_wins,
            pct(self.bombers_wins),
            self.gunners_wins,
            pct(self.gunners_wins),
            self.ties,
            pct(self.ties),
            self.average_total_points,
            self.average_margin,
            self.average_drives,
            self.min_drives,
            self.max_drives,
        )
    }
}

/// Play `games` games in parallel, one generator stream per game
pub fn simulate_games(coach: &CoachProfile, games: usize, seed: u64) -> Result<Vec<GameResult>> {
    (0..games as u64)
        .into_par_iter()
        .map(|index| {
            let mut rng = stream(seed, index);
            simulate_game_with(coach, &mut rng)
        })
        .collect()
}

/// Play `games` games with the default coach and summarize them
pub fn simulate_many(games: usize, seed: u64) -> Result<BatchSummary> {
    simulate_many_with(&CoachProfile::default(), games, seed)
}

pub fn simulate_many_with(coach: &CoachProfile, games: usize, seed: u64) -> Result<BatchSummary> {
    let results = simulate_games(coach, games, seed)?;
    let summary = BatchSummary::from_games(&results, seed);
    tracing::info!(
        "Simulated {} games: avg {:.1} points",
        summary.games,
        summary.average_total_points
    );
    Ok(summary)
}
