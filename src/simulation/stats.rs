//! Per-strategy aggregates over a batch of game records.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::GameRecord;

/// Totals and averages for one strategy name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyStats {
    pub name: String,
    /// Seats this strategy occupied across the batch.
    pub appearances: usize,
    pub wins: usize,
    pub eliminations: usize,
    pub total_money: i64,
    pub total_properties: usize,
    pub total_houses: u64,
    pub total_hotels: u64,
}

impl StrategyStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Share of appearances that ended in a win.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.ratio(self.wins as f64)
    }

    #[must_use]
    pub fn avg_money(&self) -> f64 {
        self.ratio(self.total_money as f64)
    }

    #[must_use]
    pub fn avg_properties(&self) -> f64 {
        self.ratio(self.total_properties as f64)
    }

    #[must_use]
    pub fn avg_houses(&self) -> f64 {
        self.ratio(self.total_houses as f64)
    }

    #[must_use]
    pub fn avg_hotels(&self) -> f64 {
        self.ratio(self.total_hotels as f64)
    }

    fn ratio(&self, total: f64) -> f64 {
        if self.appearances == 0 {
            0.0
        } else {
            total / self.appearances as f64
        }
    }
}

/// Fold records into stats, one entry per strategy name in first-seen order.
#[must_use]
pub fn aggregate(records: &[GameRecord]) -> Vec<StrategyStats> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut stats: Vec<StrategyStats> = Vec::new();

    for record in records {
        for player in &record.players {
            let slot = *index.entry(player.strategy.as_str()).or_insert_with(|| {
                stats.push(StrategyStats::new(&player.strategy));
                stats.len() - 1
            });
            let entry = &mut stats[slot];
            entry.appearances += 1;
            entry.wins += usize::from(record.winner == Some(player.id));
            entry.eliminations += usize::from(player.eliminated);
            entry.total_money += player.final_money;
            entry.total_properties += player.properties_owned;
            entry.total_houses += u64::from(player.houses_built);
            entry.total_hotels += u64::from(player.hotels_built);
        }
    }

    stats
}
