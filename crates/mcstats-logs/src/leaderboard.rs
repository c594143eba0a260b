use serde::{Deserialize, Serialize};

use crate::tracker::Aggregates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaytimeRow {
    pub player: String,
    pub seconds: u64,
    pub sessions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementRow {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDeathRow {
    pub player: String,
    pub deaths: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathCauseRow {
    pub cause: String,
    pub events: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillagerKillerRow {
    pub name: String,
    pub villagers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurnRow {
    pub player: String,
    pub disconnects: u64,
    pub short_sessions: u64,
}

/// Leaderboards computed from one scan of the server logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
    pub top_playtime: Vec<PlaytimeRow>,
    pub top_advancements: Vec<AdvancementRow>,
    pub top_player_deaths: Vec<PlayerDeathRow>,
    pub top_death_causes: Vec<DeathCauseRow>,
    pub top_villager_killers: Vec<VillagerKillerRow>,
    pub connection_churn: Vec<ChurnRow>,
}

impl LogStats {
    /// Rank every counter and keep the first `limit` rows of each board.
    pub fn from_aggregates(totals: &Aggregates, limit: usize) -> Self {
        let top_playtime = totals
            .playtime_secs
            .most_common(limit)
            .into_iter()
            .map(|(player, seconds)| PlaytimeRow {
                player: player.to_string(),
                seconds,
                sessions: totals.sessions.get(player),
            })
            .collect();

        let top_advancements = totals
            .advancements
            .most_common(limit)
            .into_iter()
            .map(|(name, count)| AdvancementRow {
                name: name.to_string(),
                count,
            })
            .collect();

        let top_player_deaths = totals
            .player_deaths
            .most_common(limit)
            .into_iter()
            .map(|(player, deaths)| PlayerDeathRow {
                player: player.to_string(),
                deaths,
            })
            .collect();

        let top_death_causes = totals
            .death_causes
            .most_common(limit)
            .into_iter()
            .map(|(cause, events)| DeathCauseRow {
                cause: cause.to_string(),
                events,
            })
            .collect();

        let top_villager_killers = totals
            .villager_kills
            .most_common(limit)
            .into_iter()
            .map(|(name, villagers)| VillagerKillerRow {
                name: name.to_string(),
                villagers,
            })
            .collect();

        Self {
            top_playtime,
            top_advancements,
            top_player_deaths,
            top_death_causes,
            top_villager_killers,
            connection_churn: connection_churn(totals, limit),
        }
    }
}

/// Players who drop most often; repeated short sessions break ties.
fn connection_churn(totals: &Aggregates, limit: usize) -> Vec<ChurnRow> {
    let mut rows: Vec<ChurnRow> = totals
        .disconnects
        .iter()
        .map(|(player, disconnects)| ChurnRow {
            player: player.to_string(),
            disconnects,
            short_sessions: totals.short_sessions.get(player),
        })
        .collect();

    rows.sort_by(|a, b| {
        (b.disconnects, b.short_sessions).cmp(&(a.disconnects, a.short_sessions))
    });
    rows.truncate(limit);
    rows
}
