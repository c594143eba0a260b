use serde::{Deserialize, Serialize};

/// Actions recorded per world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldCount {
    /// World identifier, e.g. `minecraft:overworld`.
    pub world: String,
    pub actions: i64,
}

/// Actions recorded per action kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCount {
    /// Action identifier, e.g. `block-break`.
    pub action: String,
    pub actions: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActions {
    pub player: String,
    pub actions: i64,
}

/// Blocks placed versus blocks broken by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderRow {
    pub player: String,
    pub blocks_placed: i64,
    pub blocks_broken: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPlaced {
    /// Object identifier, e.g. `minecraft:dirt`.
    pub block: String,
    pub placed: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerKills {
    pub player: String,
    pub kills: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobKills {
    pub mob: String,
    pub kills: i64,
}

/// Actions with no player attached, grouped by source (gravity, fire, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseEvents {
    pub cause: String,
    pub events: i64,
}

/// Activity inside one 16x16 chunk column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub world: String,
    pub chunk_x: i64,
    pub chunk_z: i64,
    pub actions: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Hour of day (0-23) in server time.
    pub hour: u8,
    pub actions: i64,
}

/// Full battery of ledger aggregates.
///
/// Leaderboard fields are capped at the requested limit; `total_actions`,
/// `world_counts`, `action_mix` and `hourly_activity` cover the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_actions: i64,
    pub world_counts: Vec<WorldCount>,
    pub action_mix: Vec<ActionCount>,
    pub top_players: Vec<PlayerActions>,
    pub builders_vs_breakers: Vec<BuilderRow>,
    pub favorite_blocks_placed: Vec<BlockPlaced>,
    pub deadliest_players: Vec<PlayerKills>,
    pub mob_kills: Vec<MobKills>,
    pub environmental_causes: Vec<CauseEvents>,
    pub hotspots: Vec<Hotspot>,
    pub hourly_activity: Vec<HourlyActivity>,
}
