use chrono::NaiveDateTime;

/// A single recognised server log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    Login {
        player: String,
        at: NaiveDateTime,
    },
    /// Either `left the game` or `lost connection: ...`. A normal disconnect
    /// usually emits both lines back to back.
    Logout {
        player: String,
        at: NaiveDateTime,
    },
    Advancement {
        player: String,
        title: String,
        at: NaiveDateTime,
    },
    PlayerDeath {
        player: String,
        cause: String,
        at: NaiveDateTime,
    },
    /// Death of a villager or other named entity.
    EntityDeath {
        killer: Option<String>,
        cause: String,
        message: String,
        at: NaiveDateTime,
    },
}
