use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::event::LogEvent;
use crate::tally::Tally;

/// Sessions at or under this many seconds count as short.
pub const SHORT_SESSION_SECS: i64 = 60;

/// Per-metric counters accumulated over one corpus scan.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub playtime_secs: Tally,
    pub sessions: Tally,
    pub short_sessions: Tally,
    pub advancements: Tally,
    pub player_deaths: Tally,
    pub death_causes: Tally,
    pub villager_kills: Tally,
    pub disconnects: Tally,
}

/// Reconstructs play sessions from login/logout events and counts the rest.
///
/// Events must be fed in file order. A login replaces any session still open
/// for the same player; sessions never closed by a logout are discarded.
#[derive(Debug, Default)]
pub struct SessionTracker {
    open: HashMap<String, NaiveDateTime>,
    totals: Aggregates,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &LogEvent) {
        match event {
            LogEvent::Login { player, at } => {
                self.open.insert(player.clone(), *at);
            }
            LogEvent::Logout { player, at } => self.logout(player, *at),
            LogEvent::Advancement { player, .. } => {
                self.totals.advancements.increment(player);
            }
            LogEvent::PlayerDeath { player, cause, .. } => {
                self.totals.player_deaths.increment(player);
                self.totals.death_causes.increment(cause);
            }
            LogEvent::EntityDeath { killer, cause, .. } => {
                if let Some(killer) = killer {
                    self.totals.villager_kills.increment(killer);
                }
                self.totals.death_causes.increment(cause);
            }
        }
    }

    fn logout(&mut self, player: &str, at: NaiveDateTime) {
        self.totals.disconnects.increment(player);

        let Some(start) = self.open.remove(player) else {
            return;
        };
        // Negative spans (clock going backwards, day rollover) are dropped.
        if at < start {
            return;
        }

        let duration = (at - start).num_seconds();
        self.totals.playtime_secs.add(player, duration as u64);
        self.totals.sessions.increment(player);
        if duration <= SHORT_SESSION_SECS {
            self.totals.short_sessions.increment(player);
        }
    }

    /// Number of sessions currently open.
    pub fn open_sessions(&self) -> usize {
        self.open.len()
    }

    pub fn finish(self) -> Aggregates {
        if !self.open.is_empty() {
            tracing::debug!(
                open_sessions = self.open.len(),
                "dropping sessions without a logout"
            );
        }
        self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn login(player: &str, at: NaiveDateTime) -> LogEvent {
        LogEvent::Login {
            player: player.to_string(),
            at,
        }
    }

    fn logout(player: &str, at: NaiveDateTime) -> LogEvent {
        LogEvent::Logout {
            player: player.to_string(),
            at,
        }
    }

    #[test]
    fn test_session_adds_exact_duration() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&login("Alice", at(7, 0, 0)));
        tracker.apply(&logout("Alice", at(7, 20, 0)));
        let totals = tracker.finish();

        assert_eq!(totals.playtime_secs.get("Alice"), 1200);
        assert_eq!(totals.sessions.get("Alice"), 1);
        assert_eq!(totals.short_sessions.get("Alice"), 0);
        assert_eq!(totals.disconnects.get("Alice"), 1);
    }

    #[test]
    fn test_second_logout_only_counts_disconnect() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&login("Alice", at(7, 0, 0)));
        tracker.apply(&logout("Alice", at(7, 20, 0)));
        tracker.apply(&logout("Alice", at(7, 20, 0)));
        let totals = tracker.finish();

        assert_eq!(totals.playtime_secs.get("Alice"), 1200);
        assert_eq!(totals.sessions.get("Alice"), 1);
        assert_eq!(totals.disconnects.get("Alice"), 2);
    }

    #[test]
    fn test_short_session_boundary() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&login("Bob", at(10, 25, 0)));
        tracker.apply(&logout("Bob", at(10, 26, 0)));
        tracker.apply(&login("Carol", at(10, 25, 0)));
        tracker.apply(&logout("Carol", at(10, 26, 1)));
        let totals = tracker.finish();

        assert_eq!(totals.short_sessions.get("Bob"), 1);
        assert_eq!(totals.short_sessions.get("Carol"), 0);
        assert_eq!(totals.playtime_secs.get("Carol"), 61);
    }

    #[test]
    fn test_logout_before_login_is_dropped() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&login("Dave", at(23, 59, 0)));
        tracker.apply(&logout("Dave", at(0, 1, 0)));
        assert_eq!(tracker.open_sessions(), 0);
        let totals = tracker.finish();

        assert_eq!(totals.playtime_secs.get("Dave"), 0);
        assert_eq!(totals.sessions.get("Dave"), 0);
        assert_eq!(totals.disconnects.get("Dave"), 1);
    }

    #[test]
    fn test_relogin_overwrites_start() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&login("Eve", at(8, 0, 0)));
        tracker.apply(&login("Eve", at(9, 0, 0)));
        tracker.apply(&logout("Eve", at(9, 0, 30)));
        let totals = tracker.finish();

        assert_eq!(totals.playtime_secs.get("Eve"), 30);
        assert_eq!(totals.sessions.get("Eve"), 1);
    }

    #[test]
    fn test_open_sessions_are_discarded() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&login("Frank", at(8, 0, 0)));
        assert_eq!(tracker.open_sessions(), 1);
        let totals = tracker.finish();

        assert!(totals.playtime_secs.is_empty());
        assert!(totals.sessions.is_empty());
    }

    #[test]
    fn test_entity_death_shares_cause_counter() {
        let mut tracker = SessionTracker::new();
        tracker.apply(&LogEvent::PlayerDeath {
            player: "Alice".to_string(),
            cause: "drowned".to_string(),
            at: at(9, 0, 0),
        });
        tracker.apply(&LogEvent::EntityDeath {
            killer: None,
            cause: "drowned".to_string(),
            message: "Librarian drowned".to_string(),
            at: at(9, 1, 0),
        });
        tracker.apply(&LogEvent::EntityDeath {
            killer: Some("Alice".to_string()),
            cause: "was slain by Alice".to_string(),
            message: "Farmer was slain by Alice".to_string(),
            at: at(9, 2, 0),
        });
        let totals = tracker.finish();

        assert_eq!(totals.death_causes.get("drowned"), 2);
        assert_eq!(totals.death_causes.get("was slain by Alice"), 1);
        assert_eq!(totals.villager_kills.get("Alice"), 1);
        assert_eq!(totals.player_deaths.get("Alice"), 1);
    }
}
