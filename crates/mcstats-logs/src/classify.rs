//! Line classifier for vanilla/Fabric server logs.
//!
//! Rules are evaluated in a fixed order and the first matching rule decides
//! the event: login, logout, advancement, player death, entity death.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::event::LogEvent;

const PREFIX: &str = r"\[(?P<time>\d{2}:\d{2}:\d{2})\] \[Server thread/INFO\]: ";

const DEATH_CAUSES: &[&str] = &[
    "fell from a high place",
    "fell off a ladder",
    "fell out of the world",
    "hit the ground too hard",
    "was slain by .+",
    "was shot by .+",
    "was blown up by .+",
    "was doomed to fall by .+",
    "was killed by .+",
    "burned to death",
    "tried to swim in lava",
    "drowned",
    "experienced kinetic energy",
    "blew up",
    "withered away",
    "starved to death",
    "died",
];

static KILLER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" by ([A-Za-z0-9_]+)$").unwrap());

static VICTIM_CAUSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+? (was .+)").unwrap());

type Build = fn(&Captures<'_>, NaiveDateTime) -> LogEvent;

struct Rule {
    regex: Regex,
    build: Build,
}

impl Rule {
    fn new(body: &str, build: Build) -> Self {
        Self {
            regex: Regex::new(&format!("{PREFIX}{body}")).unwrap(),
            build,
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(r"(?P<player>[A-Za-z0-9_]+)\[/.*\] logged in", |caps, at| {
            LogEvent::Login {
                player: caps["player"].to_string(),
                at,
            }
        }),
        Rule::new(
            r"(?P<player>[A-Za-z0-9_]+) (?:left the game|lost connection: .*)",
            |caps, at| LogEvent::Logout {
                player: caps["player"].to_string(),
                at,
            },
        ),
        Rule::new(
            r"(?P<player>[A-Za-z0-9_]+) has made the advancement \[(?P<title>.+?)\]",
            |caps, at| LogEvent::Advancement {
                player: caps["player"].to_string(),
                title: caps["title"].to_string(),
                at,
            },
        ),
        Rule::new(
            &format!(
                r"(?P<player>[A-Za-z0-9_]+) (?P<cause>{})",
                DEATH_CAUSES.join("|")
            ),
            |caps, at| LogEvent::PlayerDeath {
                player: caps["player"].to_string(),
                cause: caps["cause"].to_string(),
                at,
            },
        ),
        Rule::new(
            r"(?:Named entity|Villager) .* died[:,] (?:message:\s*)?'?(?P<msg>.+?)'?$",
            |caps, at| entity_death(&caps["msg"], at),
        ),
    ]
});

fn entity_death(message: &str, at: NaiveDateTime) -> LogEvent {
    let killer = KILLER_REGEX
        .captures(message)
        .map(|caps| caps[1].to_string());
    let cause = VICTIM_CAUSE_REGEX
        .captures(message)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| message.to_string());

    LogEvent::EntityDeath {
        killer,
        cause,
        message: message.to_string(),
        at,
    }
}

/// Stateless classifier over the fixed rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one line. `date` is the calendar day the line's time-of-day
    /// belongs to. Lines matching no rule, or carrying an impossible time,
    /// yield `None`.
    pub fn classify(&self, line: &str, date: NaiveDate) -> Option<LogEvent> {
        for rule in RULES.iter() {
            let Some(caps) = rule.regex.captures(line) else {
                continue;
            };
            let time = NaiveTime::parse_from_str(&caps["time"], "%H:%M:%S").ok()?;
            return Some((rule.build)(&caps, date.and_time(time)));
        }
        None
    }
}
