//! Ledger database fixtures.
//!
//! Mirrors the table layout written by the Ledger mod so queries run against
//! the same columns and foreign keys as a live server.

use anyhow::Result;
use rusqlite::{Connection, params};
use std::path::Path;

pub const ACTION_BREAK: i64 = 1;
pub const ACTION_PLACE: i64 = 3;
pub const ACTION_KILL: i64 = 8;

const SCHEMA: &str = r#"
CREATE TABLE ActionIdentifiers (id INTEGER PRIMARY KEY, action_identifier TEXT NOT NULL);
CREATE TABLE ObjectIdentifiers (id INTEGER PRIMARY KEY, identifier TEXT NOT NULL);
CREATE TABLE worlds (id INTEGER PRIMARY KEY, identifier TEXT NOT NULL);
CREATE TABLE players (
    id INTEGER PRIMARY KEY,
    player_id BLOB NOT NULL,
    player_name TEXT NOT NULL,
    first_join TEXT NOT NULL,
    last_join TEXT NOT NULL
);
CREATE TABLE sources (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE actions (
    id INTEGER PRIMARY KEY,
    action_id INT NOT NULL,
    time TEXT NOT NULL,
    x INT NOT NULL,
    y INT NOT NULL,
    z INT NOT NULL,
    world_id INT NOT NULL,
    object_id INT NOT NULL,
    old_object_id INT NOT NULL,
    block_state TEXT NULL,
    old_block_state TEXT NULL,
    source INT NOT NULL,
    player_id INT NULL,
    extra_data TEXT NULL,
    rolled_back BOOLEAN NOT NULL,
    FOREIGN KEY (action_id) REFERENCES ActionIdentifiers(id),
    FOREIGN KEY (world_id) REFERENCES worlds(id),
    FOREIGN KEY (object_id) REFERENCES ObjectIdentifiers(id),
    FOREIGN KEY (old_object_id) REFERENCES ObjectIdentifiers(id),
    FOREIGN KEY (source) REFERENCES sources(id),
    FOREIGN KEY (player_id) REFERENCES players(id)
);
"#;

/// One row for the `actions` table.
#[derive(Debug, Clone)]
pub struct ActionRow {
    pub action_id: i64,
    pub time: String,
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub world_id: i64,
    pub object_id: i64,
    pub old_object_id: i64,
    pub source: i64,
    pub player_id: Option<i64>,
}

impl ActionRow {
    pub fn new(action_id: i64, time: &str, object_id: i64, player_id: Option<i64>) -> Self {
        Self {
            action_id,
            time: time.to_string(),
            x: 0,
            y: 64,
            z: 0,
            world_id: 1,
            object_id,
            old_object_id: object_id,
            source: 1,
            player_id,
        }
    }

    pub fn at(mut self, x: i64, y: i64, z: i64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn in_world(mut self, world_id: i64) -> Self {
        self.world_id = world_id;
        self
    }

    pub fn from_source(mut self, source: i64) -> Self {
        self.source = source;
        self
    }

    pub fn replacing(mut self, old_object_id: i64) -> Self {
        self.old_object_id = old_object_id;
        self
    }
}

/// A Ledger-schema SQLite file on disk.
pub struct LedgerFixture {
    conn: Connection,
}

impl LedgerFixture {
    /// Create the schema plus the lookup rows shared by most tests:
    /// three action kinds, a handful of objects, the overworld, Steve,
    /// and the `player` / `gravity` sources.
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;

        for (id, name) in [
            (ACTION_BREAK, "block-break"),
            (ACTION_PLACE, "block-place"),
            (ACTION_KILL, "entity-kill"),
        ] {
            conn.execute(
                "INSERT INTO ActionIdentifiers (id, action_identifier) VALUES (?1, ?2)",
                params![id, name],
            )?;
        }

        for (id, name) in [
            (10, "minecraft:air"),
            (11, "minecraft:dirt"),
            (12, "minecraft:stone"),
            (20, "minecraft:zombie"),
        ] {
            conn.execute(
                "INSERT INTO ObjectIdentifiers (id, identifier) VALUES (?1, ?2)",
                params![id, name],
            )?;
        }

        conn.execute(
            "INSERT INTO worlds (id, identifier) VALUES (1, 'minecraft:overworld')",
            [],
        )?;
        conn.execute(
            "INSERT INTO sources (id, name) VALUES (1, 'player'), (2, 'gravity')",
            [],
        )?;

        let fixture = Self { conn };
        fixture.add_player(1, "Steve")?;
        Ok(fixture)
    }

    /// The four-action scenario: Steve places dirt, breaks stone and kills a
    /// zombie; gravity breaks a block with no player attached. All in one
    /// chunk of the overworld between 10:00 and 10:15.
    pub fn with_sample_actions(path: &Path) -> Result<Self> {
        let fixture = Self::create(path)?;
        fixture.add_action(&ActionRow::new(ACTION_PLACE, "2025-01-01 10:00:00", 11, Some(1)).replacing(10))?;
        fixture.add_action(
            &ActionRow::new(ACTION_BREAK, "2025-01-01 10:05:00", 12, Some(1))
                .at(1, 64, 1)
                .replacing(11),
        )?;
        fixture.add_action(&ActionRow::new(ACTION_KILL, "2025-01-01 10:10:00", 20, Some(1)).at(2, 64, 2))?;
        fixture.add_action(
            &ActionRow::new(ACTION_BREAK, "2025-01-01 10:15:00", 12, None)
                .at(3, 63, 3)
                .from_source(2)
                .replacing(11),
        )?;
        Ok(fixture)
    }

    /// Reopen an existing fixture file.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn add_player(&self, id: i64, name: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO players (id, player_id, player_name, first_join, last_join)
            VALUES (?1, X'00', ?2, '2025-01-01', '2025-01-02')
            "#,
            params![id, name],
        )?;
        Ok(())
    }

    pub fn add_world(&self, id: i64, identifier: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO worlds (id, identifier) VALUES (?1, ?2)",
            params![id, identifier],
        )?;
        Ok(())
    }

    pub fn add_object(&self, id: i64, identifier: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO ObjectIdentifiers (id, identifier) VALUES (?1, ?2)",
            params![id, identifier],
        )?;
        Ok(())
    }

    pub fn add_action(&self, row: &ActionRow) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO actions (
                action_id, time, x, y, z, world_id, object_id, old_object_id,
                block_state, old_block_state, source, player_id, extra_data, rolled_back
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, NULL, NULL, ?9, ?10, NULL, 0)
            "#,
            params![
                row.action_id,
                &row.time,
                row.x,
                row.y,
                row.z,
                row.world_id,
                row.object_id,
                row.old_object_id,
                row.source,
                row.player_id
            ],
        )?;
        Ok(())
    }
}
