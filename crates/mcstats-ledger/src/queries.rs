use rusqlite::{Connection, Params, Row, params};

use crate::Result;
use crate::records::*;

// Action codes from the ActionIdentifiers table
const ACTION_BREAK: i64 = 1;
const ACTION_PLACE: i64 = 3;
const ACTION_KILL: i64 = 8;

fn rows<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, map)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(rows)
}

/// Run every aggregation against `conn`. `limit` caps the leaderboard-style
/// queries only.
pub fn load_stats(conn: &Connection, limit: usize) -> Result<LedgerStats> {
    let limit = limit as i64;

    Ok(LedgerStats {
        total_actions: total_actions(conn)?,
        world_counts: world_counts(conn)?,
        action_mix: action_mix(conn)?,
        top_players: top_players(conn, limit)?,
        builders_vs_breakers: builders_vs_breakers(conn, limit)?,
        favorite_blocks_placed: favorite_blocks_placed(conn, limit)?,
        deadliest_players: deadliest_players(conn, limit)?,
        mob_kills: mob_kills(conn, limit)?,
        environmental_causes: environmental_causes(conn, limit)?,
        hotspots: hotspots(conn, limit)?,
        hourly_activity: hourly_activity(conn)?,
    })
}

pub(crate) fn total_actions(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM actions", [], |row| row.get(0))?;
    Ok(count)
}

pub(crate) fn world_counts(conn: &Connection) -> Result<Vec<WorldCount>> {
    rows(
        conn,
        r#"
        SELECT w.identifier AS world, COUNT(*) AS actions
        FROM actions a
        JOIN worlds w ON w.id = a.world_id
        GROUP BY w.identifier
        ORDER BY actions DESC, world
        "#,
        [],
        |row| {
            Ok(WorldCount {
                world: row.get(0)?,
                actions: row.get(1)?,
            })
        },
    )
}

pub(crate) fn action_mix(conn: &Connection) -> Result<Vec<ActionCount>> {
    rows(
        conn,
        r#"
        SELECT ai.action_identifier AS action, COUNT(*) AS actions
        FROM actions a
        JOIN ActionIdentifiers ai ON ai.id = a.action_id
        GROUP BY ai.action_identifier
        ORDER BY actions DESC, action
        "#,
        [],
        |row| {
            Ok(ActionCount {
                action: row.get(0)?,
                actions: row.get(1)?,
            })
        },
    )
}

pub(crate) fn top_players(conn: &Connection, limit: i64) -> Result<Vec<PlayerActions>> {
    rows(
        conn,
        r#"
        SELECT p.player_name AS player, COUNT(*) AS actions
        FROM actions a
        JOIN players p ON p.id = a.player_id
        GROUP BY p.player_name
        ORDER BY actions DESC, player
        LIMIT ?1
        "#,
        params![limit],
        |row| {
            Ok(PlayerActions {
                player: row.get(0)?,
                actions: row.get(1)?,
            })
        },
    )
}

pub(crate) fn builders_vs_breakers(conn: &Connection, limit: i64) -> Result<Vec<BuilderRow>> {
    rows(
        conn,
        r#"
        SELECT
            p.player_name AS player,
            SUM(a.action_id = ?1) AS blocks_placed,
            SUM(a.action_id = ?2) AS blocks_broken
        FROM actions a
        JOIN players p ON p.id = a.player_id
        GROUP BY p.player_name
        ORDER BY blocks_placed DESC, blocks_broken DESC, player
        LIMIT ?3
        "#,
        params![ACTION_PLACE, ACTION_BREAK, limit],
        |row| {
            Ok(BuilderRow {
                player: row.get(0)?,
                blocks_placed: row.get(1)?,
                blocks_broken: row.get(2)?,
            })
        },
    )
}

pub(crate) fn favorite_blocks_placed(conn: &Connection, limit: i64) -> Result<Vec<BlockPlaced>> {
    rows(
        conn,
        r#"
        SELECT o.identifier AS block, COUNT(*) AS placed
        FROM actions a
        JOIN ObjectIdentifiers o ON o.id = a.object_id
        WHERE a.action_id = ?1
        GROUP BY o.identifier
        ORDER BY placed DESC, block
        LIMIT ?2
        "#,
        params![ACTION_PLACE, limit],
        |row| {
            Ok(BlockPlaced {
                block: row.get(0)?,
                placed: row.get(1)?,
            })
        },
    )
}

pub(crate) fn deadliest_players(conn: &Connection, limit: i64) -> Result<Vec<PlayerKills>> {
    rows(
        conn,
        r#"
        SELECT p.player_name AS player, COUNT(*) AS kills
        FROM actions a
        JOIN players p ON p.id = a.player_id
        WHERE a.action_id = ?1
        GROUP BY p.player_name
        ORDER BY kills DESC, player
        LIMIT ?2
        "#,
        params![ACTION_KILL, limit],
        |row| {
            Ok(PlayerKills {
                player: row.get(0)?,
                kills: row.get(1)?,
            })
        },
    )
}

pub(crate) fn mob_kills(conn: &Connection, limit: i64) -> Result<Vec<MobKills>> {
    rows(
        conn,
        r#"
        SELECT o.identifier AS mob, COUNT(*) AS kills
        FROM actions a
        JOIN ObjectIdentifiers o ON o.id = a.object_id
        WHERE a.action_id = ?1
        GROUP BY o.identifier
        ORDER BY kills DESC, mob
        LIMIT ?2
        "#,
        params![ACTION_KILL, limit],
        |row| {
            Ok(MobKills {
                mob: row.get(0)?,
                kills: row.get(1)?,
            })
        },
    )
}

pub(crate) fn environmental_causes(conn: &Connection, limit: i64) -> Result<Vec<CauseEvents>> {
    rows(
        conn,
        r#"
        SELECT s.name AS cause, COUNT(*) AS events
        FROM actions a
        JOIN sources s ON s.id = a.source
        WHERE a.player_id IS NULL
        GROUP BY s.name
        ORDER BY events DESC, cause
        LIMIT ?1
        "#,
        params![limit],
        |row| {
            Ok(CauseEvents {
                cause: row.get(0)?,
                events: row.get(1)?,
            })
        },
    )
}

// Integer division truncates toward zero in SQLite; negative coordinates are
// shifted so -1 lands in chunk -1, not chunk 0.
pub(crate) fn hotspots(conn: &Connection, limit: i64) -> Result<Vec<Hotspot>> {
    rows(
        conn,
        r#"
        SELECT
            w.identifier AS world,
            CASE WHEN a.x >= 0 THEN a.x / 16 ELSE (a.x - 15) / 16 END AS chunk_x,
            CASE WHEN a.z >= 0 THEN a.z / 16 ELSE (a.z - 15) / 16 END AS chunk_z,
            COUNT(*) AS actions
        FROM actions a
        JOIN worlds w ON w.id = a.world_id
        GROUP BY w.identifier, chunk_x, chunk_z
        ORDER BY actions DESC, world, chunk_x, chunk_z
        LIMIT ?1
        "#,
        params![limit],
        |row| {
            Ok(Hotspot {
                world: row.get(0)?,
                chunk_x: row.get(1)?,
                chunk_z: row.get(2)?,
                actions: row.get(3)?,
            })
        },
    )
}

pub(crate) fn hourly_activity(conn: &Connection) -> Result<Vec<HourlyActivity>> {
    rows(
        conn,
        r#"
        SELECT CAST(strftime('%H', time) AS INTEGER) AS hour, COUNT(*) AS actions
        FROM actions
        WHERE strftime('%H', time) IS NOT NULL
        GROUP BY hour
        ORDER BY actions DESC, hour
        "#,
        [],
        |row| {
            Ok(HourlyActivity {
                hour: row.get(0)?,
                actions: row.get(1)?,
            })
        },
    )
}
