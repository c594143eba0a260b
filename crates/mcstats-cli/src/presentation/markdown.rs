use mcstats_ledger::LedgerStats;
use mcstats_logs::LogStats;

fn table<const N: usize>(headers: [&str; N], rows: impl IntoIterator<Item = [String; N]>) -> String {
    let head = format!("| {} |", headers.join(" | "));
    let sep = format!("| {} |", vec!["---"; N].join(" | "));
    let body: Vec<String> = rows
        .into_iter()
        .map(|row| format!("| {} |", row.join(" | ")))
        .collect();

    if body.is_empty() {
        [head, sep, "| (none) |".to_string()].join("\n")
    } else {
        [head, sep, body.join("\n")].join("\n")
    }
}

fn section(lines: &mut Vec<String>, title: &str, table: String) {
    lines.push(format!("## {}", title));
    lines.push(table);
    lines.push(String::new());
}

/// `h:mm:ss`
fn clock(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

pub fn ledger_markdown(stats: &LedgerStats) -> String {
    let mut lines = vec![
        "# Minecraft World Stats".to_string(),
        String::new(),
        format!("- Total actions recorded: **{}**", stats.total_actions),
        format!(
            "- World split: {}",
            stats
                .world_counts
                .iter()
                .map(|r| format!("{} ({})", r.world, r.actions))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        String::new(),
    ];

    section(
        &mut lines,
        "Action Mix",
        table(
            ["Action", "Count"],
            stats
                .action_mix
                .iter()
                .map(|r| [r.action.clone(), r.actions.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Top Players (by actions)",
        table(
            ["Player", "Actions"],
            stats
                .top_players
                .iter()
                .map(|r| [r.player.clone(), r.actions.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Builders vs Breakers",
        table(
            ["Player", "Blocks Placed", "Blocks Broken"],
            stats.builders_vs_breakers.iter().map(|r| {
                [
                    r.player.clone(),
                    r.blocks_placed.to_string(),
                    r.blocks_broken.to_string(),
                ]
            }),
        ),
    );
    section(
        &mut lines,
        "Favorite Blocks Placed",
        table(
            ["Block", "Placed"],
            stats
                .favorite_blocks_placed
                .iter()
                .map(|r| [r.block.clone(), r.placed.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Deadliest Players",
        table(
            ["Player", "Kills"],
            stats
                .deadliest_players
                .iter()
                .map(|r| [r.player.clone(), r.kills.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Most Killed Mobs",
        table(
            ["Mob", "Kills"],
            stats
                .mob_kills
                .iter()
                .map(|r| [r.mob.clone(), r.kills.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Top Environmental Causes (no player)",
        table(
            ["Cause", "Events"],
            stats
                .environmental_causes
                .iter()
                .map(|r| [r.cause.clone(), r.events.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Hottest Chunks",
        table(
            ["World", "Chunk X", "Chunk Z", "Actions"],
            stats.hotspots.iter().map(|r| {
                [
                    r.world.clone(),
                    r.chunk_x.to_string(),
                    r.chunk_z.to_string(),
                    r.actions.to_string(),
                ]
            }),
        ),
    );

    lines.push("## Hourly Activity (server time)".to_string());
    lines.push(table(
        ["Hour", "Actions"],
        stats
            .hourly_activity
            .iter()
            .map(|r| [format!("{:02}", r.hour), r.actions.to_string()]),
    ));

    lines.join("\n")
}

pub fn logs_markdown(stats: &LogStats) -> String {
    let mut lines = vec!["# Minecraft Server Log Stats".to_string(), String::new()];

    section(
        &mut lines,
        "Top Playtime",
        table(
            ["Player", "Playtime", "Sessions"],
            stats.top_playtime.iter().map(|r| {
                [r.player.clone(), clock(r.seconds), r.sessions.to_string()]
            }),
        ),
    );
    section(
        &mut lines,
        "Top Advancements",
        table(
            ["Player", "Advancements"],
            stats
                .top_advancements
                .iter()
                .map(|r| [r.name.clone(), r.count.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Most Player Deaths",
        table(
            ["Player", "Deaths"],
            stats
                .top_player_deaths
                .iter()
                .map(|r| [r.player.clone(), r.deaths.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Top Death Causes",
        table(
            ["Cause", "Events"],
            stats
                .top_death_causes
                .iter()
                .map(|r| [r.cause.clone(), r.events.to_string()]),
        ),
    );
    section(
        &mut lines,
        "Top Villager Killers",
        table(
            ["Killer", "Villagers"],
            stats
                .top_villager_killers
                .iter()
                .map(|r| [r.name.clone(), r.villagers.to_string()]),
        ),
    );

    lines.push("## Connection Churn".to_string());
    lines.push(table(
        ["Player", "Disconnects", "Short Sessions"],
        stats.connection_churn.iter().map(|r| {
            [
                r.player.clone(),
                r.disconnects.to_string(),
                r.short_sessions.to_string(),
            ]
        }),
    ));

    lines.join("\n")
}
