//! Sample server log content and writers.

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Alice plays 30 minutes and falls to her death; Bob plays twice, the second
/// session lasting 30 seconds; a named villager is slain by Alice.
pub const PRIMARY_LOG: &str = "\
[09:00:00] [Server thread/INFO]: Alice[/1.1.1.1:12345] logged in with entity id 1 at (0, 0, 0)
[09:10:00] [Server thread/INFO]: Alice has made the advancement [Stone Age]
[09:20:00] [Server thread/INFO]: Alice fell from a high place
[09:30:00] [Server thread/INFO]: Alice lost connection: Disconnected
[09:30:00] [Server thread/INFO]: Alice left the game
[10:00:00] [Server thread/INFO]: Bob[/2.2.2.2:2000] logged in with entity id 2 at (0, 0, 0)
[10:05:00] [Server thread/INFO]: Named entity class_1646['VillagerBob'/1, l='ServerLevel[world]', x=0.0, y=0.0, z=0.0] died: VillagerBob was slain by Alice
[10:10:00] [Server thread/INFO]: Bob has made the advancement [Acquire Hardware]
[10:20:00] [Server thread/INFO]: Bob lost connection: Disconnected
[10:20:00] [Server thread/INFO]: Bob left the game
[10:25:00] [Server thread/INFO]: Bob[/2.2.2.2:2001] logged in with entity id 3 at (0, 0, 0)
[10:25:30] [Server thread/INFO]: Bob lost connection: Timed out
[10:25:30] [Server thread/INFO]: Bob left the game
";

/// Charlie plays ten minutes and is killed by an enderman.
pub const CHARLIE_LOG: &str = "\
[11:00:00] [Server thread/INFO]: Charlie[/3.3.3.3:123] logged in with entity id 4 at (0, 0, 0)
[11:05:00] [Server thread/INFO]: Charlie was slain by Enderman
[11:10:00] [Server thread/INFO]: Charlie lost connection: Disconnected
[11:10:00] [Server thread/INFO]: Charlie left the game
";

/// Single twenty-minute session with one advancement.
pub const ALICE_SESSION_LOG: &str = "\
[07:00:00] [Server thread/INFO]: Alice[/1.1.1.1:12345] logged in with entity id 1 at (0, 0, 0)
[07:10:00] [Server thread/INFO]: Alice has made the advancement [Stone Age]
[07:20:00] [Server thread/INFO]: Alice lost connection: Disconnected
[07:20:00] [Server thread/INFO]: Alice left the game
";

/// Write a log file, gzip-compressing it when the name ends in `.gz`.
pub fn write_log(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if path.extension().is_some_and(|e| e == "gz") {
        let file = fs::File::create(path)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes())?;
        encoder.finish()?;
    } else {
        fs::write(path, content)?;
    }

    Ok(())
}
