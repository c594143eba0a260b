//! Log source discovery and line reading.

use chrono::NaiveDate;
use flate2::read::MultiGzDecoder;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::{Error, Result};

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap());

/// One log file plus the calendar day inferred from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    pub path: PathBuf,
    pub date: Option<NaiveDate>,
}

impl LogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let date = date_from_path(&path);
        Self { path, date }
    }

    pub fn is_compressed(&self) -> bool {
        self.path.extension().is_some_and(|e| e == "gz")
    }

    /// Open the source and iterate its lines from the start. Each call
    /// reopens the file. Gzip sources may hold several concatenated members.
    pub fn lines(&self) -> Result<LogLines> {
        let file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let reader: Box<dyn Read> = if self.is_compressed() {
            Box::new(MultiGzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(LogLines {
            path: self.path.clone(),
            reader: BufReader::new(reader),
            buf: Vec::new(),
            done: false,
        })
    }
}

/// Line iterator over a log source. Invalid UTF-8 is replaced rather than
/// rejected; read failures are yielded once and end the iteration.
pub struct LogLines {
    path: PathBuf,
    reader: BufReader<Box<dyn Read>>,
    buf: Vec<u8>,
    done: bool,
}

impl Iterator for LogLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => {
                self.done = true;
                Some(Err(Error::io(&self.path, err)))
            }
        }
    }
}

/// Infer the log's day from a `YYYY-MM-DD` run in the file name, e.g.
/// `2025-12-31-1.log.gz`. Only the first run is considered.
pub fn date_from_path(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_string_lossy();
    let found = DATE_REGEX.find(&name)?;
    NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d").ok()
}

fn is_log_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "log" || e == "gz")
}

/// Expand the given paths into log sources.
///
/// Directories contribute their immediate `.log` / `.gz` children sorted by
/// file name; plain file paths are taken as-is. Every path must exist.
pub fn discover_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LogSource>> {
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingPath(path.to_path_buf()));
        }
    }

    let mut sources = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let walker = WalkDir::new(path)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name();
            for entry in walker {
                let entry = entry?;
                if entry.path().is_file() && is_log_file(entry.path()) {
                    sources.push(LogSource::new(entry.into_path()));
                }
            }
        } else {
            sources.push(LogSource::new(path));
        }
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_date_from_path() {
        assert_eq!(
            date_from_path(Path::new("/logs/2025-12-31-1.log.gz")),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert_eq!(date_from_path(Path::new("/logs/latest.log")), None);
        assert_eq!(date_from_path(Path::new("2025-13-45-1.log")), None);
        // Dates in parent directories are ignored.
        assert_eq!(date_from_path(Path::new("/2024-01-01/latest.log")), None);
    }

    #[test]
    fn test_discover_sorts_and_filters_directory() {
        let temp = TempDir::new().unwrap();
        for name in ["2026-01-01-1.log.gz", "latest.log", "2025-12-31-1.log", "notes.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/2020-01-01-1.log"), "").unwrap();

        let sources = discover_sources(&[temp.path()]).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|s| s.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec!["2025-12-31-1.log", "2026-01-01-1.log.gz", "latest.log"]
        );
        assert!(sources[1].is_compressed());
    }

    #[test]
    fn test_explicit_file_ignores_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("server.txt");
        fs::write(&path, "line").unwrap();

        let sources = discover_sources(&[&path]).unwrap();
        assert_eq!(sources, vec![LogSource::new(&path)]);
    }

    #[test]
    fn test_missing_path_fails_before_scanning() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = discover_sources(&[temp.path().to_path_buf(), missing.clone()]).unwrap_err();
        assert!(matches!(err, Error::MissingPath(p) if p == missing));
    }

    #[test]
    fn test_lines_strip_endings_and_replace_bad_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latest.log");
        fs::write(&path, b"first\r\nsec\xffond\nlast").unwrap();

        let source = LogSource::new(&path);
        let lines: Vec<String> = source.lines().unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first", "sec\u{FFFD}ond", "last"]);

        // Restartable: a second call reads from the beginning again.
        assert_eq!(source.lines().unwrap().count(), 3);
    }

    #[test]
    fn test_lines_read_every_gzip_member() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2025-01-01-1.log.gz");
        let mut bytes = Vec::new();
        for chunk in ["first\n", "second\nthird\n"] {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(chunk.as_bytes()).unwrap();
            bytes.extend(encoder.finish().unwrap());
        }
        fs::write(&path, bytes).unwrap();

        let lines: Vec<String> = LogSource::new(&path)
            .lines()
            .unwrap()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }
}
