//! Tail access to the append-only log file.

use std::{fs, path::Path};

/// Number of lines `/logs/live` returns.
pub(crate) const LOG_TAIL_LINES: usize = 10;
/// Body served while the log file has not been created yet.
pub(crate) const NO_LOGS_PLACEHOLDER: &str = "No logs available";

/// Last `limit` lines of the file, oldest first.
///
/// `None` when the file is missing or unreadable; an existing empty file is
/// an empty tail, not an error.
pub(crate) fn tail_lines(path: &Path, limit: usize) -> Option<Vec<String>> {
    let content = fs::read_to_string(path).ok()?;
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(limit);
    Some(lines[start..].iter().map(|line| line.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn log_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp log file");
        for line in lines {
            writeln!(file, "{line}").expect("write log line");
        }
        file
    }

    #[test]
    fn short_files_return_every_line_in_order() {
        let file = log_file(&["first", "second", "third"]);
        let tail = tail_lines(file.path(), LOG_TAIL_LINES).unwrap();
        assert_eq!(tail, ["first", "second", "third"]);
    }

    #[test]
    fn long_files_return_only_the_last_lines() {
        let lines: Vec<String> = (0..25).map(|n| format!("line {n}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = log_file(&refs);
        let tail = tail_lines(file.path(), LOG_TAIL_LINES).unwrap();
        assert_eq!(tail.len(), LOG_TAIL_LINES);
        assert_eq!(tail.first().unwrap(), "line 15");
        assert_eq!(tail.last().unwrap(), "line 24");
    }

    #[test]
    fn empty_file_is_an_empty_tail() {
        let file = log_file(&[]);
        let tail = tail_lines(file.path(), LOG_TAIL_LINES).unwrap();
        assert!(tail.is_empty());
        assert_eq!(tail.join("<br>"), "");
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(tail_lines(&dir.path().join("absent.log"), LOG_TAIL_LINES).is_none());
    }
}
