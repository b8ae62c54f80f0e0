//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "hrdesk";
const APPLICATION: &str = "hr-console";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for regenerable data such as logs.
///
/// - Linux: `$XDG_CACHE_HOME/hr-console` or `~/.cache/hr-console`
/// - macOS: `~/Library/Caches/dev.hrdesk.hr-console`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory for configuration files.
///
/// - Linux: `$XDG_CONFIG_HOME/hr-console` or `~/.config/hr-console`
/// - macOS: `~/Library/Application Support/dev.hrdesk.hr-console`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Path to the current log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous `latest.log` under a timestamp and prune old logs.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, chrono::Local::now());
}

pub(crate) fn rotate_logs_in<Tz>(dir: &Path, now: chrono::DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let archived = dir.join(format!("{}.log", now.format("%Y%m%d_%H%M%S")));
        if let Err(e) = fs::rename(&latest, &archived) {
            eprintln!("could not archive {}: {e}", latest.display());
        }
    }
    cleanup_old_logs(dir);
}

/// Remove archived logs beyond the newest `MAX_OLD_LOGS`.
fn cleanup_old_logs(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Archive names sort by timestamp, oldest first.
    logs.sort_by_key(|e| e.file_name());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "old run").unwrap();

        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        rotate_logs_in(dir.path(), now);

        assert!(!dir.path().join(LATEST_LOG).exists());
        let archived = dir.path().join("20260102_030405.log");
        assert_eq!(fs::read_to_string(archived).unwrap(), "old run");
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..(MAX_OLD_LOGS + 3) {
            fs::write(dir.path().join(format!("20260101_0000{i:02}.log")), "").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        cleanup_old_logs(dir.path());

        let remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".log"))
            .collect();
        assert_eq!(remaining.len(), MAX_OLD_LOGS);
        assert!(!remaining.contains(&"20260101_000000.log".to_string()));
        assert!(dir.path().join("notes.txt").exists());
    }
}
