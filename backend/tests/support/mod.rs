#![allow(dead_code)]

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use accident_explorer::config::DefaultSettings;
use accident_explorer::data::{Dataset, DatasetLoader};
use accident_explorer::services::Dashboard;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const SEVERITIES: [&str; 3] = ["Slight", "Serious", "Fatal"];
pub const DAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
pub const WEATHER: [&str; 2] = ["Fine no high winds", "Raining no high winds"];

/// CSV text with `rows` valid accidents plus `broken` rows with unusable coordinates.
///
/// Row `i` is deterministic: severity `i % 3`, day `i % 7`, hour `i % 24`.
pub fn accident_csv(rows: usize, broken: usize) -> String {
    let mut out = String::from(
        "accident_severity,day_of_week,weather_conditions,accident_time,number_of_vehicles,latitude,longitude\n",
    );
    for i in 0..rows {
        let _ = writeln!(
            out,
            "{},{},{},{:02}:{:02},{},{:.4},{:.4}",
            SEVERITIES[i % 3],
            DAYS[i % 7],
            WEATHER[i % 2],
            i % 24,
            (i * 7) % 60,
            1 + i % 4,
            50.0 + (i % 80) as f64 * 0.05,
            -4.0 + (i % 60) as f64 * 0.05,
        );
    }
    for _ in 0..broken {
        out.push_str("Slight,Monday,Fine no high winds,10:00,1,not-a-number,\n");
    }
    out
}

/// Write `accident_csv(rows, broken)` into `dir` and return its path.
pub fn write_accident_csv(dir: &Path, rows: usize, broken: usize) -> PathBuf {
    let path = dir.join("accidents.csv");
    std::fs::write(&path, accident_csv(rows, broken)).expect("write fixture");
    path
}

pub fn accident_dataset(rows: usize) -> Arc<Dataset> {
    let dataset =
        DatasetLoader::parse_csv(accident_csv(rows, 0).as_bytes()).expect("parse fixture");
    Arc::new(dataset)
}

pub fn accident_dashboard(rows: usize) -> Dashboard {
    Dashboard::new(accident_dataset(rows), 42, &DefaultSettings::default()).expect("dashboard")
}
