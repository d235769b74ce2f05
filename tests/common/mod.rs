#![allow(dead_code)]

use chrono::{Local, TimeZone};
use logsetup::{LogRecord, Output};
use std::sync::{Arc, Mutex};

/// Sink that keeps every record it receives.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<LogRecord>>>);

impl Capture {
    pub fn records(&self) -> Vec<LogRecord> {
        self.0.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl Output for Capture {
    fn write(&self, record: &LogRecord) -> Result<(), logsetup::Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), logsetup::Error> {
        Ok(())
    }
}

/// Record at a fixed instant so rendered lines are predictable.
pub fn record(rank: i32, level_name: &str, caller: &str, message: &str) -> LogRecord {
    LogRecord {
        rank,
        level_name: level_name.to_string(),
        caller: caller.to_string(),
        target: "app::net".to_string(),
        message: message.to_string(),
        timestamp: Local.with_ymd_and_hms(2024, 3, 1, 14, 2, 11).unwrap(),
    }
}
