//! Dated file sink: `<prefix><YYYYMMDD>.log`, opened once at configuration time.

use crate::fmt::Formatter;

use super::{LogRecord, Output};
use chrono::{Local, NaiveDate};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<File>,
    formatter: Formatter,
}

/// `<prefix><YYYYMMDD>.log`; an empty prefix means the working directory.
/// A leading `~` in the prefix is expanded.
#[must_use]
pub fn dated_path(prefix: &str, date: NaiveDate) -> PathBuf {
    let prefix = shellexpand::tilde(prefix);
    PathBuf::from(format!("{prefix}{}.log", date.format("%Y%m%d")))
}

impl FileOutput {
    /// Opens today's file in append mode, creating missing parent directories.
    ///
    /// # Errors
    /// Directory creation or file open failures.
    pub fn open(prefix: &str, formatter: Formatter) -> Result<Self, crate::Error> {
        let path = dated_path(prefix, Local::now().date_naive());
        Self::open_path(path, formatter)
    }

    /// Opens an explicit path, bypassing the date naming.
    ///
    /// # Errors
    /// Directory creation or file open failures.
    pub fn open_path(path: impl Into<PathBuf>, formatter: Formatter) -> Result<Self, crate::Error> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            formatter,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        // Single write per line keeps records whole when several threads log.
        let mut line = self.formatter.format(record);
        line.push('\n');

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
