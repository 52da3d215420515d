//! Key-value option storage
//!
//! The registry persists its whole mapping under a single option key, the
//! way the host platform's option table works. [`OptionStore`] is the seam:
//! the file-backed implementation is what the CLI uses, the in-memory one
//! serves embedding and tests.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use fs2::FileExt;
use serde_json::Value;

/// Persisted key-value storage for option values
pub trait OptionStore {
    /// Reads the value stored under a key, or `None` if absent
    fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Stores a value under a key, replacing any previous value
    fn write(&self, key: &str, value: Value) -> Result<()>;
}

/// File-backed option store: one JSON object per file
pub struct JsonOptionStore {
    path: PathBuf,
}

impl JsonOptionStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, Value>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open option store: {}", self.path.display()))?;

        // Shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on option store")?;

        let reader = BufReader::new(&file);
        let map = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse option store: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(map)
    }

    fn write_map(&self, map: &HashMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on option store")?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, map)
                .context("Failed to serialize option store")?;
            writer.flush().context("Failed to flush option store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

impl OptionStore for JsonOptionStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }
}

/// In-memory option store
#[derive(Default)]
pub struct MemoryOptionStore {
    options: Mutex<HashMap<String, Value>>,
}

impl MemoryOptionStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionStore for MemoryOptionStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        let options = self
            .options
            .lock()
            .map_err(|_| anyhow::anyhow!("Option store lock poisoned"))?;
        Ok(options.get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<()> {
        let mut options = self
            .options
            .lock()
            .map_err(|_| anyhow::anyhow!("Option store lock poisoned"))?;
        options.insert(key.to_string(), value);
        Ok(())
    }
}
