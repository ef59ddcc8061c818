//! INI-backed section store for solar-system bodies
//!
//! The store holds named sections of key/value settings in file order.
//! `upsert` replaces a section wholesale; `flush` renders the whole store
//! and replaces the backing file atomically, so a batch of upserts costs one
//! write. Sections the importer never touches survive a flush unchanged.
//!
//! The file grammar is the three-production INI subset the host reads:
//! `[section]` headers, `key = value` pairs and comment lines (`;` or `#`).
//! Comments are not part of the persistent content and do not survive a
//! rewrite.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::app::services::importer::ElementSink;
use crate::{Error, Result};

/// One named group of settings
#[derive(Debug, Clone, PartialEq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

/// Section store backed by an `ssystem.ini`-style file
///
/// Exclusively owned for the duration of a batch: opened once before the
/// first upsert, flushed once after the last.
#[derive(Debug)]
pub struct SolarSystemStore {
    path: PathBuf,
    sections: Vec<Section>,
    index: HashMap<String, usize>,
    dirty: bool,
}

impl SolarSystemStore {
    /// Open a store at the given path
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first flush. An unreadable file is a sink-unavailable error.
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            sections: Vec::new(),
            index: HashMap::new(),
            dirty: false,
        };

        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::sink_unavailable(path.display().to_string(), e.to_string()))?;
            store.load(&content);
            debug!(
                "Loaded {} sections from {}",
                store.sections.len(),
                path.display()
            );
        } else {
            debug!("No store at {}, starting empty", path.display());
        }

        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of sections currently held
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the store holds no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// True when a section with this key exists
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// The entries of a section, in write order
    pub fn section(&self, key: &str) -> Option<&[(String, String)]> {
        self.index
            .get(key)
            .map(|&idx| self.sections[idx].entries.as_slice())
    }

    /// Create or replace a section (last writer wins, no merge)
    pub fn upsert(&mut self, key: &str, fields: Vec<(String, String)>) {
        match self.index.get(key) {
            Some(&idx) => {
                self.sections[idx].entries = fields;
            }
            None => {
                self.sections.push(Section {
                    name: key.to_string(),
                    entries: fields,
                });
                self.index.insert(key.to_string(), self.sections.len() - 1);
            }
        }
        self.dirty = true;
    }

    /// Persist all pending changes in one atomic file replacement
    ///
    /// A no-op when nothing changed since the last flush.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            debug!("Store unchanged, skipping flush");
            return Ok(());
        }

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| {
            Error::sink_unavailable(self.path.display().to_string(), e.to_string())
        })?;

        // Atomic replacement: render to a sibling temp file, move into place
        let mut file = NamedTempFile::new_in(&parent).map_err(|e| {
            Error::sink_unavailable(self.path.display().to_string(), e.to_string())
        })?;
        file.write_all(self.render().as_bytes()).map_err(|e| {
            Error::sink_unavailable(self.path.display().to_string(), e.to_string())
        })?;
        file.persist(&self.path).map_err(|e| {
            Error::sink_unavailable(self.path.display().to_string(), e.to_string())
        })?;

        self.dirty = false;
        info!(
            "Wrote {} sections to {}",
            self.sections.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Parse file content into sections
    ///
    /// Duplicate headers continue the earlier section rather than replacing
    /// it; keys before the first header have no section and are dropped.
    fn load(&mut self, content: &str) {
        let mut current: Option<usize> = None;

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                current = Some(self.slot_for(name.trim()));
                continue;
            }

            if let (Some(idx), Some((key, value))) = (current, line.split_once('=')) {
                self.sections[idx]
                    .entries
                    .push((key.trim().to_string(), value.trim().to_string()));
            }
        }
    }

    fn slot_for(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
        });
        let idx = self.sections.len() - 1;
        self.index.insert(name.to_string(), idx);
        idx
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

impl ElementSink for SolarSystemStore {
    fn upsert(&mut self, key: &str, fields: Vec<(String, String)>) {
        SolarSystemStore::upsert(self, key, fields);
    }

    fn flush(&mut self) -> Result<()> {
        SolarSystemStore::flush(self)
    }
}
