//! Dry-run sink: collects would-be writes in memory instead of touching
//! the filesystem.

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use super::Writer;

/// Accumulated output of a dry run, in write order. A repeated filename
/// overwrites the earlier entry.
#[derive(Debug, Default, Serialize)]
pub struct Plan {
    pub files_to_write: IndexMap<String, String>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Writer for Plan {
    fn write(&mut self, filename: &str, contents: &str) -> Result<()> {
        self.files_to_write
            .insert(filename.to_string(), contents.to_string());
        Ok(())
    }
}
