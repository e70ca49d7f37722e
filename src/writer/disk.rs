//! Disk-backed sink: resolves filenames against a base directory and
//! writes them out, echoing each resolved path.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Writer;

pub struct DiskWriter {
    base_path: PathBuf,
}

impl DiskWriter {
    /// An empty `base_path` means the current working directory.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }
}

impl Writer for DiskWriter {
    fn write(&mut self, filename: &str, contents: &str) -> Result<()> {
        let output_path = self.base_path.join(filename);
        println!("{}", output_path.display());
        fs::write(&output_path, contents)
            .with_context(|| format!("Writing {}", output_path.display()))?;
        Ok(())
    }
}
