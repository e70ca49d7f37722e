//! Output sinks for generated artifacts.
//!
//! Everything downstream of the emitters is written against the single
//! `write` contract, so swapping the disk sink for the in-memory plan
//! (dry runs, tests) needs no conditional logic at the call sites.

pub mod disk;
pub mod plan;

pub use disk::DiskWriter;
pub use plan::Plan;

use anyhow::Result;

pub trait Writer {
    fn write(&mut self, filename: &str, contents: &str) -> Result<()>;
}
