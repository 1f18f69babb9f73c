// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a full site build.
/// Frontends implement this to surface status to users (CLI: print lines).
pub trait Progress {
    /// Called once before writing starts, with the number of pages planned.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page lands on disk.
    fn page_done(&mut self, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
