// src/progress.rs
/// Lightweight progress reporting for the appearance pipeline.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of rows to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One row produced its appearances.
    fn item_done(&mut self, _row: usize, _subject: &str) {}

    /// One row was rejected; the error is reported separately.
    fn item_failed(&mut self, _row: usize, _subject: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
