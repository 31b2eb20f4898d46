// src/progress.rs
/// Lightweight progress reporting for the fetch → render pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first stage.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something the user should know about that did not stop the run.
    fn warn(&mut self, _msg: &str) {}

    /// A pipeline stage finished; `fraction` is in `0.0..=1.0`.
    fn stage(&mut self, _fraction: f32, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
