//! Shell configuration.

use setsum_core::Setsum;

/// Configuration for a [`Shell`](crate::Shell) session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Written before each line is read, without a trailing newline.
    pub prompt: Option<String>,
    /// Stop the session on a malformed `merge`/`subtract` digest instead of
    /// reporting it and carrying on.
    pub strict: bool,
    /// Running checksum at session start.
    pub initial: Setsum,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            strict: false,
            initial: Setsum::default(),
        }
    }
}
