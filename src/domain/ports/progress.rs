//! Progress Port
//!
//! A progress indicator around a single long-running call.
//!
//! Implementations can be:
//! - TerminalProgress: animated spinner on a TTY, static lines otherwise
//! - NoopProgress: JSON mode and tests

/// Trait for progress indicators
pub trait Progress {
    /// Show the indicator with `label`.
    fn start(&mut self, label: &str);

    /// Stop the indicator, marking the operation as successful.
    fn succeed(&mut self, label: &str);

    /// Stop the indicator, marking the operation as failed.
    fn fail(&mut self, label: &str);
}

/// Progress indicator that renders nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl Progress for NoopProgress {
    fn start(&mut self, _label: &str) {}

    fn succeed(&mut self, _label: &str) {}

    fn fail(&mut self, _label: &str) {}
}

impl<T: Progress + ?Sized> Progress for Box<T> {
    fn start(&mut self, label: &str) {
        (**self).start(label)
    }

    fn succeed(&mut self, label: &str) {
        (**self).succeed(label)
    }

    fn fail(&mut self, label: &str) {
        (**self).fail(label)
    }
}
