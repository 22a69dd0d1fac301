use crate::levels::Severity;
use crate::logger::LevelLogger;

/// RAII guard that temporarily overrides a [`LevelLogger`]'s threshold.
///
/// Created by [`LevelLogger::scoped_threshold`]. Dropping the guard restores
/// the threshold that was in effect before the override, even if another
/// caller changed it in the meantime.
#[must_use = "dropping the guard immediately restores the previous threshold"]
#[derive(Debug)]
pub struct ThresholdGuard<'a> {
    logger: Option<&'a LevelLogger>,
    previous: Severity,
}

impl<'a> ThresholdGuard<'a> {
    pub(crate) const fn new(logger: &'a LevelLogger, previous: Severity) -> Self {
        Self {
            logger: Some(logger),
            previous,
        }
    }

    /// Returns the threshold that will be restored when the guard is dropped.
    #[must_use]
    pub const fn previous_threshold(&self) -> Severity {
        self.previous
    }

    /// Consumes the guard without restoring the previous threshold.
    ///
    /// ```
    /// use logging::{LevelLogger, Severity};
    ///
    /// let logger = LevelLogger::new();
    /// logger.scoped_threshold(Severity::Warning).persist();
    /// assert_eq!(logger.threshold(), Severity::Warning);
    /// ```
    pub fn persist(mut self) {
        self.logger = None;
    }
}

impl Drop for ThresholdGuard<'_> {
    fn drop(&mut self) {
        if let Some(logger) = self.logger.take() {
            logger.set_threshold(self.previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_restores_previous_threshold() {
        let logger = LevelLogger::new();
        logger.set_threshold(Severity::Info);
        {
            let guard = logger.scoped_threshold(Severity::Fatal);
            assert_eq!(guard.previous_threshold(), Severity::Info);
            assert_eq!(logger.threshold(), Severity::Fatal);
        }
        assert_eq!(logger.threshold(), Severity::Info);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let logger = LevelLogger::new();
        {
            let _outer = logger.scoped_threshold(Severity::Warning);
            {
                let _inner = logger.scoped_threshold(Severity::Error);
                assert_eq!(logger.threshold(), Severity::Error);
            }
            assert_eq!(logger.threshold(), Severity::Warning);
        }
        assert_eq!(logger.threshold(), Severity::Debug);
    }

    #[test]
    fn persist_keeps_override() {
        let logger = LevelLogger::new();
        logger.scoped_threshold(Severity::Error).persist();
        assert_eq!(logger.threshold(), Severity::Error);
    }
}
