use std::fmt::Debug;

/// Where field-validation diagnostics live and how long they last. A batch
/// is only accepted while the scope holds no errors.
pub trait ErrorScope: Debug + Send {
    fn begin_batch(&mut self);
    fn record(&mut self, message: String);
    fn has_errors(&self) -> bool;
    fn messages(&self) -> Vec<String>;
}

/// Keeps every diagnostic for the lifetime of the elevator. Once anything
/// has been recorded, every later batch is rejected as well.
#[derive(Debug, Default)]
pub struct LifetimeErrors {
    messages: Vec<String>,
}

impl ErrorScope for LifetimeErrors {
    fn begin_batch(&mut self) {}

    fn record(&mut self, message: String) {
        if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    fn messages(&self) -> Vec<String> {
        self.messages.clone()
    }
}

/// Forgets diagnostics at the start of each batch.
#[derive(Debug, Default)]
pub struct BatchErrors {
    inner: LifetimeErrors,
}

impl ErrorScope for BatchErrors {
    fn begin_batch(&mut self) {
        self.inner.messages.clear();
    }

    fn record(&mut self, message: String) {
        self.inner.record(message);
    }

    fn has_errors(&self) -> bool {
        self.inner.has_errors()
    }

    fn messages(&self) -> Vec<String> {
        self.inner.messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_scope_deduplicates_and_persists() {
        let mut scope = LifetimeErrors::default();
        scope.begin_batch();
        scope.record("a".into());
        scope.record("b".into());
        scope.record("a".into());
        scope.begin_batch();
        assert!(scope.has_errors());
        assert_eq!(scope.messages(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn batch_scope_clears() {
        let mut scope = BatchErrors::default();
        scope.begin_batch();
        scope.record("a".into());
        assert!(scope.has_errors());
        scope.begin_batch();
        assert!(!scope.has_errors());
        assert!(scope.messages().is_empty());
    }
}
