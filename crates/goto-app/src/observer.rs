//! Visibility observer slot

/// Receives the surface's own visibility reports (`shownChanged`).
///
/// The controller only keeps a `Weak` reference to an observer. Dropping the
/// last `Rc` silently unsubscribes it.
pub trait VisibilityObserver {
    fn on_visibility_changed(&self, shown: bool);
}

impl<F> VisibilityObserver for F
where
    F: Fn(bool),
{
    fn on_visibility_changed(&self, shown: bool) {
        self(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_is_observer() {
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let observer = move |shown: bool| sink.set(Some(shown));

        observer.on_visibility_changed(true);
        assert_eq!(seen.get(), Some(true));
    }
}
