//! Page change subscriber trait

use super::PageChange;

/// Trait for components that need to respond to committed page changes
pub trait PageSubscriber: Send + Sync {
    /// Called once for every committed page transition
    fn on_page_change(&self, change: PageChange);
}

/// Subscriber backed by a closure
pub struct FnSubscriber<F> {
    handler: F,
}

impl<F> PageSubscriber for FnSubscriber<F>
where
    F: Fn(PageChange) + Send + Sync,
{
    fn on_page_change(&self, change: PageChange) {
        (self.handler)(change);
    }
}

/// Create a page subscriber from a closure
pub fn subscriber_from_fn<F>(f: F) -> FnSubscriber<F>
where
    F: Fn(PageChange) + Send + Sync + 'static,
{
    FnSubscriber { handler: f }
}
