pub mod dashboard;
pub mod reservation_form;
pub mod route;
pub mod search;
pub mod seat;
pub mod table_form;

#[cfg(test)]
pub(crate) mod testing;

use tokio_util::sync::CancellationToken;

pub use dashboard::{DashboardState, DashboardView};
pub use reservation_form::{FormMode, ReservationFormView};
pub use route::Route;
pub use search::SearchView;
pub use seat::SeatView;
pub use table_form::TableFormView;

// Lifetime of a mounted view. Dropping it cancels everything still in flight.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn handle(&self) -> ViewHandle {
        ViewHandle {
            token: self.token.clone(),
        }
    }

    pub fn is_unmounted(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[derive(Debug, Clone)]
pub struct ViewHandle {
    token: CancellationToken,
}

impl ViewHandle {
    pub fn unmount(&self) {
        self.token.cancel();
    }
}

pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Declined,
    Completed,
    Aborted,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Navigate(Route),
    Aborted,
    Failed(String),
}

#[derive(Debug, PartialEq)]
pub enum Listing<'a, T> {
    Items(Vec<&'a T>),
    NotFound,
}

impl<'a, T> Listing<'a, T> {
    pub fn from_items(items: Vec<&'a T>) -> Self {
        if items.is_empty() {
            Listing::NotFound
        } else {
            Listing::Items(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_cancels_request_tokens() {
        let scope = ViewScope::new();
        let token = scope.request_token();
        drop(scope);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_request_tokens_cancel_independently() {
        let scope = ViewScope::new();
        let first = scope.request_token();
        let second = scope.request_token();
        first.cancel();
        assert!(!second.is_cancelled());
        assert!(!scope.is_unmounted());
    }

    #[test]
    fn test_handle_unmounts() {
        let scope = ViewScope::new();
        scope.handle().unmount();
        assert!(scope.is_unmounted());
    }

    #[test]
    fn test_empty_listing_is_not_found() {
        let items: Vec<&u8> = Vec::new();
        assert_eq!(Listing::from_items(items), Listing::NotFound);
    }
}
