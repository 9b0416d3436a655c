//! Client-side navigation.
//!
//! Routing uses the History API (`pushState`/`replaceState`) and a shared
//! route signal instead of full page loads. Components navigate through the
//! [`Navigate`] trait so redirect logic can be exercised without a browser.

use leptos::logging;
use leptos::prelude::*;

use crate::models::AppRoute;

/// Options for a navigation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Options for a history-replacing redirect.
    pub const fn replace() -> Self {
        Self { replace: true }
    }

    /// Options for a regular (pushing) navigation.
    pub const fn push() -> Self {
        Self { replace: false }
    }
}

/// Something that can move the application to another path.
pub trait Navigate {
    fn navigate(&self, path: &str, options: NavigateOptions);
}

/// Browser navigator backed by `window.history` and the shared route signal.
///
/// This struct is `Copy` because it only holds a signal handle.
#[derive(Clone, Copy)]
pub struct HistoryNavigator {
    route: RwSignal<AppRoute>,
}

impl HistoryNavigator {
    pub fn new(route: RwSignal<AppRoute>) -> Self {
        Self { route }
    }

    /// Route signal the navigator publishes into.
    pub fn route(&self) -> RwSignal<AppRoute> {
        self.route
    }

    /// Re-read the route from the address bar (after back/forward).
    pub fn sync_from_location(&self) {
        self.route.set(AppRoute::current());
    }
}

impl Navigate for HistoryNavigator {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let result = if options.replace {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            } else {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            };
            if result.is_err() {
                logging::warn!("history update failed for {path}");
            }
        }
        self.route.set(AppRoute::from_path(path));
    }
}

/// Get the navigator provided at the application root.
pub fn use_navigator() -> HistoryNavigator {
    use_context::<HistoryNavigator>().expect("HistoryNavigator must be provided at root")
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Navigate, NavigateOptions};

    impl<T: Navigate + ?Sized> Navigate for Rc<T> {
        fn navigate(&self, path: &str, options: NavigateOptions) {
            (**self).navigate(path, options);
        }
    }

    /// Navigator that records every call.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        calls: RefCell<Vec<(String, NavigateOptions)>>,
    }

    impl RecordingNavigator {
        pub fn calls(&self) -> Vec<(String, NavigateOptions)> {
            self.calls.borrow().clone()
        }

        pub fn is_empty(&self) -> bool {
            self.calls.borrow().is_empty()
        }
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, path: &str, options: NavigateOptions) {
            self.calls.borrow_mut().push((path.to_string(), options));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_constructors() {
        assert!(NavigateOptions::replace().replace);
        assert!(!NavigateOptions::push().replace);
        assert_eq!(NavigateOptions::default(), NavigateOptions::push());
    }
}
