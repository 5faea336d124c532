/// `Navigator` backed by the Leptos router

use std::rc::Rc;

use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};
use tracing::debug;

use tunecast_common::session::Navigator;

#[derive(Clone)]
pub struct RouterNavigator {
    pathname: Memo<String>,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called inside a component rendered under `<Router>`.
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            pathname: use_location().pathname,
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    /// Tracked read, so callers inside reactive closures rerun on navigation.
    fn current_path(&self) -> String {
        self.pathname.get()
    }

    fn navigate(&self, path: &str) {
        debug!(path = path, "Navigating");
        (self.navigate)(path, NavigateOptions::default());
    }
}
