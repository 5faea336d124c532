/// Dashboard route table and active-entry computation
///
/// The sidebar of the customer area is driven by a fixed table of nine entries.
/// Highlighting is exact path equality: `/wallet/history` does not light up
/// `/wallet`.

use serde::Serialize;

use crate::session::LogoutPhase;

/// Route the shell redirects to after signing out.
pub const LOGIN_ROUTE: &str = "/login";

/// Landing page of the customer area, where a fresh sign-in ends up.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

// Public marketing pages
pub const HOME_ROUTE: &str = "/";
pub const ABOUT_ROUTE: &str = "/about";
pub const SERVICES_ROUTE: &str = "/services";
pub const PRICING_ROUTE: &str = "/pricing";
pub const CONTACT_ROUTE: &str = "/contact";

/// Icon assets referenced by the shell and contact button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Dashboard,
    Upload,
    Album,
    Wallet,
    Settings,
    Copyright,
    Chart,
    Verified,
    User,
    Logout,
    WhatsApp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: Icon,
    pub path: &'static str,
}

pub const DASHBOARD_MENU: [MenuItem; 9] = [
    MenuItem { title: "Dashboard", icon: Icon::Dashboard, path: DASHBOARD_ROUTE },
    MenuItem { title: "Upload Music", icon: Icon::Upload, path: "/upload-music" },
    MenuItem { title: "My Releases", icon: Icon::Album, path: "/my-releases" },
    MenuItem { title: "Wallet", icon: Icon::Wallet, path: "/wallet" },
    MenuItem { title: "Management", icon: Icon::Settings, path: "/management" },
    MenuItem { title: "Copyright Removal", icon: Icon::Copyright, path: "/copyright-removal" },
    MenuItem { title: "Royalty Reports", icon: Icon::Chart, path: "/royalty-reports" },
    MenuItem { title: "OAC Requests", icon: Icon::Verified, path: "/oac-requests" },
    MenuItem { title: "Profile", icon: Icon::User, path: "/profile" },
];

/// A menu item paired with whether it matches the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntryState {
    pub item: MenuItem,
    pub active: bool,
}

pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    entry_path == current_path
}

pub fn menu_entries(current_path: &str) -> Vec<MenuEntryState> {
    DASHBOARD_MENU
        .iter()
        .map(|item| MenuEntryState {
            item: *item,
            active: is_active(item.path, current_path),
        })
        .collect()
}

/// What the customer area renders for the current auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAccess {
    /// Stored session not read yet
    Loading,
    Shell,
    RedirectToLogin,
}

/// Decide what the customer area shows.
///
/// While a logout is in flight the shell stays mounted even though the session
/// is already gone, so the logout flow issues the only redirect to the login
/// page.
pub fn shell_access(loaded: bool, signed_in: bool, phase: LogoutPhase) -> ShellAccess {
    if !loaded {
        ShellAccess::Loading
    } else if signed_in || phase == LogoutPhase::LoggingOut {
        ShellAccess::Shell
    } else {
        ShellAccess::RedirectToLogin
    }
}

/// Label shown in the top bar; an absent email renders as an empty string.
pub fn display_email(email: Option<&str>) -> String {
    email.unwrap_or_default().to_string()
}

/// Everything the shell needs to render for a given location and user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub entries: Vec<MenuEntryState>,
    pub user_label: String,
}

impl ShellView {
    pub fn new(current_path: &str, email: Option<&str>) -> Self {
        Self {
            entries: menu_entries(current_path),
            user_label: display_email(email),
        }
    }

    pub fn active_entry(&self) -> Option<&MenuItem> {
        self.entries.iter().find(|e| e.active).map(|e| &e.item)
    }

    /// Page heading for the top bar, the active entry's title if any.
    pub fn heading(&self) -> &'static str {
        self.active_entry().map(|item| item.title).unwrap_or("Dashboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_paths_are_unique() {
        let paths: HashSet<_> = DASHBOARD_MENU.iter().map(|item| item.path).collect();
        assert_eq!(paths.len(), DASHBOARD_MENU.len());
        assert!(!paths.contains(LOGIN_ROUTE));
    }

    #[test]
    fn test_route_table_order() {
        let paths: Vec<_> = DASHBOARD_MENU.iter().map(|item| item.path).collect();
        assert_eq!(
            paths,
            vec![
                "/dashboard",
                "/upload-music",
                "/my-releases",
                "/wallet",
                "/management",
                "/copyright-removal",
                "/royalty-reports",
                "/oac-requests",
                "/profile",
            ]
        );
    }

    #[test]
    fn test_each_path_activates_exactly_its_entry() {
        for (index, item) in DASHBOARD_MENU.iter().enumerate() {
            let entries = menu_entries(item.path);
            assert_eq!(entries.len(), 9);
            for (i, entry) in entries.iter().enumerate() {
                assert_eq!(entry.active, i == index, "path {} entry {}", item.path, entry.item.path);
            }
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(menu_entries("/wallet/history").iter().all(|e| !e.active));
        assert!(menu_entries("/").iter().all(|e| !e.active));
        assert!(menu_entries("/Dashboard").iter().all(|e| !e.active));
        assert!(!is_active("/profile", "/profile/"));
    }

    #[test]
    fn test_display_email() {
        assert_eq!(display_email(None), "");
        assert_eq!(display_email(Some("artist@example.com")), "artist@example.com");
    }

    #[test]
    fn test_shell_view_is_idempotent() {
        let first = ShellView::new("/wallet", Some("artist@example.com"));
        let second = ShellView::new("/wallet", Some("artist@example.com"));
        assert_eq!(first, second);
        assert_eq!(first.heading(), "Wallet");
        assert_eq!(first.user_label, "artist@example.com");
    }

    #[test]
    fn test_shell_view_without_session() {
        let view = ShellView::new("/unknown", None);
        assert_eq!(view.user_label, "");
        assert!(view.active_entry().is_none());
        assert_eq!(view.heading(), "Dashboard");
    }

    #[test]
    fn test_shell_access() {
        assert_eq!(shell_access(false, true, LogoutPhase::Idle), ShellAccess::Loading);
        assert_eq!(shell_access(true, true, LogoutPhase::Idle), ShellAccess::Shell);
        assert_eq!(shell_access(true, false, LogoutPhase::Idle), ShellAccess::RedirectToLogin);
    }

    #[test]
    fn test_shell_stays_mounted_while_logging_out() {
        // Session cleared mid-logout must not trigger the guard's own redirect
        assert_eq!(shell_access(true, false, LogoutPhase::LoggingOut), ShellAccess::Shell);
        assert_eq!(shell_access(true, true, LogoutPhase::LoggingOut), ShellAccess::Shell);
    }
}
