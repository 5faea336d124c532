/// UI components for the Tunecast site
///
/// Marketing pieces (footer, contact button) and the customer area shell.

pub mod contact_button;
pub mod footer;
pub mod header;
pub mod icons;
pub mod layout;
pub mod sidebar;
