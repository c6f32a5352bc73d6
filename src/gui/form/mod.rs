//! The Slack settings form.
//!
//! Split the same way the rest of the GUI is: state (editable fields and
//! validation), panel (top-level render), helpers (shared widgets), and the
//! notification-type selector.

mod helpers;
mod panel;
mod state;
mod types_select;

pub use panel::{FormAction, FormPanelState, render_settings_panel};
pub use state::{LoadState, SlackForm};
