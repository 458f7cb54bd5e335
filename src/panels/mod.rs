mod central_panel;
mod toolbar_panel;

pub use central_panel::{central_panel, status_panel};
pub use toolbar_panel::toolbar_panel;
