mod render;
mod state;

pub use render::{render_event_dialog, EventDialogResult};
pub use state::EventDialogState;
