// tabclip commands
// The cut/copy/paste operations bound to the host collaborators, plus the
// pure paste-planning step.

pub mod paste_plan;
pub mod tab_clipboard;

pub use paste_plan::{plan_paste, PasteAction, PlannedTab};
pub use tab_clipboard::{TabClipboard, RESTORE_ON_DEMAND_PREF};
