// tabclip host collaborators
// Traits for the services a host browser injects (clipboard, tab strip,
// preferences, session persistence), plus in-memory implementations used by
// tests and the demo binary.

pub mod clipboard;
pub mod prefs;
pub mod session_store;
pub mod tab_strip;
