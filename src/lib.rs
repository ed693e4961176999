//! tabclip — cut, copy and paste browser tabs through the system clipboard.
//!
//! Tab URLs are encoded as separator-joined text on copy; pasted text is
//! scanned for well-formed URLs which are reopened as new tabs behind a
//! reference tab. Host browser services (clipboard, tab strip, preferences,
//! session persistence) are modeled as traits in [`host`] so every operation
//! is testable without a live browser.

pub mod codec;
pub mod commands;
pub mod host;
pub mod platform;
pub mod types;
