// tabclip tab-serialization protocol
// encoder: ordered tab URLs -> clipboard text.
// extractor: arbitrary clipboard text -> ordered URL matches.

pub mod encoder;
pub mod extractor;
