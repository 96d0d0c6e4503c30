pub mod discovery;
pub mod output;
pub mod reader;
pub mod reference;
pub mod segmenter;

// Re-export main types for convenient access
pub use segmenter::{preview_split, split_text, SegmentPreview, SplitOptions, SplitPreview};

// Re-export caller-side content helpers
pub use reference::{display_reference, generate_display_references, ContentType};
