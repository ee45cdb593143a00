pub mod file;
pub mod format;

pub use file::{read_transcript, write_analysis, TranscriptFile};
pub use format::{classify, TranscriptFormat};
