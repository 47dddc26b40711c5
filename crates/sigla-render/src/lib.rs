//! Plain-text and JSONL output rendering for assignment batches.

mod jsonl;
mod text;

pub use jsonl::JsonlWriter;
pub use text::TextWriter;
