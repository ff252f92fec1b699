pub mod reader;
pub mod writer;

pub use reader::read_words;
pub use writer::ResultSheet;
