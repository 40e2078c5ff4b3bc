pub mod quiz_loader;

pub use quiz_loader::{load_answer_map, load_quiz_file, load_source_text};
