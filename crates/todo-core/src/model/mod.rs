pub mod todo;

pub use todo::{Todo, TodoDraft, DEFAULT_LIST_STATUS};
