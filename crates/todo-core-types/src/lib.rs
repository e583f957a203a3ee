//! Leaf types for the todo service
//!
//! Kept free of domain logic so that the logging facility, the store and
//! the HTTP layer can all depend on them: request correlation ids, the log
//! field vocabulary, and the `Sensitive<T>` wrapper for secrets.

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
