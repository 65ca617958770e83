pub mod http;
pub mod traits;

// Re-export
pub use http::{HttpTaskStore, DEFAULT_BASE_URL};
pub use traits::{Ack, TaskStore};
