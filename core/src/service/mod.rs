pub mod board_service;
pub mod draft;

pub use board_service::BoardService;
pub use draft::{DraftError, TaskDraft, DRAFT_KEYS};
