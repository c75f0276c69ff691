pub mod error;
pub mod messages;
pub mod outcome;
pub mod pagination;

pub use error::{AppError, Result};
pub use messages::{ErrorMessage, SuccessMessage};
pub use outcome::InsertOutcome;
pub use pagination::{PageQuery, PageRequest, DEFAULT_PAGE_SIZE};
