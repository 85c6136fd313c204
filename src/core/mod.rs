pub mod errors;
pub mod models;

pub use errors::TangoError;
pub use models::{ DatasetSummary, FilterCriteria, QuizOption, VocabEntry };
