pub mod question;

pub use question::{Difficulty, QuestionRecord};
