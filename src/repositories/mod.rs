//! Repository layer for the question log
//!
//! The service layer only talks to [`QuestionRepository`]; the JSON file
//! implementation is selected in `main` and injected through `AppState`.

pub mod question_log;
pub mod traits;

pub use question_log::JsonQuestionLog;
pub use traits::QuestionRepository;
