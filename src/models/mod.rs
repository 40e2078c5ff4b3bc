pub mod backend;
pub mod flashcard;
pub mod loaders;
pub mod plan;
pub mod quiz;
pub mod summary;

pub use backend::{DocumentInfo, FeedbackRequest, QueryMode, QueryRequest, QueryResponse};
pub use flashcard::Flashcard;
pub use loaders::{load_answer_map, load_quiz_file, load_source_text};
pub use plan::{Phase, PhaseBlock, PlanDocument, PlanRequest, StudyDay};
pub use quiz::{AnswerKey, AnswerMap, QuizItem, ScoreResult};
pub use summary::SummaryStyle;
