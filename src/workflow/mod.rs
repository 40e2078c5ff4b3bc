pub mod chat_session;
pub mod flashcard_deck;
pub mod plan_flow;
pub mod quiz_session;

pub use chat_session::{ChatMessage, ChatRole, ChatSession};
pub use flashcard_deck::{CardFace, FlashcardDeck};
pub use plan_flow::{PlanFlow, PlanOutcome, PlanSource};
pub use quiz_session::QuizSession;
