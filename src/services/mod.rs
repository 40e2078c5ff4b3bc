pub mod answer_scorer;
pub mod backend_client;
pub mod plan_generator;
pub mod plan_writer;

pub use answer_scorer::AnswerScorer;
pub use backend_client::{plan_prompt, plan_query, BackendClient, QueryBackend};
pub use plan_generator::FallbackPlanGenerator;
pub use plan_writer::PlanWriter;
