pub mod confidence_tracker;
pub mod difficulty_adapter;
pub mod generation_service;
pub mod insight_generator;
pub mod question_parser;

pub use confidence_tracker::ConfidenceTracker;
pub use difficulty_adapter::DifficultyAdapter;
pub use generation_service::GenerationService;
pub use insight_generator::InsightGenerator;
pub use question_parser::QuestionParser;
