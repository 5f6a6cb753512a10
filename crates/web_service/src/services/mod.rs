pub mod retry;
pub mod subtask_generator;
pub mod token_service;

pub use subtask_generator::SubtaskGenerator;
pub use token_service::TokenServiceClient;
