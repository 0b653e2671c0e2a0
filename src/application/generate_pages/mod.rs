pub mod dto;
pub mod use_case;

pub use dto::{GeneratePagesRequest, GenerationReport};
pub use use_case::GeneratePagesUseCase;
