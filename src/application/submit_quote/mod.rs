pub mod dto;
pub mod use_case;

pub use dto::{SubmitQuoteRequest, SubmitQuoteResponse};
pub use use_case::{
    BELOW_MINIMUM, INVALID_QUANTITY, MISSING_FIELDS, SubmitQuoteUseCase, VERIFICATION_FAILED,
    VERIFICATION_REQUIRED,
};
