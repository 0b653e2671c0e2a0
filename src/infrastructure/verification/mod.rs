pub mod traits;
pub mod turnstile;

pub use traits::BotVerifier;
pub use turnstile::TurnstileVerifier;
