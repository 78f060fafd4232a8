pub mod interface;
pub mod lang;
pub mod google;
pub mod factory;

pub use interface::{TranslateInterface, TranslationRequest, TranslationResponse};
pub use lang::normalize_lang;
pub use factory::TranslateFactory;
