pub mod language;
pub mod provider;
pub mod request;
pub mod result;

pub use language::{AUTO, Language, LanguageCatalog, LanguageCode, SourceLang};
pub use provider::{Credential, ProviderId};
pub use request::{InputError, TranslationRequest};
pub use result::TranslationResult;
