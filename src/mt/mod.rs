/// Machine Translation Module
///
/// The translation service is an opaque collaborator of the resource
/// pipeline: one call translates one text, and failures come back as
/// `MtError` values for the caller to handle.
///
/// # Providers
///
/// 1. **GoogleWebTranslator** - keyless public Google Translate endpoint
/// 2. **GoogleTranslateProvider** - Cloud Translation API v2, needs an API key
/// 3. **MockTranslator** - deterministic and offline, for tests and dry runs
pub mod error;
pub mod google_translate;
pub mod google_web;
pub mod mock;
pub mod translator;

pub use error::{MtError, MtResult};
pub use google_translate::GoogleTranslateProvider;
pub use google_web::GoogleWebTranslator;
pub use mock::{MockMode, MockTranslator};
pub use translator::{AUTO_DETECT, MachineTranslator, is_auto_detect, validate_locale};
