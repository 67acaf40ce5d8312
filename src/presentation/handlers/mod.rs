mod error;
mod health;
mod root;
mod translate;
mod translation_form;

pub use error::{ErrorResponse, error_response, status_for};
pub use health::{HealthChecks, HealthResponse, health_handler};
pub use root::{WELCOME_MESSAGE, WelcomeResponse, root_handler};
pub use translate::{process_handler, process_memory_handler};
pub use translation_form::{parse_speaker_id, read_translation_form};
