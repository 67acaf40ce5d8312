mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    EngineProvider, EngineSettings, LoggingSettings, ServerSettings, Settings, StorageSettings,
};
