pub mod alert;
pub mod convert;
pub mod error;
pub mod logger;
pub mod schematic;
pub mod types;

// Re-export commonly used items
pub use alert::{Alert, AlertKind, AlertMode};
pub use convert::{convert, Conversion};
pub use error::SandmaticError;
pub use logger::{log, LogSeverity};
pub use schematic::Litematic;
