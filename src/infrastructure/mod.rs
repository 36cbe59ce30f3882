pub mod logging;
pub mod error_logging;
pub mod outputs;

pub use logging::{Logger, LoggerTrait};
pub use error_logging::{ErrorLogger, ErrorType};
pub use outputs::OutputWriter;
