pub mod errors;
pub mod logging;
pub mod rewrite;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rewrite::{ResponseRuleConfig, RewriteConfig};
pub use root::{CliOverrides, Config};
