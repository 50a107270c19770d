pub mod logging;

pub use logging::{LOG_ENV_VAR, init_tracing};
