// Public API - what other modules can use
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use errors::RoundLogError;
pub use key::{parse_round_key, round_key};
pub use record::RoundRecord;
pub use service::RoundLog;

// Internal modules
mod diagnostics;
mod errors;
mod key;
mod record;
mod service;
