pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod highlight;
pub mod inject;
pub mod store;

pub use cli::{AddArgs, ApplyArgs, Cli, Command, ListArgs, OutputFormat, RemoveArgs, StripArgs};
pub use error::{Error, ExitCode, Result};
pub use highlight::{DEFAULT_COLOR, Highlight};
pub use inject::{ApplyOutcome, ApplyReport, Injector, MatchError, MatchStatus, apply};
pub use store::{HighlightStore, StoreError, StoreFile};
