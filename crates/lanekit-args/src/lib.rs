//! Typed configurations for fastlane subcommands and their command-line
//! serialization.
//!
//! Each subcommand gets one flat configuration struct; serializing it yields
//! an [`ArgumentList`] whose first token is the subcommand keyword, followed
//! by the populated fields in a fixed, documented order. Unset fields emit
//! nothing. Secret fields are always rendered as the `[REDACTED]`
//! placeholder; fastlane reads the real values from its own environment
//! variables (e.g. `FASTLANE_PASSWORD`, `MATCH_PASSWORD`).

pub mod builder;
pub mod deliver;
pub mod env;
pub mod match_cmd;
pub mod pem;
pub mod pilot;
pub mod supply;
pub mod update;

pub use builder::{ArgumentList, REDACTED};
pub use deliver::DeliverConfig;
pub use env::Environment;
pub use match_cmd::{CertificateType, MatchConfig};
pub use pem::PemConfig;
pub use pilot::{PilotCommand, PilotConfig};
pub use supply::SupplyConfig;
pub use update::UpdateConfig;

/// A configuration that serializes to one fastlane invocation.
///
/// Serialization is deterministic: the same configuration always yields the
/// same token sequence, and the only collaborator consulted is the
/// [`Environment`] used to absolutize path fields.
pub trait LaneCommand {
    /// Build the ordered token sequence for this invocation.
    fn args(&self, env: &Environment) -> ArgumentList;
}
