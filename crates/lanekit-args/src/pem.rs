//! `fastlane pem` — push-notification certificate generation.
//!
//! Option reference: <https://github.com/fastlane/fastlane/blob/master/pem/lib/pem/options.rb>

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::{non_blank, ArgumentList};
use crate::env::Environment;
use crate::LaneCommand;

/// Upstream default for `--active_days_limit`. A limit equal to this value
/// is suppressed from the emitted arguments; fastlane applies it on its own.
pub const DEFAULT_ACTIVE_DAYS_LIMIT: u32 = 30;

/// Configuration for one `pem` invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PemConfig {
    /// Renew the development push certificate instead of the production one.
    pub development: bool,
    /// Generate a new certificate if the current one is active for fewer
    /// than this many days. Emitted only when different from
    /// [`DEFAULT_ACTIVE_DAYS_LIMIT`].
    pub active_days_limit: Option<u32>,
    /// Additionally generate a p12 file.
    pub generate_p12: bool,
    /// Create a new certificate even while the current one is still active.
    pub force: bool,
    /// Save the private RSA key.
    pub save_private_key: bool,
    pub app_identifier: Option<String>,
    /// Apple ID username.
    pub username: Option<String>,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    /// Password for the generated p12. Secret; never emitted in plaintext.
    pub p12_password: Option<String>,
    /// File name for the generated .pem.
    pub pem_name: Option<String>,
    /// Directory the certificates and keys are written to.
    pub output_path: Option<PathBuf>,
}

impl LaneCommand for PemConfig {
    fn args(&self, env: &Environment) -> ArgumentList {
        let mut args = ArgumentList::new("pem");

        if self.development {
            args.push("--development");
        }
        if let Some(limit) = self.active_days_limit {
            if limit != DEFAULT_ACTIVE_DAYS_LIMIT {
                args.push_switch("--active_days_limit", &limit.to_string());
            }
        }
        if self.generate_p12 {
            args.push("--generate_p12");
        }
        if self.force {
            args.push("--force");
        }
        if self.save_private_key {
            args.push("--save_private_key");
        }
        if let Some(app_identifier) = non_blank(self.app_identifier.as_ref()) {
            args.push_switch("--app_identifier", app_identifier);
        }
        if let Some(username) = non_blank(self.username.as_ref()) {
            args.push_switch("-u", username);
        }
        if let Some(team_id) = non_blank(self.team_id.as_ref()) {
            args.push_switch("-b", team_id);
        }
        if let Some(team_name) = non_blank(self.team_name.as_ref()) {
            args.push_switch("-l", team_name);
        }
        if non_blank(self.p12_password.as_ref()).is_some() {
            args.push_switch_secret("--p12_password");
        }
        if let Some(pem_name) = non_blank(self.pem_name.as_ref()) {
            args.push_switch("--pem_name", pem_name);
        }
        if let Some(output_path) = &self.output_path {
            args.push_switch_quoted("--output_path", &env.absolute_str(output_path));
        }

        args
    }
}
