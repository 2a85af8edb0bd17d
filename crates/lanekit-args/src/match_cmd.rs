//! `fastlane match` — certificate and provisioning-profile syncing.
//!
//! Option reference: <https://github.com/fastlane/fastlane/blob/master/match/lib/match/options.rb>

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::{non_blank, ArgumentList};
use crate::env::Environment;
use crate::LaneCommand;

/// The certificate type match syncs, emitted as a positional token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    Development,
    AdHoc,
    AppStore,
    Enterprise,
}

impl CertificateType {
    /// The lowercase literal fastlane expects.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::AdHoc => "adhoc",
            Self::AppStore => "appstore",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Configuration for one `match` invocation.
///
/// Every field is optional; an all-default configuration serializes to the
/// bare `match` token. The keychain password is a secret field and is only
/// ever emitted as the redaction placeholder — fastlane itself reads the
/// real value from `MATCH_KEYCHAIN_PASSWORD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub certificate_type: Option<CertificateType>,
    /// Apple ID username.
    pub username: Option<String>,
    /// Bundle identifier(s), comma-separated.
    pub app_identifier: Option<String>,
    /// Keychain to import the synced items into.
    pub keychain_name: Option<String>,
    /// Password of that keychain. Secret; never emitted in plaintext.
    pub keychain_password: Option<String>,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    /// Git repository holding the certificates.
    pub git_url: Option<String>,
    pub git_branch: Option<String>,
    /// Provisioning profile platform, e.g. `ios` or `tvos`.
    pub platform: Option<String>,
    /// Renew the provisioning profiles every run.
    pub force: bool,
    /// Renew when the device count on the developer portal changed.
    pub force_for_new_devices: bool,
    pub readonly: bool,
    /// Truncate the clone history to one revision.
    pub shallow_clone: bool,
    /// Clone only the configured branch; it must already exist.
    pub clone_branch_directly: bool,
    /// Answer nuke confirmation prompts with yes.
    pub skip_confirmation: bool,
    /// Skip README generation in the certificates repository.
    pub skip_docs: bool,
    pub verbose: bool,
    pub workspace: Option<PathBuf>,
}

impl LaneCommand for MatchConfig {
    fn args(&self, env: &Environment) -> ArgumentList {
        let mut args = ArgumentList::new("match");

        if let Some(certificate_type) = self.certificate_type {
            args.push(certificate_type.literal());
        }
        if let Some(username) = non_blank(self.username.as_ref()) {
            args.push_switch("-u", username);
        }
        if let Some(app_identifier) = non_blank(self.app_identifier.as_ref()) {
            args.push_switch("-a", app_identifier);
        }
        if let Some(keychain_name) = non_blank(self.keychain_name.as_ref()) {
            args.push_switch("-s", keychain_name);
        }
        if non_blank(self.keychain_password.as_ref()).is_some() {
            args.push_switch_secret("-p");
        }
        if let Some(team_id) = non_blank(self.team_id.as_ref()) {
            args.push_switch("-b", team_id);
        }
        if let Some(team_name) = non_blank(self.team_name.as_ref()) {
            args.push_switch("-l", team_name);
        }
        if let Some(git_url) = non_blank(self.git_url.as_ref()) {
            args.push_switch("-r", git_url);
        }
        if let Some(git_branch) = non_blank(self.git_branch.as_ref()) {
            args.push_switch("--git_branch", git_branch);
        }
        if let Some(platform) = non_blank(self.platform.as_ref()) {
            args.push_switch("-o", platform);
        }
        if self.force {
            args.push("--force");
        }
        if self.force_for_new_devices {
            args.push("--force_for_new_devices");
        }
        if self.readonly {
            args.push("--readonly");
        }
        if self.shallow_clone {
            args.push("--shallow_clone");
        }
        if self.clone_branch_directly {
            args.push("--clone_branch_directly");
        }
        if self.skip_confirmation {
            args.push("--skip_confirmation");
        }
        if self.skip_docs {
            args.push("--skip_docs");
        }
        if self.verbose {
            args.push("--verbose");
        }
        if let Some(workspace) = &self.workspace {
            args.push_switch_quoted("--workspace", &env.absolute_str(workspace));
        }

        args
    }
}
