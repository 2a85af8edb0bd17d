//! `fastlane pilot` — TestFlight beta distribution.
//!
//! Option reference: <https://github.com/fastlane/fastlane/blob/master/pilot/lib/pilot/options.rb>

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::{non_blank, ArgumentList};
use crate::env::Environment;
use crate::LaneCommand;

/// Upstream default for the App Store Connect processing poll interval, in
/// seconds. Suppressed from the emitted arguments when unchanged.
pub const DEFAULT_WAIT_PROCESSING_INTERVAL: u32 = 30;

/// The pilot operation to run, emitted as a positional token after the
/// subcommand keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PilotCommand {
    /// Upload a build.
    Upload,
    /// List uploaded builds.
    Builds,
    /// List testers.
    List,
    /// Add a tester.
    Add,
    /// Find a tester.
    Find,
    /// Remove external testers.
    Remove,
    /// Export testers to CSV.
    Export,
    /// Import testers from CSV.
    Import,
}

impl PilotCommand {
    /// The lowercase literal fastlane expects.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Builds => "builds",
            Self::List => "list",
            Self::Add => "add",
            Self::Find => "find",
            Self::Remove => "remove",
            Self::Export => "export",
            Self::Import => "import",
        }
    }
}

/// Configuration for one `pilot` invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PilotConfig {
    pub command: Option<PilotCommand>,
    /// Apple ID username.
    pub username: Option<String>,
    pub app_identifier: Option<String>,
    /// App platform, e.g. `ios` or `appletvos`.
    pub platform: Option<String>,
    /// The .ipa to upload.
    pub ipa_path: Option<PathBuf>,
    /// "What's new" text for the build.
    pub changelog: Option<String>,
    pub beta_app_description: Option<String>,
    pub beta_app_feedback_email: Option<String>,
    /// Upload only; skip submitting for beta review.
    pub skip_submission: bool,
    /// Do not wait for build processing.
    pub skip_waiting: bool,
    /// Unique app ID from App Store Connect.
    pub apple_id: Option<String>,
    /// Distribute the build to external testers.
    pub distribute_external: bool,
    /// An Apple review demo account is required.
    pub demo_account_required: bool,
    /// Tester first name (add/find/remove commands).
    pub first_name: Option<String>,
    /// Tester last name.
    pub last_name: Option<String>,
    /// Tester email.
    pub email: Option<String>,
    /// CSV file of testers.
    pub testers_file_path: Option<PathBuf>,
    /// Poll interval in seconds while App Store Connect processes the build.
    /// Emitted only when different from [`DEFAULT_WAIT_PROCESSING_INTERVAL`].
    pub wait_processing_interval: Option<u32>,
    /// App Store Connect team ID.
    pub team_id: Option<String>,
    /// App Store Connect team name.
    pub team_name: Option<String>,
    /// Developer portal team ID, distinct from the App Store Connect one.
    pub dev_portal_team_id: Option<String>,
    /// iTMSTransporter provider short name.
    pub itc_provider: Option<String>,
    /// Tester groups to associate the build with, by name or ID.
    pub groups: Vec<String>,
    /// Pick the build matching the uploaded ipa's version instead of the
    /// latest processed build.
    pub wait_for_uploaded_build: bool,
    /// Expire a previous build stuck in "waiting for review".
    pub reject_build_waiting_for_review: bool,
}

impl LaneCommand for PilotConfig {
    fn args(&self, env: &Environment) -> ArgumentList {
        let mut args = ArgumentList::new("pilot");

        if let Some(command) = self.command {
            args.push(command.literal());
        }
        if let Some(username) = non_blank(self.username.as_ref()) {
            args.push_switch("-u", username);
        }
        if let Some(app_identifier) = non_blank(self.app_identifier.as_ref()) {
            args.push_switch("-a", app_identifier);
        }
        if let Some(platform) = non_blank(self.platform.as_ref()) {
            args.push_switch("-m", platform);
        }
        if let Some(ipa_path) = &self.ipa_path {
            args.push_switch_quoted("-i", &env.absolute_str(ipa_path));
        }
        if let Some(changelog) = non_blank(self.changelog.as_ref()) {
            args.push_switch("-w", changelog);
        }
        if let Some(description) = non_blank(self.beta_app_description.as_ref()) {
            args.push_switch("-d", description);
        }
        if let Some(feedback_email) = non_blank(self.beta_app_feedback_email.as_ref()) {
            args.push_switch("-n", feedback_email);
        }
        if self.skip_submission {
            args.push("-s");
        }
        if self.skip_waiting {
            args.push("-z");
        }
        if let Some(apple_id) = non_blank(self.apple_id.as_ref()) {
            args.push_switch("-p", apple_id);
        }
        if self.distribute_external {
            args.push("--distribute_external");
        }
        if self.demo_account_required {
            args.push("--demo_account_required");
        }
        if let Some(first_name) = non_blank(self.first_name.as_ref()) {
            args.push_switch("-f", first_name);
        }
        if let Some(last_name) = non_blank(self.last_name.as_ref()) {
            args.push_switch("-l", last_name);
        }
        if let Some(email) = non_blank(self.email.as_ref()) {
            args.push_switch("-e", email);
        }
        if let Some(testers_file_path) = &self.testers_file_path {
            args.push_switch_quoted("-c", &env.absolute_str(testers_file_path));
        }
        if let Some(interval) = self.wait_processing_interval {
            if interval != DEFAULT_WAIT_PROCESSING_INTERVAL {
                args.push_switch("-k", &interval.to_string());
            }
        }
        if let Some(team_id) = non_blank(self.team_id.as_ref()) {
            args.push_switch("-q", team_id);
        }
        if let Some(team_name) = non_blank(self.team_name.as_ref()) {
            args.push_switch("-r", team_name);
        }
        if let Some(dev_portal_team_id) = non_blank(self.dev_portal_team_id.as_ref()) {
            args.push_switch("--dev_portal_team_id", dev_portal_team_id);
        }
        if let Some(itc_provider) = non_blank(self.itc_provider.as_ref()) {
            args.push_switch("--itc_provider", itc_provider);
        }
        if !self.groups.is_empty() {
            args.push_switch_quoted_list("-g", &self.groups);
        }
        if self.wait_for_uploaded_build {
            args.push("--wait_for_uploaded_build");
        }
        if self.reject_build_waiting_for_review {
            args.push("--reject_build_waiting_for_review");
        }

        args
    }
}
