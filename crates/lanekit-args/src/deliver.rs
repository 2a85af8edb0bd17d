//! `fastlane deliver` — App Store metadata, screenshot, and binary upload.
//!
//! Option reference: <https://github.com/fastlane/fastlane/blob/master/deliver/lib/deliver/options.rb>
//!
//! Localized map fields (`name`, `description`, `release_notes`, `keywords`,
//! `app_review_information`, `submission_information`) emit only a marker
//! flag when non-empty; their contents are intentionally not serialized.
//! Upstream reads those values from the metadata directory, and fastlane
//! rejects them inline. See DESIGN.md.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::{non_blank, ArgumentList};
use crate::env::Environment;
use crate::LaneCommand;

/// Configuration for one `deliver` invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliverConfig {
    /// Bundle identifier of the app.
    pub app_identifier: Option<String>,
    /// Numeric App Store Connect app ID.
    pub app_id: Option<String>,
    /// Apple ID username.
    pub username: Option<String>,
    /// Edit the live version instead of the latest editable one.
    pub edit_live: bool,
    pub ipa_path: Option<PathBuf>,
    pub pkg_path: Option<PathBuf>,
    /// App platform, e.g. `ios`, `appletvos`, `osx`.
    pub platform: Option<String>,
    /// Directory containing the metadata files.
    pub metadata_path: Option<PathBuf>,
    /// Directory containing the screenshots.
    pub screenshots_path: Option<PathBuf>,
    pub skip_binary_upload: bool,
    pub skip_screenshots: bool,
    /// App version to create or edit.
    pub app_version: Option<String>,
    /// Skip the verification prompt before upload.
    pub force: bool,
    pub submit_for_review: bool,
    /// Release automatically once approved.
    pub automatic_release: bool,
    /// Scheduled release date as milliseconds since the Unix epoch.
    pub auto_release_date: Option<i64>,
    pub price_tier: Option<u32>,
    /// Use this already-uploaded build number instead of the current one.
    pub build_number: Option<String>,
    /// Age-rating configuration file.
    pub app_rating_config_path: Option<PathBuf>,
    /// Extra submission answers. Marker flag only; values are not serialized.
    pub submission_information: BTreeMap<String, String>,
    /// App Store Connect team ID.
    pub team_id: Option<String>,
    /// App Store Connect team name.
    pub team_name: Option<String>,
    pub dev_portal_team_id: Option<String>,
    pub dev_portal_team_name: Option<String>,
    /// iTMSTransporter provider short name.
    pub itc_provider: Option<String>,
    /// Clear previously uploaded screenshots first.
    pub overwrite_screenshots: bool,
    pub app_icon: Option<PathBuf>,
    pub apple_watch_app_icon: Option<PathBuf>,
    pub copyright: Option<String>,
    pub primary_category: Option<String>,
    pub secondary_category: Option<String>,
    pub primary_first_sub_category: Option<String>,
    pub primary_second_sub_category: Option<String>,
    pub secondary_first_sub_category: Option<String>,
    pub secondary_second_sub_category: Option<String>,
    /// App review contact details. Marker flag only.
    pub app_review_information: BTreeMap<String, String>,
    /// Localized app name by language. Marker flag only.
    pub name: BTreeMap<String, String>,
    /// Localized description by language. Marker flag only.
    pub description: BTreeMap<String, String>,
    /// Localized release notes by language. Marker flag only.
    pub release_notes: BTreeMap<String, String>,
    /// Localized keywords by language. Marker flag only.
    pub keywords: BTreeMap<String, String>,
    pub skip_metadata: bool,
    /// Stagger the rollout with App Store Connect phased release.
    pub phased_release: bool,
    pub privacy_url: Option<String>,
    pub support_url: Option<String>,
    pub marketing_url: Option<String>,
}

impl LaneCommand for DeliverConfig {
    fn args(&self, env: &Environment) -> ArgumentList {
        let mut args = ArgumentList::new("deliver");

        if let Some(app_identifier) = non_blank(self.app_identifier.as_ref()) {
            args.push_switch("-a", app_identifier);
        }
        if let Some(app_id) = non_blank(self.app_id.as_ref()) {
            args.push_switch("-p", app_id);
        }
        if let Some(username) = non_blank(self.username.as_ref()) {
            args.push_switch("-u", username);
        }
        if self.edit_live {
            args.push("-o");
        }
        if let Some(ipa_path) = &self.ipa_path {
            args.push_switch_quoted("-i", &env.absolute_str(ipa_path));
        }
        if let Some(pkg_path) = &self.pkg_path {
            args.push_switch_quoted("-c", &env.absolute_str(pkg_path));
        }
        if let Some(platform) = non_blank(self.platform.as_ref()) {
            args.push_switch("-j", platform);
        }
        if let Some(metadata_path) = &self.metadata_path {
            args.push_switch_quoted("-m", &env.absolute_str(metadata_path));
        }
        if let Some(screenshots_path) = &self.screenshots_path {
            args.push_switch_quoted("-w", &env.absolute_str(screenshots_path));
        }
        if self.skip_binary_upload {
            args.push("--skip_binary_upload");
        }
        if self.skip_screenshots {
            args.push("--skip_screenshots");
        }
        if let Some(app_version) = non_blank(self.app_version.as_ref()) {
            args.push_switch("-z", app_version);
        }
        if self.force {
            args.push("-f");
        }
        if self.submit_for_review {
            args.push("--submit_for_review");
        }
        if self.automatic_release {
            args.push("--automatic_release");
        }
        if let Some(millis) = self.auto_release_date {
            args.push_switch("--auto_release_date", &millis.to_string());
        }
        if let Some(price_tier) = self.price_tier {
            args.push_switch("-r", &price_tier.to_string());
        }
        if let Some(build_number) = non_blank(self.build_number.as_ref()) {
            args.push_switch("-n", build_number);
        }
        if let Some(rating_config) = &self.app_rating_config_path {
            args.push_switch_quoted("-g", &env.absolute_str(rating_config));
        }
        if !self.submission_information.is_empty() {
            args.push("-b");
        }
        if let Some(team_id) = non_blank(self.team_id.as_ref()) {
            args.push_switch("-k", team_id);
        }
        if let Some(team_name) = non_blank(self.team_name.as_ref()) {
            args.push_switch("-e", team_name);
        }
        if let Some(dev_portal_team_id) = non_blank(self.dev_portal_team_id.as_ref()) {
            args.push_switch("-s", dev_portal_team_id);
        }
        if let Some(dev_portal_team_name) = non_blank(self.dev_portal_team_name.as_ref()) {
            args.push_switch("-y", dev_portal_team_name);
        }
        if let Some(itc_provider) = non_blank(self.itc_provider.as_ref()) {
            args.push_switch("--itc_provider", itc_provider);
        }
        if self.overwrite_screenshots {
            args.push("--overwrite_screenshots");
        }
        if let Some(app_icon) = &self.app_icon {
            args.push_switch_quoted("-l", &env.absolute_str(app_icon));
        }
        if let Some(watch_icon) = &self.apple_watch_app_icon {
            args.push_switch_quoted("-q", &env.absolute_str(watch_icon));
        }
        if let Some(copyright) = non_blank(self.copyright.as_ref()) {
            args.push_switch("--copyright", copyright);
        }
        if let Some(category) = non_blank(self.primary_category.as_ref()) {
            args.push_switch("--primary_category", category);
        }
        if let Some(category) = non_blank(self.secondary_category.as_ref()) {
            args.push_switch("--secondary_category", category);
        }
        if let Some(category) = non_blank(self.primary_first_sub_category.as_ref()) {
            args.push_switch("--primary_first_sub_category", category);
        }
        if let Some(category) = non_blank(self.primary_second_sub_category.as_ref()) {
            args.push_switch("--primary_second_sub_category", category);
        }
        if let Some(category) = non_blank(self.secondary_first_sub_category.as_ref()) {
            args.push_switch("--secondary_first_sub_category", category);
        }
        if let Some(category) = non_blank(self.secondary_second_sub_category.as_ref()) {
            args.push_switch("--secondary_second_sub_category", category);
        }
        if !self.app_review_information.is_empty() {
            args.push("--app_review_information");
        }
        if !self.name.is_empty() {
            args.push("--name");
        }
        if !self.description.is_empty() {
            args.push("--description");
        }
        if !self.release_notes.is_empty() {
            args.push("--release_notes");
        }
        if !self.keywords.is_empty() {
            args.push("--keywords");
        }
        if self.skip_metadata {
            args.push("--skip_metadata");
        }
        if self.phased_release {
            args.push("--phased_release");
        }
        if let Some(privacy_url) = non_blank(self.privacy_url.as_ref()) {
            args.push_switch("--privacy_url", privacy_url);
        }
        if let Some(support_url) = non_blank(self.support_url.as_ref()) {
            args.push_switch("--support_url", support_url);
        }
        if let Some(marketing_url) = non_blank(self.marketing_url.as_ref()) {
            args.push_switch("--marketing_url", marketing_url);
        }

        args
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment::new("/Working")
    }

    fn render(config: &DeliverConfig) -> String {
        config.args(&env()).render()
    }

    #[test]
    fn default_config_is_bare_subcommand() {
        assert_eq!(render(&DeliverConfig::default()), "deliver");
    }

    #[test]
    fn app_icon_is_absolutized_and_quoted() {
        let config = DeliverConfig {
            app_icon: Some(PathBuf::from("./cakeicon.png")),
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver -l \"/Working/cakeicon.png\"");
    }

    #[test]
    fn watch_icon_is_absolutized_and_quoted() {
        let config = DeliverConfig {
            apple_watch_app_icon: Some(PathBuf::from("./cakeicon.png")),
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver -q \"/Working/cakeicon.png\"");
    }

    #[test]
    fn edit_live_is_a_bare_flag() {
        let config = DeliverConfig {
            edit_live: true,
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver -o");
    }

    #[test]
    fn map_fields_emit_marker_only() {
        let mut release_notes = BTreeMap::new();
        release_notes.insert("en-US".to_owned(), "Bug fixes".to_owned());
        let config = DeliverConfig {
            release_notes,
            ..DeliverConfig::default()
        };
        let rendered = render(&config);
        assert_eq!(rendered, "deliver --release_notes");
        assert!(!rendered.contains("Bug fixes"));
    }

    #[test]
    fn submission_information_marker_is_short_flag() {
        let mut submission_information = BTreeMap::new();
        submission_information.insert("export_compliance".to_owned(), "false".to_owned());
        let config = DeliverConfig {
            submission_information,
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver -b");
    }

    #[test]
    fn empty_maps_emit_nothing() {
        let config = DeliverConfig {
            name: BTreeMap::new(),
            description: BTreeMap::new(),
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver");
    }

    #[test]
    fn auto_release_date_is_emitted_verbatim() {
        let config = DeliverConfig {
            auto_release_date: Some(1_735_689_600_000),
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver --auto_release_date 1735689600000");
    }

    #[test]
    fn price_tier_is_emitted() {
        let config = DeliverConfig {
            price_tier: Some(3),
            ..DeliverConfig::default()
        };
        assert_eq!(render(&config), "deliver -r 3");
    }

    #[test]
    fn upload_invocation_field_order() {
        let config = DeliverConfig {
            app_identifier: Some("com.example".to_owned()),
            username: Some("user@example.com".to_owned()),
            ipa_path: Some(PathBuf::from("app.ipa")),
            app_version: Some("1.2.0".to_owned()),
            force: true,
            submit_for_review: true,
            team_id: Some("T1".to_owned()),
            ..DeliverConfig::default()
        };
        assert_eq!(
            render(&config),
            "deliver -a com.example -u user@example.com -i \"/Working/app.ipa\" \
             -z 1.2.0 -f --submit_for_review -k T1"
        );
    }

    #[test]
    fn url_switches_use_long_names() {
        let config = DeliverConfig {
            privacy_url: Some("https://example.com/privacy".to_owned()),
            support_url: Some("https://example.com/support".to_owned()),
            ..DeliverConfig::default()
        };
        assert_eq!(
            render(&config),
            "deliver --privacy_url https://example.com/privacy \
             --support_url https://example.com/support"
        );
    }
}
