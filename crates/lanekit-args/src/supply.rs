//! `fastlane supply` — Google Play store-listing upload.
//!
//! Option reference: <https://github.com/fastlane/fastlane/blob/master/supply/lib/supply/options.rb>

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::builder::{non_blank, ArgumentList};
use crate::env::Environment;
use crate::LaneCommand;

/// Configuration for one `supply` invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupplyConfig {
    /// Package name of the app, e.g. `com.example.app`.
    pub package_name: Option<String>,
    /// Release track, e.g. `production`, `beta`, `alpha`, `internal`.
    pub track: Option<String>,
    /// User fraction for a staged rollout, between 0 and 1.
    pub rollout: Option<f64>,
    /// Directory containing the listing metadata.
    pub metadata_path: Option<PathBuf>,
    /// p12 key file used to authenticate with Google.
    pub key_path: Option<PathBuf>,
    /// Service-account email address that issued the p12.
    pub issuer: Option<String>,
    /// Service-account JSON key file.
    pub json_key_path: Option<PathBuf>,
    /// Raw service-account JSON data.
    pub json_key_data: Option<String>,
    /// Single APK to upload.
    pub apk_path: Option<PathBuf>,
    /// Multiple APKs to upload in one release.
    pub apk_paths: Vec<PathBuf>,
    /// App bundle to upload.
    pub aab_path: Option<PathBuf>,
    pub skip_upload_apk: bool,
    pub skip_upload_aab: bool,
    pub skip_upload_metadata: bool,
    pub skip_upload_images: bool,
    pub skip_upload_screenshots: bool,
    /// Promote the release to this track after upload.
    pub track_promote_to: Option<String>,
    /// Validate with Google Play without publishing.
    pub validate_only: bool,
    /// ProGuard/R8 mapping file.
    pub mapping_path: Option<PathBuf>,
    /// Mapping files, one per uploaded APK.
    pub mapping_paths: Vec<PathBuf>,
    /// Override for the Google Play API root URL.
    pub root_url: Option<String>,
    /// Disable superseded releases on other tracks.
    pub check_superseded_tracks: bool,
}

impl LaneCommand for SupplyConfig {
    fn args(&self, env: &Environment) -> ArgumentList {
        let mut args = ArgumentList::new("supply");

        if let Some(package_name) = non_blank(self.package_name.as_ref()) {
            args.push_switch("-p", package_name);
        }
        if let Some(track) = non_blank(self.track.as_ref()) {
            args.push_switch("-a", track);
        }
        if let Some(rollout) = self.rollout {
            args.push_switch("-r", &rollout.to_string());
        }
        if let Some(metadata_path) = &self.metadata_path {
            args.push_switch_quoted("-m", &env.absolute_str(metadata_path));
        }
        if let Some(key_path) = &self.key_path {
            args.push_switch_quoted("-k", &env.absolute_str(key_path));
        }
        if let Some(issuer) = non_blank(self.issuer.as_ref()) {
            args.push_switch("-i", issuer);
        }
        if let Some(json_key_path) = &self.json_key_path {
            args.push_switch_quoted("-j", &env.absolute_str(json_key_path));
        }
        if let Some(json_key_data) = non_blank(self.json_key_data.as_ref()) {
            args.push_switch("-c", json_key_data);
        }
        if let Some(apk_path) = &self.apk_path {
            args.push_switch_quoted("-b", &env.absolute_str(apk_path));
        }
        if !self.apk_paths.is_empty() {
            args.push_switch_quoted_list("-u", &absolutize_all(&self.apk_paths, env));
        }
        if let Some(aab_path) = &self.aab_path {
            args.push_switch_quoted("-f", &env.absolute_str(aab_path));
        }
        if self.skip_upload_apk {
            args.push("--skip_upload_apk");
        }
        if self.skip_upload_aab {
            args.push("--skip_upload_aab");
        }
        if self.skip_upload_metadata {
            args.push("--skip_upload_metadata");
        }
        if self.skip_upload_images {
            args.push("--skip_upload_images");
        }
        if self.skip_upload_screenshots {
            args.push("--skip_upload_screenshots");
        }
        if let Some(track_promote_to) = non_blank(self.track_promote_to.as_ref()) {
            args.push_switch("--track_promote_to", track_promote_to);
        }
        if self.validate_only {
            args.push("--validate_only");
        }
        if let Some(mapping_path) = &self.mapping_path {
            args.push_switch_quoted("-d", &env.absolute_str(mapping_path));
        }
        if !self.mapping_paths.is_empty() {
            args.push_switch_quoted_list("-s", &absolutize_all(&self.mapping_paths, env));
        }
        if let Some(root_url) = non_blank(self.root_url.as_ref()) {
            args.push_switch("--root_url", root_url);
        }
        if self.check_superseded_tracks {
            args.push("--check_superseded_tracks");
        }

        args
    }
}

fn absolutize_all(paths: &[PathBuf], env: &Environment) -> Vec<String> {
    paths.iter().map(|path| env.absolute_str(path)).collect()
}
