//! Version picker: the change handler behind the documentation version dropdown.
//!
//! A [`VersionPicker`] is built once when the page loads and handed to the
//! selection-change callback. Each change reads the location once, rewrites
//! the version segment and navigates only if the URL actually changed, so
//! picking the version already on screen does not reload the page.

mod location;
mod options;

pub use location::{Location, MemoryLocation};
pub use options::{build_options, PickerOption};

use crate::config::DocverConfig;
use crate::rewrite::{RuleError, VersionRule};

/// Element id of the `<select>` the picker is bound to by default.
pub const DEFAULT_ELEMENT_ID: &str = "version_picker";

/// Result of handling one selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The location was sent to `to`.
    Navigated { from: String, to: String },
    /// The rewritten URL equals the current one; no navigation happened.
    Unchanged { url: String },
}

impl SwitchOutcome {
    /// URL the page ends up on.
    pub fn url(&self) -> &str {
        match self {
            SwitchOutcome::Navigated { to, .. } => to,
            SwitchOutcome::Unchanged { url } => url,
        }
    }

    pub fn navigated(&self) -> bool {
        matches!(self, SwitchOutcome::Navigated { .. })
    }
}

/// Page-lifetime context of the version dropdown.
#[derive(Debug, Clone)]
pub struct VersionPicker {
    rule: VersionRule,
    element_id: String,
    versions: Vec<String>,
}

impl VersionPicker {
    pub fn new(rule: VersionRule, element_id: impl Into<String>, versions: Vec<String>) -> Self {
        Self {
            rule,
            element_id: element_id.into(),
            versions,
        }
    }

    /// Builds the picker from the docs root, element id and versions in `cfg`.
    pub fn from_config(cfg: &DocverConfig) -> Result<Self, RuleError> {
        let rule = VersionRule::new(&cfg.docs_root)?;
        Ok(Self::new(
            rule,
            cfg.picker_element_id.clone(),
            cfg.versions.clone(),
        ))
    }

    pub fn rule(&self) -> &VersionRule {
        &self.rule
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Handles a selection change to `selected`.
    ///
    /// `selected` is not checked against [`Self::versions`].
    pub fn on_switch(&self, location: &mut dyn Location, selected: &str) -> SwitchOutcome {
        let url = location.href();
        let new_url = self.rule.rewrite(&url, selected);
        if new_url == url {
            tracing::debug!(
                "{}: {} already shows version {:?}",
                self.element_id,
                url,
                selected
            );
            return SwitchOutcome::Unchanged { url };
        }
        let new_url = new_url.into_owned();
        tracing::info!("{}: switching {} -> {}", self.element_id, url, new_url);
        location.assign(&new_url);
        SwitchOutcome::Navigated {
            from: url,
            to: new_url,
        }
    }

    /// Dropdown entries for a page at `url`, the displayed version selected.
    pub fn options(&self, url: &str) -> Vec<PickerOption> {
        build_options(&self.versions, self.rule.current_version(url))
    }
}

impl Default for VersionPicker {
    fn default() -> Self {
        Self::new(VersionRule::javadocs(), DEFAULT_ELEMENT_ID, Vec::new())
    }
}
