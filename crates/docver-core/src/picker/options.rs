//! Dropdown entries for the version picker.

use serde::Serialize;

/// One `<option>` of the version picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub value: String,
    pub selected: bool,
}

/// Builds the options in `versions` order, selecting the entry equal to `current`.
///
/// Only the first equal entry is selected; with no `current` (or no equal
/// entry) nothing is.
pub fn build_options(versions: &[String], current: Option<&str>) -> Vec<PickerOption> {
    let mut found = false;
    versions
        .iter()
        .map(|v| {
            let selected = !found && current == Some(v.as_str());
            found |= selected;
            PickerOption {
                value: v.clone(),
                selected,
            }
        })
        .collect()
}
