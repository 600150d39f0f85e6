//! `docver options <url>` – list the picker options for a page.

use anyhow::Result;
use docver_core::config::DocverConfig;
use docver_core::picker::VersionPicker;

pub fn run_options(cfg: &DocverConfig, url: &str, json: bool) -> Result<()> {
    let picker = VersionPicker::from_config(cfg)?;
    let options = picker.options(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }
    if options.is_empty() {
        println!("No versions configured.");
        return Ok(());
    }
    println!("{:<3} {}", "", "VERSION");
    for o in options {
        let mark = if o.selected { "*" } else { "" };
        println!("{:<3} {}", mark, o.value);
    }
    Ok(())
}
