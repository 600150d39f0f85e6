//! `docver switch <url> <version>` – run the picker handler against `url`.

use anyhow::Result;
use docver_core::config::DocverConfig;
use docver_core::picker::{MemoryLocation, SwitchOutcome, VersionPicker};

pub fn run_switch(cfg: &DocverConfig, url: &str, version: &str) -> Result<()> {
    let picker = VersionPicker::from_config(cfg)?;
    let mut location = MemoryLocation::new(url);
    match picker.on_switch(&mut location, version) {
        SwitchOutcome::Navigated { to, .. } => println!("{to}"),
        SwitchOutcome::Unchanged { url } => {
            eprintln!("no navigation: page already at version {version:?} or not versioned");
            println!("{url}");
        }
    }
    Ok(())
}
