//! `docver current <url>` – print the version segment.

use anyhow::{bail, Result};
use docver_core::config::DocverConfig;
use docver_core::rewrite::VersionRule;

pub fn run_current(cfg: &DocverConfig, url: &str) -> Result<()> {
    let rule = VersionRule::new(&cfg.docs_root)?;
    match rule.current_version(url) {
        Some(v) => println!("{v}"),
        None => bail!("no {}/…/<version>/ segment in {}", rule.docs_root(), url),
    }
    Ok(())
}
