//! `docver rewrite <url> <version>` – print the rewritten URL.

use anyhow::Result;
use docver_core::config::DocverConfig;
use docver_core::rewrite::VersionRule;

pub fn run_rewrite(cfg: &DocverConfig, url: &str, version: &str) -> Result<()> {
    let rule = VersionRule::new(&cfg.docs_root)?;
    let out = rule.rewrite(url, version);
    if out == url {
        tracing::debug!("rewrite left {} unchanged", url);
    }
    println!("{out}");
    Ok(())
}
