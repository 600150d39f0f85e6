//! Integration test: picker built from a config file drives a recorded location
//! through several version switches.

use std::io::Write;

use docver_core::config;
use docver_core::picker::{Location, MemoryLocation, VersionPicker};
use docver_core::rewrite;
use tempfile::NamedTempFile;

#[test]
fn picker_from_config_file_switches_versions() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        br#"
docs_root = "javadocs"
picker_element_id = "version_picker"
versions = ["1.18.2", "1.19", "1.20.1"]
"#,
    )
    .unwrap();
    f.flush().unwrap();

    let cfg = config::load_from(f.path()).unwrap();
    let picker = VersionPicker::from_config(&cfg).unwrap();
    let mut loc = MemoryLocation::new("https://docs.example.org/javadocs/api/1.19/net/Foo.html#bar");

    let selected: Vec<_> = picker
        .options(&loc.href())
        .into_iter()
        .filter(|o| o.selected)
        .map(|o| o.value)
        .collect();
    assert_eq!(selected, ["1.19"]);

    let first = picker.on_switch(&mut loc, "1.20.1");
    assert!(first.navigated());
    let again = picker.on_switch(&mut loc, "1.20.1");
    assert!(!again.navigated());

    assert_eq!(
        loc.href(),
        "https://docs.example.org/javadocs/api/1.20.1/net/Foo.html#bar"
    );
    assert_eq!(loc.history().len(), 1);
}

#[test]
fn free_function_matches_default_picker() {
    let url = "https://example.com/javadocs/foo/2.3/index.html";
    let mut loc = MemoryLocation::new(url);
    let outcome = VersionPicker::default().on_switch(&mut loc, "3.0");
    assert_eq!(outcome.url(), rewrite::rewrite(url, "3.0"));
    assert_eq!(rewrite::current_version(outcome.url()), Some("3.0"));
}
