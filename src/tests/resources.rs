use super::{Resources, CSS_FILE, TEMPLATE_FILE};
use crate::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_builtin_resources() {
    let resources = Resources::builtin().unwrap();
    assert!(resources.style().contains(".keyword"));
}

#[test]
fn test_missing_resource_dir() {
    let dir = TempDir::new().unwrap();
    let err = Resources::load(&dir.path().join("missing")).err().unwrap();
    assert!(matches!(err, Error::Resource { .. }), "{err}");
}

#[test]
fn test_custom_resources() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(TEMPLATE_FILE),
        "{{ title }}:{% for s in sections %}[{{ s.doc }}]{% endfor %}",
    )
    .unwrap();
    fs::write(dir.path().join(CSS_FILE), "body {}").unwrap();

    let resources = Resources::locate(dir.path().to_str().unwrap()).unwrap();
    assert_eq!(resources.style(), "body {}");

    let out = resources
        .render(serde_json::json!({ "title": "t", "sections": [{ "doc": "d", "code": "" }] }))
        .unwrap();
    assert_eq!(out, "t:[d]");
}

#[test]
fn test_broken_template_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(TEMPLATE_FILE), "{% for %}").unwrap();
    fs::write(dir.path().join(CSS_FILE), "").unwrap();

    let err = Resources::load(dir.path()).err().unwrap();
    assert!(matches!(err, Error::Template(_)), "{err}");
}

#[test]
fn test_install_stylesheet_creates_directories() {
    let out = TempDir::new().unwrap();
    let resources = Resources::builtin().unwrap();

    let target = out.path().join("assets").join("css");
    let written = resources.install_stylesheet(&target).unwrap();

    assert_eq!(written, target.join(CSS_FILE));
    assert_eq!(fs::read_to_string(&written).unwrap(), resources.style());
}

#[test]
fn test_install_stylesheet_onto_its_source() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(TEMPLATE_FILE), "").unwrap();
    fs::write(dir.path().join(CSS_FILE), "original").unwrap();

    let resources = Resources::load(dir.path()).unwrap();
    resources.install_stylesheet(dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join(CSS_FILE)).unwrap(),
        "original"
    );
    // No temporary files left behind.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}
