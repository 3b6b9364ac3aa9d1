//! Resolver integration tests against real template directories.
//!
//! Each test gets isolated `assert_fs` temp dirs — no shared state.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::PathBuf;
use whisker_view::{PathStack, Resolver, TemplateMap, DEFAULT_SUFFIX};

fn template_dir(files: &[(&str, &str)]) -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    for (name, content) in files {
        dir.child(name).write_str(content).expect("write fixture");
    }
    dir
}

// ---------------------------------------------------------------------------
// 1. TemplateMap
// ---------------------------------------------------------------------------

#[test]
fn template_map_returns_registered_path_verbatim() {
    let dir = template_dir(&[("home.mustache", "Hello {{who}}")]);
    let map = TemplateMap::from_iter([("home", dir.path().join("home.mustache"))]);

    let resolved = map.resolve("home").expect("resolve");
    assert_eq!(resolved, dir.path().join("home.mustache"));
    dir.child("home.mustache").assert(predicate::path::exists());
}

#[test]
fn template_map_resolution_is_existence_blind() {
    let map = TemplateMap::from_iter([("later", "/tpl/created_later.mustache")]);
    assert_eq!(
        map.resolve("later"),
        Some(PathBuf::from("/tpl/created_later.mustache")),
        "a mapped path is returned even before the file exists"
    );
}

#[test]
fn template_map_insert_replaces() {
    let mut map = TemplateMap::new();
    map.insert("page", "/old/page.mustache");
    map.insert("page", "/new/page.mustache");
    assert_eq!(map.resolve("page"), Some(PathBuf::from("/new/page.mustache")));
    assert_eq!(map.len(), 1);
}

// ---------------------------------------------------------------------------
// 2. PathStack — suffix completion
// ---------------------------------------------------------------------------

#[rstest]
#[case("home", "home.mustache")]
#[case("pages/deep", "pages/deep.mustache")]
#[case("home.mustache", "home.mustache")]
#[case("legacy.phtml", "legacy.phtml")]
fn path_stack_maps_name_to_file(#[case] name: &str, #[case] file: &str) {
    let dir = template_dir(&[(file, "content")]);
    let stack = PathStack::with_paths([dir.path()]);

    let resolved = stack.resolve(name).expect("resolve");
    assert_eq!(resolved, dir.path().join(file));
}

#[test]
fn default_suffix_is_mustache() {
    assert_eq!(DEFAULT_SUFFIX, "mustache");
    assert_eq!(PathStack::new().default_suffix(), "mustache");
}

#[test]
fn missing_template_resolves_to_none() {
    let dir = template_dir(&[("other.mustache", "x")]);
    let stack = PathStack::with_paths([dir.path()]);
    assert!(stack.resolve("home").is_none());
}

// ---------------------------------------------------------------------------
// 3. PathStack — stacking order
// ---------------------------------------------------------------------------

#[test]
fn last_added_directory_wins() {
    let base = template_dir(&[("layout.mustache", "base")]);
    let theme = template_dir(&[("layout.mustache", "theme")]);

    let mut stack = PathStack::with_paths([base.path()]);
    stack.add_path(theme.path());

    let resolved = stack.resolve("layout").expect("resolve");
    assert_eq!(resolved, theme.path().join("layout.mustache"));
}

#[test]
fn shadowed_directory_still_serves_its_own_templates() {
    let base = template_dir(&[("footer.mustache", "base footer")]);
    let theme = template_dir(&[("layout.mustache", "theme layout")]);

    let mut stack = PathStack::with_paths([base.path()]);
    stack.add_path(theme.path());

    assert_eq!(
        stack.resolve("footer").expect("resolve"),
        base.path().join("footer.mustache")
    );
}

// ---------------------------------------------------------------------------
// 4. PathStack — guard rails
// ---------------------------------------------------------------------------

#[rstest]
#[case("../secrets")]
#[case("a/../../b")]
#[case("..\\windows")]
fn parent_traversal_is_refused(#[case] name: &str) {
    let dir = template_dir(&[("secrets.mustache", "nope")]);
    let stack = PathStack::with_paths([dir.path().join("templates")]);
    assert!(stack.resolve(name).is_none(), "{name:?} must not resolve");
}

#[test]
fn directories_are_not_templates() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    dir.child("partials.mustache/.keep").touch().expect("touch");

    let stack = PathStack::with_paths([dir.path()]);
    assert!(
        stack.resolve("partials").is_none(),
        "a directory named like a template file must not resolve"
    );
}
