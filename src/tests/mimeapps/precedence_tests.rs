use std::path::PathBuf;

use super::*;

fn location(dir: &str) -> ListLocation {
    ListLocation::new(PathBuf::from(dir).join("mimeapps.list"), true)
}

#[test]
fn deepest_index_is_the_lowest_precedence_match() {
    let locations = vec![location("/a"), location("/b"), location("/c")];
    let mut index = DesktopIndex::default();
    index.insert(DesktopId::from("both.desktop"), PathBuf::from("/a/both.desktop"));
    index.insert(DesktopId::from("both.desktop"), PathBuf::from("/b/sub/both.desktop"));
    index.insert(DesktopId::from("top.desktop"), PathBuf::from("/a/top.desktop"));
    index.insert(DesktopId::from("elsewhere.desktop"), PathBuf::from("/opt/elsewhere.desktop"));

    let precedence = PrecedenceIndex::new(&locations, &index);

    assert_eq!(precedence.deepest_valid_index(&"both.desktop".into()), Some(1));
    assert_eq!(precedence.deepest_valid_index(&"top.desktop".into()), Some(0));
    assert_eq!(precedence.deepest_valid_index(&"elsewhere.desktop".into()), None);
    assert_eq!(precedence.deepest_valid_index(&"unknown.desktop".into()), None);

    assert!(precedence.is_valid_at(&"both.desktop".into(), 0));
    assert!(precedence.is_valid_at(&"both.desktop".into(), 1));
    assert!(!precedence.is_valid_at(&"both.desktop".into(), 2));
    assert!(!precedence.is_valid_at(&"elsewhere.desktop".into(), 0));
}

#[test]
fn directory_matching_is_component_wise() {
    let locations = vec![location("/usr/share/app")];
    let mut index = DesktopIndex::default();
    index.insert(
        DesktopId::from("vim.desktop"),
        PathBuf::from("/usr/share/applications/vim.desktop"),
    );

    let precedence = PrecedenceIndex::new(&locations, &index);
    assert_eq!(precedence.deepest_valid_index(&"vim.desktop".into()), None);
}

#[test]
fn locations_without_a_directory_match_nothing() {
    let locations = vec![
        location("/a"),
        ListLocation::new("/", true),
        ListLocation::new("mimeapps.list", true),
    ];
    assert_eq!(locations[1].dir(), None);
    assert_eq!(locations[2].dir(), None);

    let mut index = DesktopIndex::default();
    index.insert(DesktopId::from("top.desktop"), PathBuf::from("/a/top.desktop"));
    index.insert(DesktopId::from("stray.desktop"), PathBuf::from("/opt/stray.desktop"));

    let precedence = PrecedenceIndex::new(&locations, &index);
    assert_eq!(precedence.deepest_valid_index(&"top.desktop".into()), Some(0));
    assert_eq!(precedence.deepest_valid_index(&"stray.desktop".into()), None);
}
