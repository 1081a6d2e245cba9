use std::fs;

use super::*;

fn ids(values: &[&str]) -> Vec<DesktopId> {
    values.iter().copied().map(DesktopId::from).collect()
}

#[test]
fn parses_all_three_sections_in_file_order() {
    let list = MimeAppsList::parse_str(
        "
[Default Applications]
text/html=firefox.desktop;chromium.desktop;

[Added Associations]
text/plain=vim.desktop;
image/png=gimp.desktop
text/csv=libreoffice-calc.desktop;vim.desktop;

[Removed Associations]
text/plain=gedit.desktop;
",
    )
    .unwrap();

    assert_eq!(
        list.default["text/html"],
        ids(&["firefox.desktop", "chromium.desktop"])
    );
    let added: Vec<&str> = list.added.keys().map(String::as_str).collect();
    assert_eq!(added, vec!["text/plain", "image/png", "text/csv"]);
    assert_eq!(list.added["image/png"], ids(&["gimp.desktop"]));
    assert_eq!(list.removed["text/plain"], ids(&["gedit.desktop"]));
}

#[test]
fn repeated_keys_accumulate_in_every_section() {
    let list = MimeAppsList::parse_str(
        "[Default Applications]
text/html=a.desktop;
text/html=b.desktop;
[Added Associations]
text/plain=a.desktop
[Removed Associations]
text/plain=c.desktop;
[Added Associations]
text/plain=b.desktop;
",
    )
    .unwrap();

    assert_eq!(list.default["text/html"], ids(&["a.desktop", "b.desktop"]));
    assert_eq!(list.added["text/plain"], ids(&["a.desktop", "b.desktop"]));
    assert_eq!(list.removed["text/plain"], ids(&["c.desktop"]));
}

#[test]
fn ignores_lines_outside_known_sections() {
    let list = MimeAppsList::parse_str(
        "text/plain=early.desktop;
[Added Associations]
not a directive
text/plain=vim.desktop;;emacs.desktop;
[X-Vendor Extension]
text/plain=vendor.desktop;
",
    )
    .unwrap();

    assert_eq!(list.added.len(), 1);
    assert_eq!(list.added["text/plain"], ids(&["vim.desktop", "emacs.desktop"]));
    assert!(list.default.is_empty());
    assert!(list.removed.is_empty());
}

#[test]
fn invalid_utf8_is_an_error() {
    let err = MimeAppsList::parse(&b"[Added Associations]\ntext/plain=\xff.desktop\n"[..])
        .unwrap_err();
    assert!(matches!(err, ListError::Read { line: 1, .. }), "{err:?}");
}

#[test]
fn load_distinguishes_missing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("mimeapps.list");
    assert_eq!(MimeAppsList::load(&path).unwrap(), None);
    assert!(read_list(&path).is_none());

    fs::write(&path, "[Added Associations]\ntext/plain=vim.desktop;\n").unwrap();
    let list = MimeAppsList::load(&path).unwrap().unwrap();
    assert_eq!(list.added["text/plain"], ids(&["vim.desktop"]));

    fs::write(&path, b"[Added Associations]\n\xff\n").unwrap();
    let err = MimeAppsList::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse"), "{err:#}");
    assert!(read_list(&path).is_none());
}
