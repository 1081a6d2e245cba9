use crate::model::DesktopId;

use super::*;

fn table(pairs: &[(&str, &[&str])]) -> Associations {
    pairs
        .iter()
        .map(|(mime, ids)| {
            (
                mime.to_string(),
                ids.iter().copied().map(DesktopId::from).collect(),
            )
        })
        .collect()
}

#[test]
fn defaults_go_first_without_repeats() {
    let associations = table(&[
        ("text/plain", &["vim.desktop", "gedit.desktop", "kate.desktop"]),
        ("image/png", &["gimp.desktop"]),
    ]);
    let defaults = table(&[
        ("text/plain", &["kate.desktop", "vim.desktop"]),
        ("text/html", &["firefox.desktop"]),
    ]);

    let merged = merge_preferences(associations, defaults);

    assert_eq!(
        merged,
        table(&[
            (
                "text/plain",
                &["kate.desktop", "vim.desktop", "gedit.desktop"]
            ),
            ("image/png", &["gimp.desktop"]),
            ("text/html", &["firefox.desktop"]),
        ])
    );
}

#[test]
fn empty_defaults_leave_associations_unchanged() {
    let associations = table(&[("text/plain", &["vim.desktop"])]);
    assert_eq!(
        merge_preferences(associations.clone(), Associations::new()),
        associations
    );
}
