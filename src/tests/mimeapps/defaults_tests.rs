use std::fs;
use std::path::Path;

use crate::model::DesktopId;

use super::*;

fn app(dir: &Path, rel: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "[Desktop Entry]\nType=Application\nName=App\nExec=app %u\n",
    )
    .unwrap();
}

fn associated(pairs: &[(&str, &[&str])]) -> Associations {
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
fn defaults_must_be_associated() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("apps");
    app(&dir, "firefox.desktop");
    app(&dir, "bar.desktop");
    fs::write(
        dir.join("mimeapps.list"),
        "[Default Applications]\ntext/html=bar.desktop;firefox.desktop;\n",
    )
    .unwrap();
    let locations = vec![ListLocation::new(dir.join("mimeapps.list"), true)];
    let index = DesktopIndex::scan(&[&dir]).unwrap();
    let associations = associated(&[("text/html", &["firefox.desktop"])]);

    let table = defaults(&locations, &associations, Some(&index));
    assert_eq!(table["text/html"], vec![DesktopId::from("firefox.desktop")]);

    let table = defaults(&locations, &Associations::new(), Some(&index));
    assert!(table.is_empty());
}

#[test]
fn every_location_contributes_without_repeats() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("config");
    let apps = tmp.path().join("apps");
    fs::create_dir_all(&config).unwrap();
    app(&apps, "a.desktop");
    app(&apps, "b.desktop");
    fs::write(
        config.join("gnome-mimeapps.list"),
        "[Default Applications]\ntext/plain=b.desktop;\n",
    )
    .unwrap();
    fs::write(
        config.join("mimeapps.list"),
        "[Default Applications]\ntext/plain=a.desktop;b.desktop;\n",
    )
    .unwrap();
    let locations = vec![
        ListLocation::new(config.join("gnome-mimeapps.list"), false),
        ListLocation::new(config.join("mimeapps.list"), false),
        ListLocation::new(apps.join("mimeapps.list"), true),
    ];
    let associations = associated(&[("text/plain", &["a.desktop", "b.desktop"])]);

    let index = DesktopIndex::scan(&[&apps]).unwrap();
    let indexed = defaults(&locations, &associations, Some(&index));
    assert_eq!(
        indexed["text/plain"],
        vec![DesktopId::from("b.desktop"), DesktopId::from("a.desktop")]
    );

    let probed = defaults(&locations, &associations, None);
    assert_eq!(probed, indexed);
}

#[test]
fn probing_finds_nested_desktop_files() {
    let tmp = tempfile::tempdir().unwrap();
    let apps = tmp.path().join("apps");
    app(&apps, "libreoffice/writer.desktop");
    fs::write(
        apps.join("mimeapps.list"),
        "[Default Applications]\napplication/rtf=libreoffice-writer.desktop;missing.desktop;\n",
    )
    .unwrap();
    let locations = vec![ListLocation::new(apps.join("mimeapps.list"), true)];
    let associations = associated(&[(
        "application/rtf",
        &["libreoffice-writer.desktop", "missing.desktop"],
    )]);

    let table = defaults(&locations, &associations, None);
    assert_eq!(
        table["application/rtf"],
        vec![DesktopId::from("libreoffice-writer.desktop")]
    );
}
