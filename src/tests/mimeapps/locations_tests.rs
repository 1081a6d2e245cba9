use std::path::PathBuf;

use super::*;

fn base() -> BaseDirs {
    BaseDirs::from_lookup(|key| {
        let value = match key {
            "HOME" => "/home/user",
            "XDG_CONFIG_HOME" => "/home/user/.config",
            "XDG_CONFIG_DIRS" => "/etc/xdg",
            "XDG_DATA_HOME" => "/home/user/.local/share",
            "XDG_DATA_DIRS" => "/usr/local/share/:/usr/share/",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap()
}

fn loc(path: &str, has_desktop_files: bool) -> ListLocation {
    ListLocation::new(PathBuf::from(path), has_desktop_files)
}

#[test]
fn without_desktop() {
    assert_eq!(
        list_locations(&base(), &[]),
        vec![
            loc("/home/user/.config/mimeapps.list", false),
            loc("/etc/xdg/mimeapps.list", false),
            loc("/home/user/.local/share/applications/mimeapps.list", true),
            loc("/usr/local/share/applications/mimeapps.list", true),
            loc("/usr/share/applications/mimeapps.list", true),
        ]
    );
}

#[test]
fn desktop_specific_lists_precede_plain_lists() {
    assert_eq!(
        list_locations(&base(), &["gnome".to_string()]),
        vec![
            loc("/home/user/.config/gnome-mimeapps.list", false),
            loc("/home/user/.config/mimeapps.list", false),
            loc("/etc/xdg/gnome-mimeapps.list", false),
            loc("/etc/xdg/mimeapps.list", false),
            loc("/home/user/.local/share/applications/gnome-mimeapps.list", false),
            loc("/home/user/.local/share/applications/mimeapps.list", true),
            loc("/usr/local/share/applications/gnome-mimeapps.list", false),
            loc("/usr/local/share/applications/mimeapps.list", true),
            loc("/usr/share/applications/gnome-mimeapps.list", false),
            loc("/usr/share/applications/mimeapps.list", true),
        ]
    );
}

#[test]
fn several_desktops_keep_their_order() {
    let locations = list_locations(&base(), &split_desktops("ubuntu:GNOME"));
    let first: Vec<PathBuf> = locations.iter().take(3).map(|l| l.path.clone()).collect();
    assert_eq!(
        first,
        vec![
            PathBuf::from("/home/user/.config/ubuntu-mimeapps.list"),
            PathBuf::from("/home/user/.config/gnome-mimeapps.list"),
            PathBuf::from("/home/user/.config/mimeapps.list"),
        ]
    );
    assert_eq!(locations.len(), 15);
}

#[test]
fn split_desktops_lowercases_and_drops_empty_names() {
    assert_eq!(split_desktops("KDE"), vec!["kde"]);
    assert_eq!(split_desktops("ubuntu::GNOME:"), vec!["ubuntu", "gnome"]);
    assert!(split_desktops("").is_empty());
}
