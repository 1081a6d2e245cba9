use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static LOCALE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z]{2,})(?:_([A-Z]{2}))?(?:\.[a-zA-Z0-9-]+)?(?:@(.+))?$")
        .expect("valid locale pattern")
});

/// A localized string value such as `Name` / `Name[nl]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocaleString {
    pub default: String,
    pub localized: BTreeMap<String, String>,
}

impl LocaleString {
    /// Value for a locale of the form `lang_COUNTRY.ENCODING@MODIFIER`, falling back to
    /// less specific variants and finally the default.
    pub fn to_locale(&self, locale: &str) -> &str {
        locale_candidates(locale)
            .iter()
            .find_map(|key| self.localized.get(key).filter(|v| !v.is_empty()))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    pub(super) fn assign(&mut self, locale: Option<&str>, value: String) {
        match locale {
            None => self.default = value,
            Some(locale) => {
                self.localized.insert(locale.to_string(), value);
            }
        }
    }
}

/// A localized list value such as `Keywords` / `Keywords[de]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocaleStrings {
    pub default: Vec<String>,
    pub localized: BTreeMap<String, Vec<String>>,
}

impl LocaleStrings {
    pub fn to_locale(&self, locale: &str) -> &[String] {
        locale_candidates(locale)
            .iter()
            .find_map(|key| self.localized.get(key).filter(|v| !v.is_empty()))
            .map(Vec::as_slice)
            .unwrap_or(&self.default)
    }

    pub(super) fn assign(&mut self, locale: Option<&str>, value: Vec<String>) {
        match locale {
            None => self.default = value,
            Some(locale) => {
                self.localized.insert(locale.to_string(), value);
            }
        }
    }
}

fn locale_candidates(locale: &str) -> Vec<String> {
    let Some(caps) = LOCALE_RE.captures(locale) else {
        return Vec::new();
    };

    let lang = &caps[1];
    let country = caps.get(2).map(|m| m.as_str());
    let modifier = caps.get(3).map(|m| m.as_str());

    let mut out = Vec::with_capacity(4);
    if let (Some(country), Some(modifier)) = (country, modifier) {
        out.push(format!("{lang}_{country}@{modifier}"));
    }
    if let Some(country) = country {
        out.push(format!("{lang}_{country}"));
    }
    if let Some(modifier) = modifier {
        out.push(format!("{lang}@{modifier}"));
    }
    out.push(lang.to_string());
    out
}
