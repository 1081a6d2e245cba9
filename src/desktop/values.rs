use super::ValueError;

pub(super) fn is_ascii_no_control(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii() && !c.is_ascii_control())
}

/// Expands `\s`, `\n`, `\t`, `\r` and `\\`. Any other escaped character is kept as-is.
pub(crate) fn unescape(value: &str) -> Result<String, ValueError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => return Err(ValueError::EscapeIncomplete),
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    Ok(out)
}

/// Splits on `;` unless escaped as `\;`, then unescapes every item.
/// A trailing `;` does not produce an empty item.
pub(super) fn split_escaped(value: &str) -> Result<Vec<String>, ValueError> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in value.chars() {
        if escaped {
            if c != ';' {
                current.push('\\');
            }
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ';' {
            items.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if escaped {
        return Err(ValueError::EscapeIncomplete);
    }
    if !current.is_empty() {
        items.push(current);
    }

    items.iter().map(|item| unescape(item)).collect()
}

pub(super) fn parse_bool(value: &str) -> Result<bool, ValueError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ValueError::InvalidBoolean(other.to_string())),
    }
}

pub(super) fn parse_string(value: &str) -> Result<String, ValueError> {
    if !is_ascii_no_control(value) {
        return Err(ValueError::NotAscii(value.to_string()));
    }
    unescape(value)
}

pub(super) fn parse_list(value: &str) -> Result<Vec<String>, ValueError> {
    if !is_ascii_no_control(value) {
        return Err(ValueError::NotAscii(value.to_string()));
    }
    split_escaped(value)
}

/// Splits `Name[nl_BE]` into `("Name", Some("nl_BE"))`.
pub(super) fn split_key(key: &str) -> Result<(&str, Option<&str>), ValueError> {
    if !key.ends_with(']') {
        return Ok((key, None));
    }
    let open = key
        .find('[')
        .ok_or_else(|| ValueError::UnmatchedBracket(key.to_string()))?;
    Ok((&key[..open], Some(&key[open + 1..key.len() - 1])))
}
