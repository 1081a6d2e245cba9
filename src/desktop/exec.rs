use serde::Serialize;
use thiserror::Error;

use super::values::{is_ascii_no_control, unescape};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("Exec value is empty")]
    Empty,
    #[error("Exec value must be ASCII: {0:?}")]
    NotAscii(String),
    #[error("unexpected end of string, escape sequence not completed")]
    EscapeIncomplete,
    #[error("character must be quoted: {0:?}")]
    CharacterMustBeQuoted(char),
    #[error("backslash escape outside of quotes")]
    EscapeOutsideQuotes,
    #[error("character must not be escaped: {0:?}")]
    UnknownEscapedCharacter(char),
    #[error("unexpected end of string, field code not completed")]
    FieldCodeIncomplete,
    #[error("%F and %U must be separate arguments")]
    FieldCodeMustBeOwnArg,
    #[error("double quote does not have a matching closing quote")]
    QuoteNotCompleted,
    #[error("more than one file field code (%f, %F, %u, %U)")]
    TooManyFileFieldCodes,
    #[error("unknown field code: %{0}")]
    UnknownFieldCode(char),
}

/// One piece of an Exec argument: literal text or an unexpanded field code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ExecArgPart {
    Literal(String),
    /// The field code letter, without `%`.
    FieldCode(char),
}

/// A parsed Exec key, one `Vec<ExecArgPart>` per program argument.
///
/// Field codes inside double quotes are literal text, so `"%i"` stays `%i` while
/// `"hello"%cthere` becomes a single argument of three parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExecValue {
    args: Vec<Vec<ExecArgPart>>,
}

/// Values substituted for field codes by [`ExecValue::to_arguments`].
///
/// A missing or empty value leaves its field code unexpanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldCodes {
    /// `%f`
    pub file: Option<String>,
    /// `%F`
    pub files: Vec<String>,
    /// `%u`
    pub url: Option<String>,
    /// `%U`
    pub urls: Vec<String>,
    /// `%i`, passed as `--icon <icon>`.
    pub icon: Option<String>,
    /// `%c`, the translated name.
    pub name: Option<String>,
    /// `%k`, the desktop file location.
    pub location: Option<String>,
}

const MUST_BE_QUOTED: &[char] = &[
    '\t', '\n', '\'', '>', '<', '~', '|', '&', ';', '$', '*', '?', '#', '(', ')', '`',
];

impl ExecValue {
    pub fn parse(raw: &str) -> Result<Self, ExecError> {
        if raw.is_empty() {
            return Err(ExecError::Empty);
        }
        if !is_ascii_no_control(raw) {
            return Err(ExecError::NotAscii(raw.to_string()));
        }
        let value = unescape(raw).map_err(|_| ExecError::EscapeIncomplete)?;

        let mut args: Vec<Vec<ExecArgPart>> = Vec::new();
        let mut parts: Vec<ExecArgPart> = Vec::new();
        let mut text = String::new();
        let mut quoted = false;
        let mut escaped = false;
        let mut has_file_code = false;

        fn flush(text: &mut String, parts: &mut Vec<ExecArgPart>) {
            if !text.is_empty() {
                parts.push(ExecArgPart::Literal(std::mem::take(text)));
            }
        }

        let chars: Vec<char> = value.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            i += 1;

            if escaped {
                match c {
                    '"' | '`' | '$' | '\\' => text.push(c),
                    other => return Err(ExecError::UnknownEscapedCharacter(other)),
                }
                escaped = false;
                continue;
            }

            match c {
                '\\' => {
                    if !quoted {
                        return Err(ExecError::EscapeOutsideQuotes);
                    }
                    escaped = true;
                }
                '"' => {
                    flush(&mut text, &mut parts);
                    quoted = !quoted;
                }
                ' ' if quoted => text.push(' '),
                ' ' => {
                    if text.is_empty() && parts.is_empty() {
                        continue;
                    }
                    flush(&mut text, &mut parts);
                    args.push(std::mem::take(&mut parts));
                }
                '%' if quoted => text.push('%'),
                '%' => {
                    let code = *chars.get(i).ok_or(ExecError::FieldCodeIncomplete)?;
                    i += 1;
                    match code {
                        '%' => text.push('%'),
                        // Deprecated field codes are dropped.
                        'd' | 'D' | 'n' | 'N' | 'v' | 'm' => {}
                        'F' | 'U' => {
                            if has_file_code {
                                return Err(ExecError::TooManyFileFieldCodes);
                            }
                            let alone_before = text.is_empty() && parts.is_empty();
                            let alone_after = chars.get(i).is_none_or(|next| *next == ' ');
                            if !alone_before || !alone_after {
                                return Err(ExecError::FieldCodeMustBeOwnArg);
                            }
                            has_file_code = true;
                            parts.push(ExecArgPart::FieldCode(code));
                        }
                        'f' | 'u' => {
                            if has_file_code {
                                return Err(ExecError::TooManyFileFieldCodes);
                            }
                            has_file_code = true;
                            flush(&mut text, &mut parts);
                            parts.push(ExecArgPart::FieldCode(code));
                        }
                        'i' | 'c' | 'k' => {
                            flush(&mut text, &mut parts);
                            parts.push(ExecArgPart::FieldCode(code));
                        }
                        other => return Err(ExecError::UnknownFieldCode(other)),
                    }
                }
                c if !quoted && MUST_BE_QUOTED.contains(&c) => {
                    return Err(ExecError::CharacterMustBeQuoted(c));
                }
                c => text.push(c),
            }
        }

        if escaped {
            return Err(ExecError::EscapeIncomplete);
        }
        if quoted {
            return Err(ExecError::QuoteNotCompleted);
        }

        flush(&mut text, &mut parts);
        if !parts.is_empty() {
            args.push(parts);
        }

        Ok(Self { args })
    }

    pub fn args(&self) -> &[Vec<ExecArgPart>] {
        &self.args
    }

    /// The program, when the first argument is plain text.
    pub fn program(&self) -> Option<&str> {
        match self.args.first()?.as_slice() {
            [ExecArgPart::Literal(program)] => Some(program),
            _ => None,
        }
    }

    /// True if opening local files is explicitly supported.
    pub fn can_open_files(&self) -> bool {
        self.has_any_field_code(&['f', 'F', 'u', 'U'])
    }

    /// True if opening URLs is explicitly supported.
    pub fn can_open_urls(&self) -> bool {
        self.has_any_field_code(&['u', 'U'])
    }

    /// Expand field codes into the argument list to execute.
    ///
    /// `%F`, `%U` and `%i` produce whole arguments of their own; any text already
    /// collected for the current argument is emitted first.
    pub fn to_arguments(&self, codes: &FieldCodes) -> Vec<String> {
        let mut out = Vec::with_capacity(self.args.len());
        let mut current = String::new();

        fn emit(out: &mut Vec<String>, current: &mut String, extra: &[String]) {
            if !current.is_empty() {
                out.push(std::mem::take(current));
            }
            out.extend(extra.iter().cloned());
        }

        fn single(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        for arg in &self.args {
            for part in arg {
                match part {
                    ExecArgPart::Literal(text) => current.push_str(text),
                    ExecArgPart::FieldCode(code @ ('f' | 'u' | 'c' | 'k')) => {
                        let value = match code {
                            'f' => &codes.file,
                            'u' => &codes.url,
                            'c' => &codes.name,
                            _ => &codes.location,
                        };
                        current.push_str(single(value).unwrap_or(""));
                    }
                    ExecArgPart::FieldCode('F') => emit(&mut out, &mut current, &codes.files),
                    ExecArgPart::FieldCode('U') => emit(&mut out, &mut current, &codes.urls),
                    ExecArgPart::FieldCode('i') => {
                        if let Some(icon) = single(&codes.icon) {
                            emit(&mut out, &mut current, &["--icon".to_string(), icon.to_string()]);
                        }
                    }
                    ExecArgPart::FieldCode(_) => {}
                }
            }
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        }

        out
    }

    pub fn has_any_field_code(&self, codes: &[char]) -> bool {
        self.args.iter().flatten().any(|part| match part {
            ExecArgPart::FieldCode(code) => codes.contains(code),
            ExecArgPart::Literal(_) => false,
        })
    }
}

#[cfg(test)]
#[path = "../tests/desktop/exec_tests.rs"]
mod tests;
