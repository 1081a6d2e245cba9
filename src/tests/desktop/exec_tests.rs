use super::*;

fn lit(s: &str) -> ExecArgPart {
    ExecArgPart::Literal(s.to_string())
}

#[test]
fn escaped_backslash_inside_quotes() {
    let exec = ExecValue::parse(r#"test "\\\\""#).unwrap();
    assert_eq!(exec.args(), &[vec![lit("test")], vec![lit("\\")]]);
    assert_eq!(exec.program(), Some("test"));
}

#[test]
fn field_codes_split_and_join_arguments() {
    let exec = ExecValue::parse(r#"test %f %i %ch "hello"%kthere"#).unwrap();
    assert_eq!(
        exec.args(),
        &[
            vec![lit("test")],
            vec![ExecArgPart::FieldCode('f')],
            vec![ExecArgPart::FieldCode('i')],
            vec![ExecArgPart::FieldCode('c'), lit("h")],
            vec![lit("hello"), ExecArgPart::FieldCode('k'), lit("there")],
        ]
    );
    assert!(exec.can_open_files());
    assert!(!exec.can_open_urls());
}

#[test]
fn quoted_field_codes_are_literal() {
    let exec = ExecValue::parse(r#"app "%i" 100%%"#).unwrap();
    assert_eq!(
        exec.args(),
        &[vec![lit("app")], vec![lit("%i")], vec![lit("100%")]]
    );
    assert!(!exec.has_any_field_code(&['i']));
}

#[test]
fn repeated_spaces_collapse() {
    let exec = ExecValue::parse("  app   --flag  %U").unwrap();
    assert_eq!(exec.args().len(), 3);
    assert!(exec.can_open_urls());
    assert!(exec.can_open_files());
}

#[test]
fn deprecated_field_codes_are_dropped() {
    let exec = ExecValue::parse("app %d %m").unwrap();
    assert_eq!(exec.args(), &[vec![lit("app")]]);
}

#[test]
fn rejects_invalid_values() {
    let cases = [
        ("", ExecError::Empty),
        ("app %f %u", ExecError::TooManyFileFieldCodes),
        ("app %Fx", ExecError::FieldCodeMustBeOwnArg),
        ("app x%U", ExecError::FieldCodeMustBeOwnArg),
        ("app %z", ExecError::UnknownFieldCode('z')),
        ("app %", ExecError::FieldCodeIncomplete),
        ("app \"unterminated", ExecError::QuoteNotCompleted),
        ("app a|b", ExecError::CharacterMustBeQuoted('|')),
        (r#"app "\a""#, ExecError::UnknownEscapedCharacter('a')),
        ("app ünï", ExecError::NotAscii("app ünï".to_string())),
    ];

    for (input, expected) in cases {
        assert_eq!(ExecValue::parse(input), Err(expected), "input: {input:?}");
    }
}

#[test]
fn reserved_characters_are_allowed_in_quotes() {
    let exec = ExecValue::parse(r#"sh "a|b;c""#).unwrap();
    assert_eq!(exec.args(), &[vec![lit("sh")], vec![lit("a|b;c")]]);
}

#[test]
fn to_arguments_expands_inline_field_codes() {
    let exec = ExecValue::parse(r#"test Well%cHello %f "--location="%k"#).unwrap();
    let codes = FieldCodes {
        file: Some("/usr/bin/true".to_string()),
        name: Some("_Name_".to_string()),
        location: Some("/tmp/d.desktop".to_string()),
        ..FieldCodes::default()
    };
    assert_eq!(
        exec.to_arguments(&codes),
        vec![
            "test",
            "Well_Name_Hello",
            "/usr/bin/true",
            "--location=/tmp/d.desktop"
        ]
    );
}

#[test]
fn to_arguments_icon_becomes_its_own_flag() {
    let codes = FieldCodes {
        icon: Some("banana.jpeg".to_string()),
        ..FieldCodes::default()
    };
    for raw in ["test %i", "test%i"] {
        let exec = ExecValue::parse(raw).unwrap();
        assert_eq!(
            exec.to_arguments(&codes),
            vec!["test", "--icon", "banana.jpeg"],
            "{raw}"
        );
    }
}

#[test]
fn to_arguments_list_codes_spread_into_separate_arguments() {
    let exec = ExecValue::parse("test %F").unwrap();
    let codes = FieldCodes {
        files: vec!["/usr/bin/true".to_string(), "/usr/bin/false".to_string()],
        ..FieldCodes::default()
    };
    assert_eq!(
        exec.to_arguments(&codes),
        vec!["test", "/usr/bin/true", "/usr/bin/false"]
    );

    let exec = ExecValue::parse("open --new %U").unwrap();
    let codes = FieldCodes {
        urls: vec!["https://a.example".to_string(), "file:///b".to_string()],
        ..FieldCodes::default()
    };
    assert_eq!(
        exec.to_arguments(&codes),
        vec!["open", "--new", "https://a.example", "file:///b"]
    );
}

#[test]
fn to_arguments_drops_arguments_without_values() {
    let exec = ExecValue::parse("viewer %u %i").unwrap();
    assert_eq!(exec.to_arguments(&FieldCodes::default()), vec!["viewer"]);

    let codes = FieldCodes {
        url: Some(String::new()),
        ..FieldCodes::default()
    };
    assert_eq!(exec.to_arguments(&codes), vec!["viewer"]);
}
