use assert_cmd::Command;

fn run(input: &str) -> Vec<String> {
    let output = Command::cargo_bin("arabic_engine")
        .unwrap()
        .env("RUST_LOG", "off")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod passing {
    use super::run;

    #[test]
    fn text_commands() {
        let replies = run("NORMALIZE إسلام\nDIRECTION hello\nQUESTION هل هذا صحيح\nCORRECT بسم اللة\nEXIT\n");
        assert_eq!(
            replies,
            vec![
                "NORMALIZED اسلام",
                "DIRECTION ltr",
                "QUESTION true",
                "CORRECTED بسم الله",
            ]
        );
    }

    #[test]
    fn search_and_highlight() {
        let replies = run("SEARCH مدرسة\tفي المدرسة\nHIGHLIGHT news\tBreaking NEWS\n");
        assert_eq!(
            replies,
            vec![
                "FOUND true",
                r#"HIGHLIGHTED Breaking <mark class="bg-warning">NEWS</mark>"#,
            ]
        );
    }

    #[test]
    fn formatting_commands() {
        let replies = run("FORMAT_NUMBER 1234.5\nFORMAT_NUMBER ١٢\nFORMAT_DATE 2024-03-15 short\n");
        assert_eq!(
            replies,
            vec!["FORMATTED ١٬٢٣٤٫٥", "FORMATTED ١٢", "FORMATTED ١٥ مارس ٢٠٢٤"]
        );
    }

    #[test]
    fn keyboard_toggle() {
        let replies = run("TOGGLE_KEYBOARD\nTOGGLE_KEYBOARD\n");
        assert_eq!(replies, vec!["KEYBOARD en ltr", "KEYBOARD ar rtl"]);
    }

    #[test]
    fn analyze_is_json() {
        let replies = run("ANALYZE ما هو أفضل وقت للنشر\n");
        let json = replies[0].strip_prefix("ANALYSIS ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["is_question"], serde_json::json!(true));
        assert_eq!(value["word_count"], serde_json::json!(5));
    }

    #[test]
    fn exit_stops_processing() {
        let replies = run("EXIT\nNORMALIZE أ\n");
        assert!(replies.is_empty());
    }
}

#[cfg(test)]
mod failing {
    use super::run;

    #[test]
    fn unknown_command() {
        assert_eq!(run("BOGUS\n"), vec!["ERROR unknown command: BOGUS"]);
    }

    #[test]
    fn not_a_number() {
        assert_eq!(run("FORMAT_NUMBER abc\n"), vec!["ERROR not a number: abc"]);
    }

    #[test]
    fn bad_currency() {
        let replies = run("FORMAT_CURRENCY 10 DOLLARS\n");
        assert_eq!(replies, vec!["ERROR invalid currency code: DOLLARS"]);
    }

    #[test]
    fn search_without_tab() {
        let replies = run("SEARCH مدرسة\n");
        assert!(replies[0].starts_with("ERROR "));
    }
}
