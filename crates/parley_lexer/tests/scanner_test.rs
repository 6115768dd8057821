//! Tests for scanning message content.

use parley_error::LexerErrorKind;
use parley_lexer::{ContentScanner, MatchFields, PatternKind, scan};
use strum::IntoEnumIterator;

const SAMPLE: &str = "<a:wave:12345> hi <@!42> <@7> in <#100> for <@&200>! \
    **bold** _it_ *also* __under__ ~~gone~~ ||shh|| `code` \
    ```rust\nfn main() {}\n``` see https://example.com/page, ok?";

#[test]
fn test_animated_emoji() {
    let result = scan("EMOJI", "<a:wave:12345>", false).unwrap();
    assert_eq!(result.len(), 1);
    let m = &result.matches()[0];
    assert_eq!(m.matched_text(), "<a:wave:12345>");
    assert_eq!(
        m.fields(),
        &MatchFields::Emoji {
            name: "wave".to_string(),
            id: "12345".to_string(),
            animated: true,
        }
    );
}

#[test]
fn test_animated_flag_follows_content_start() {
    // Flagged from the start of the content, not per match.
    let result = scan("EMOJI", "<a:wave:1> <:smile:2>", false).unwrap();
    assert!(result.matches().iter().all(|m| matches!(
        m.fields(),
        MatchFields::Emoji { animated: true, .. }
    )));

    let result = scan("EMOJI", "hey <a:wave:1>", false).unwrap();
    assert!(matches!(
        result.matches()[0].fields(),
        MatchFields::Emoji { animated: false, .. }
    ));
}

#[test]
fn test_animated_flag_checks_two_character_prefix() {
    let result = scan("EMOJI", "<a href> <:x:1>", false).unwrap();
    assert_eq!(
        result.matches()[0].fields(),
        &MatchFields::Emoji {
            name: "x".to_string(),
            id: "1".to_string(),
            animated: true,
        }
    );
}

#[test]
fn test_nickname_mention() {
    let result = scan("MENTION_USER", "<@!42>", false).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.matches()[0].fields(),
        &MatchFields::MentionUser {
            id: "42".to_string(),
            mention_type: "!".to_string(),
        }
    );

    let result = scan("mention_user", "<@42>", false).unwrap();
    assert_eq!(
        result.matches()[0].fields(),
        &MatchFields::MentionUser {
            id: "42".to_string(),
            mention_type: String::new(),
        }
    );
}

#[test]
fn test_channel_and_role_mentions() {
    let channel = scan("MENTION_CHANNEL", SAMPLE, false).unwrap();
    assert_eq!(channel.matches()[0].fields().id(), Some("100"));

    let role = scan("MENTION_ROLE", SAMPLE, false).unwrap();
    assert_eq!(role.len(), 1);
    assert_eq!(role.matches()[0].fields().id(), Some("200"));
}

#[test]
fn test_codeblock_with_language() {
    let result = scan("TEXT_CODEBLOCK", "```js\nconsole.log(1)\n```", false).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.matches()[0].fields(),
        &MatchFields::Codeblock {
            language: Some("js".to_string()),
            text: "console.log(1)".to_string(),
        }
    );
}

#[test]
fn test_codeblock_trims_blank_lines() {
    let result = scan("TEXT_CODEBLOCK", "```\n\nlet x = 1;\n\n\n```", false).unwrap();
    assert_eq!(
        result.matches()[0].fields(),
        &MatchFields::Codeblock {
            language: None,
            text: "let x = 1;".to_string(),
        }
    );

    let result = scan("TEXT_CODEBLOCK", "```inline```", false).unwrap();
    assert_eq!(result.matches()[0].fields().text(), Some("inline"));
}

#[test]
fn test_snowflake_matches_every_digit_run() {
    let result = scan("TEXT_SNOWFLAKE", SAMPLE, false).unwrap();
    let texts: Vec<_> = result
        .matches()
        .iter()
        .filter_map(|m| m.fields().text())
        .collect();
    assert_eq!(texts, vec!["12345", "42", "7", "100", "200"]);
}

#[test]
fn test_no_match_is_empty_not_error() {
    for kind in PatternKind::iter() {
        let result = ContentScanner::new().scan(kind, "plain words only", false);
        assert!(result.is_empty(), "{kind} matched plain text");
        assert_eq!(*result.kind(), kind);
    }
}

#[test]
fn test_unknown_kind() {
    let err = scan("TEXT_BLINK", SAMPLE, false).unwrap_err();
    assert_eq!(
        err.kind(),
        &LexerErrorKind::UnknownPatternKind("TEXT_BLINK".to_string())
    );
}

#[test]
fn test_first_only_is_prefix_of_full_scan() {
    let scanner = ContentScanner::new();
    for kind in PatternKind::iter() {
        let all = scanner.scan(kind, SAMPLE, false);
        let first = scanner.scan(kind, SAMPLE, true);
        assert!(first.len() <= 1);
        assert_eq!(first.matches()[..], all.matches()[..first.len()], "{kind}");
        assert_eq!(first.is_empty(), all.is_empty(), "{kind}");
    }
}

#[test]
fn test_repeated_scans_are_identical() {
    let scanner = ContentScanner::new();
    for kind in PatternKind::iter() {
        let _ = scanner.scan(kind, SAMPLE, true);
        assert_eq!(
            scanner.scan(kind, SAMPLE, false),
            scanner.scan(kind, SAMPLE, false),
            "{kind}"
        );
    }
}

#[test]
fn test_matched_text_is_verbatim_substring() {
    let scanner = ContentScanner::new();
    for result in scanner.scan_many(PatternKind::iter(), SAMPLE, false) {
        for m in result.matches() {
            assert_eq!(&SAMPLE[m.span()], m.matched_text().as_str());
        }
    }
}

#[test]
fn test_scan_many_keeps_requested_order() {
    let results = ContentScanner::new().scan_many(
        [PatternKind::TextUrl, PatternKind::TextBold],
        SAMPLE,
        false,
    );
    assert_eq!(*results[0].kind(), PatternKind::TextUrl);
    assert_eq!(
        results[0].matches()[0].fields().text(),
        Some("https://example.com/page")
    );
    assert_eq!(*results[1].kind(), PatternKind::TextBold);
    assert_eq!(results[1].matches()[0].fields().text(), Some("bold"));
}

#[test]
fn test_concurrent_scans_of_same_kind() {
    let scanner = ContentScanner::new();
    let expected = scanner.scan(PatternKind::TextSnowflake, SAMPLE, false);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| scanner.scan(PatternKind::TextSnowflake, SAMPLE, false)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_serializes_camel_case_fields() {
    let result = scan("JUMP_CHANNEL", "https://discord.com/channels/1/2", false).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["kind"], "JUMP_CHANNEL");
    assert_eq!(json["matches"][0]["matchedText"], "https://discord.com/channels/1/2");
    assert_eq!(json["matches"][0]["guildId"], "1");
    assert_eq!(json["matches"][0]["channelId"], "2");

    let result = scan("TEXT_CODEBLOCK", "```plain```", false).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["matches"][0].get("language").is_none());
    assert_eq!(json["matches"][0]["text"], "plain");
}
