use tickwriter::markup::{tag_help, tokenize, Token, TokenKind};

fn words_only(content: &str) -> String {
    tokenize(content)
        .into_iter()
        .filter(Token::is_words)
        .map(|token| token.parameter)
        .collect()
}

#[test]
fn words_reproduce_input_without_tags() {
    let script = "Well<w=0.5>, <b>hello</b> <color=red>there</color>!<wi><vpunch=3>";
    assert_eq!(words_only(script), "Well, hello there!");
}

#[test]
fn unknown_tags_stay_verbatim() {
    let tokens = tokenize("a<foo>b");
    assert_eq!(tokens, vec![Token::words("a<foo>b")]);
    assert_eq!(words_only("1 < 2 and <w"), "1 < 2 and <w");
}

#[test]
fn bold_run_tokenizes_in_order() {
    assert_eq!(
        tokenize("A<b>B</b>C"),
        vec![
            Token::words("A"),
            Token::bare(TokenKind::BoldStart),
            Token::words("B"),
            Token::bare(TokenKind::BoldEnd),
            Token::words("C"),
        ]
    );
}

#[test]
fn parameters_are_kept_raw() {
    let tokens = tokenize("<s=abc><audio=door creak><w>");
    assert_eq!(tokens[0], Token::new(TokenKind::SpeedStart, "abc"));
    assert_eq!(tokens[1], Token::new(TokenKind::Audio, "door creak"));
    assert_eq!(tokens[2], Token::bare(TokenKind::Wait));
}

#[test]
fn tag_help_lists_every_tag() {
    let help = tag_help();
    for tag in ["<b>", "<wi>", "<wc>", "<audioloop=", "<flash", "<x>", "<m="] {
        assert!(help.contains(tag), "missing {tag} in help");
    }
}

#[test]
fn parameter_tags_without_value_are_text() {
    for script in ["a<s>b", "a<color>b", "a<m>b", "a<audio>b", "a<vpunch>b"] {
        assert_eq!(tokenize(script), vec![Token::words(script)], "{script}");
    }
    assert_eq!(
        tokenize("a<w>b"),
        vec![Token::words("a"), Token::bare(TokenKind::Wait), Token::words("b")]
    );
}
