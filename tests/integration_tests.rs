//! End-to-end tokenizing scenarios

mod common;

use common::{drain, HALTON, LOREM, LOREM_STARRED};
use strtok::{
    count_tokens, split_with, EmptySourcePolicy, Level, LogConfig, Tokenizer, TokenizerConfig,
    TokenizerError, DEFAULT_DELIMITERS,
};

#[test]
fn test_empty_source_quirk() {
    let mut st = Tokenizer::new("");
    assert_eq!(st.count(), 0);
    assert_eq!(st.next_token(), Some(""));
    assert!(!st.has_more_tokens(), "has_more_tokens disagrees with the empty-source token");
}

#[test]
fn test_lorem_default_delimiters() {
    let mut st = Tokenizer::new(LOREM);
    assert_eq!(st.count(), 10);

    let tokens = drain(&mut st);
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[2], "dolor");
    assert_eq!(tokens.last().map(String::as_str), Some("id."));
}

#[test]
fn test_halton_sentence_counts() {
    let st = Tokenizer::new(HALTON);
    assert_eq!(st.count(), 50);

    let mut st = Tokenizer::new(HALTON);
    let mut produced = 0;
    while st.next_token().is_some() {
        produced += 1;
    }
    assert_eq!(produced, 50);
}

#[test]
fn test_starred_custom_delimiters() {
    let st = Tokenizer::with_delimiters(LOREM_STARRED, "*");
    assert_eq!(st.count(), 12);
}

#[test]
fn test_starred_emitting_delimiters() {
    let mut st = Tokenizer::with_options(LOREM_STARRED, "*", true);
    let stars = LOREM_STARRED.chars().filter(|&c| c == '*').count();
    assert_eq!(st.count(), 12 + stars);

    let tokens = drain(&mut st);
    assert_eq!(tokens.len(), 12 + stars);
    assert_eq!(tokens[..4], ["Lorem", "*", "ipsum", "*"]);
    assert_eq!(tokens.iter().filter(|t| t.as_str() == "*").count(), stars);

    let rebuilt: String = tokens.concat();
    assert_eq!(rebuilt, LOREM_STARRED);
}

#[test]
fn test_delimiters_changed_after_first_token() {
    let mut st = Tokenizer::new(LOREM_STARRED);
    assert_eq!(st.delimiters(), DEFAULT_DELIMITERS);
    st.next_token();

    st.set_delimiters("*");
    assert_eq!(st.delimiters(), "*");
    assert_eq!(st.count(), 3);
}

#[test]
fn test_reset_midway_through_loop() {
    let mut st = Tokenizer::new(LOREM);
    let mut count = 0;
    let mut reset_done = false;
    while st.has_more_tokens() {
        st.next_token();
        count += 1;
        if count == 5 && !reset_done {
            st.reset();
            reset_done = true;
        }
    }
    assert_eq!(count, 15);
}

#[test]
fn test_reset_restores_count() {
    let mut st = Tokenizer::new(LOREM);
    st.reset();
    assert_eq!(st.count(), 10);

    drain(&mut st);
    st.reset();
    assert_eq!(st.count(), 10);
}

#[test]
fn test_tokens_to_list_then_next_token() {
    let mut st = Tokenizer::new(LOREM);
    st.next_token();
    st.next_token();

    let items = st.tokens_to_list();
    assert_eq!(items.len(), st.count());
    assert_eq!(st.next_token(), Some("dolor"));
}

#[test]
fn test_tokens_to_array_length() {
    let mut st = Tokenizer::new(LOREM);
    assert_eq!(st.tokens_to_array().len(), 10);
}

#[test]
fn test_for_each_enumeration() {
    let mut st = Tokenizer::new(LOREM);
    let mut count = 0;
    for token in &mut st {
        assert!(!token.contains(' '));
        count += 1;
    }
    assert_eq!(count, 10);
}

#[test]
fn test_config_from_json() {
    let config = TokenizerConfig::from_json(
        r#"{"delimiters": "*", "emit_delimiters": false, "empty_source": "exhausted"}"#,
    )
    .unwrap();

    assert_eq!(count_tokens(LOREM_STARRED, &config), 12);
    assert_eq!(split_with(LOREM_STARRED, &config)[0], "Lorem");

    let mut empty = Tokenizer::from_config("", &config);
    assert_eq!(empty.empty_source_policy(), EmptySourcePolicy::Exhausted);
    assert_eq!(empty.next_token(), None);
}

#[test]
fn test_missing_source_is_rejected() {
    let result = Tokenizer::try_new(None::<&str>, &TokenizerConfig::default());
    assert!(matches!(result, Err(TokenizerError::MissingSource)));
}

#[test]
fn test_logging_through_config() {
    let (logger, ring) = LogConfig::new(Level::Trace).with_ring_buffer(64).init();
    let mut st = Tokenizer::new(LOREM).with_logger(logger);

    st.set_delimiters(",");
    st.tokens_to_list();
    st.reset();

    let ring = ring.expect("ring buffer configured");
    let messages: Vec<_> = ring.dump_records().into_iter().map(|r| r.message).collect();
    assert!(messages.iter().any(|m| m.starts_with("Delimiters set to \",\"")));
    assert!(messages.iter().any(|m| m == "Materialized 2 tokens from byte 0"));
    assert!(messages.iter().any(|m| m == "Reset from byte 0"));
}
