use claimwise_llm::{matches_any, CompletionClient, RedactionPolicy, SENTINEL};
use proptest::prelude::*;

proptest! {
    #[test]
    fn injected_ids_never_survive_redaction(
        prefix in "[a-z ]{0,120}",
        middle in "[a-z ]{0,120}",
        suffix in "[a-z ]{0,120}",
        area in 100u32..1000,
        group in 10u32..100,
        serial in 1000u32..10000,
        card in 1_000_000_000_000_000u64..10_000_000_000_000_000u64,
    ) {
        let id = format!("{area:03}-{group:02}-{serial:04}");
        let card = card.to_string();
        let context = format!("{prefix} {id} {middle} {card} {suffix}");
        let out = RedactionPolicy::standard().apply(&context);
        prop_assert!(!out.contains(&id));
        prop_assert!(!out.contains(&card));
        prop_assert!(!matches_any(&out));
        prop_assert!(out.contains(SENTINEL));
    }

    #[test]
    fn completion_text_never_contains_injected_id(
        prefix in "[a-z ]{0,250}",
        suffix in "[a-z ]{0,250}",
        area in 100u32..1000,
        group in 10u32..100,
        serial in 1000u32..10000,
    ) {
        let id = format!("{area:03}-{group:02}-{serial:04}");
        let context = format!("{prefix} {id} {suffix}");
        let client = CompletionClient::new("gpt-4o");
        let response = client.complete("Summarize policy", Some(&context)).unwrap();
        prop_assert!(!response.text.contains(&id));
    }

    #[test]
    fn token_estimate_matches_quarter_length(
        prompt in ".{0,300}",
        context in proptest::option::of("[a-zA-Z0-9 .,-]{0,400}"),
    ) {
        let client = CompletionClient::new("gpt-4o");
        let response = client.complete(&prompt, context.as_deref()).unwrap();
        prop_assert_eq!(response.tokens as usize, response.text.chars().count() / 4);
    }

    #[test]
    fn match_free_context_truncates_at_200_chars(context in "[a-z ]{201,400}") {
        let client = CompletionClient::new("m");
        let response = client.complete("ignored", Some(&context)).unwrap();
        let embedded: String = context.chars().take(200).collect();
        prop_assert_eq!(response.text, format!("[m] Summary: {embedded}..."));
    }
}
