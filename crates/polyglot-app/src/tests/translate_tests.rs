use polyglot_types::ProviderId;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::state_for;
use crate::cli::TranslateArgs;
use crate::commands::{Outcome, handle_translate};

fn deepl_args(text: &str) -> TranslateArgs {
    TranslateArgs {
        text: Some(text.to_string()),
        from: Some("EN".to_string()),
        to: Some("KO".to_string()),
        providers: vec![ProviderId::DeepL],
        deepl_key: Some("deepl-key".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_translate_renders_deepl_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [ { "text": "안녕 세상" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (state, notifier) = state_for(&server.uri());
    let mut out = Vec::new();

    let outcome = handle_translate(&state, deepl_args("Hello world"), &mut out)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(String::from_utf8(out).unwrap(), "[DeepL Ver.]\n안녕 세상\n");
    assert!(notifier.warnings().is_empty());
}

#[tokio::test]
async fn test_empty_text_is_rejected_without_calls() {
    let server = MockServer::start().await;
    let (state, notifier) = state_for(&server.uri());
    let mut out = Vec::new();

    let outcome = handle_translate(&state, deepl_args("   "), &mut out)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(notifier.warnings(), vec!["Please enter text to translate."]);
    assert!(out.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_no_provider_selected_warns() {
    let server = MockServer::start().await;
    let (state, notifier) = state_for(&server.uri());

    // key given but provider not selected
    let mut args = deepl_args("Hello world");
    args.providers.clear();

    let mut out = Vec::new();
    let outcome = handle_translate(&state, args, &mut out).await.unwrap();

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(
        notifier.warnings(),
        vec!["Please select at least one translation provider and enter its API key."]
    );
    assert!(server.received_requests().await.unwrap().is_empty());

    // selected but no key
    let mut args = deepl_args("Hello world");
    args.deepl_key = None;
    let outcome = handle_translate(&state, args, &mut out).await.unwrap();
    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(notifier.warnings().len(), 2);
}

#[tokio::test]
async fn test_unknown_language_and_model_are_rejected() {
    let server = MockServer::start().await;
    let (state, notifier) = state_for(&server.uri());
    let mut out = Vec::new();

    let mut args = deepl_args("Hello world");
    args.to = Some("XX".to_string());
    let outcome = handle_translate(&state, args, &mut out).await.unwrap();
    assert_eq!(outcome, Outcome::Rejected);

    let mut args = deepl_args("Hello world");
    args.to = Some("auto".to_string());
    let outcome = handle_translate(&state, args, &mut out).await.unwrap();
    assert_eq!(outcome, Outcome::Rejected);

    let mut args = deepl_args("Hello world");
    args.gpt_model = Some("not-a-listed-model".to_string());
    let outcome = handle_translate(&state, args, &mut out).await.unwrap();
    assert_eq!(outcome, Outcome::Rejected);

    let warnings = notifier.warnings();
    assert_eq!(warnings.len(), 3);
    assert_eq!(warnings[0], "Unsupported target language: XX");
    assert_eq!(warnings[1], "Target language cannot be \"auto\".");
    assert!(warnings[2].starts_with("Unsupported GPT model: not-a-listed-model"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_still_renders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "?" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": { "content": "안녕 세상" } } ]
        })))
        .mount(&server)
        .await;

    let (state, notifier) = state_for(&server.uri());
    let mut args = deepl_args("Hello world");
    args.providers.push(ProviderId::Gpt);
    args.gpt_key = Some("gpt-key".to_string());
    args.gpt_model = Some("gpt-4o".to_string());

    let mut out = Vec::new();
    let outcome = handle_translate(&state, args, &mut out).await.unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[DeepL Ver.]\nTranslation failed due to unexpected API response structure.\n\n\
         [GPT (gpt-4o) Ver.]\n안녕 세상\n"
    );
    assert_eq!(notifier.errors().len(), 1);
}
