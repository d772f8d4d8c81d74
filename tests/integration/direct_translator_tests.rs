/*!
 * Integration tests for the direct (whole-document) translator
 */

use anyhow::Result;
use log::Level;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mdtrans::app_controller::Controller;
use mdtrans::errors::{AppError, ProviderError};
use mdtrans::providers::mock::{MockProvider, MockReply};
use mdtrans::translation::document::DocumentTranslator;
use mdtrans::translation::frontmatter::has_front_matter;
use crate::common;

const MINIMAL_POST: &str = "---\ntitle: Hi\n---\nHello";

#[tokio::test]
async fn test_run_withMinimalPost_shouldWriteExactTranslation() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::anthropic_body("こんにちは")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "post.md", MINIMAL_POST)?;
    let config = common::create_test_config(temp_dir.path(), Some("sk-test"), &mock_server.uri())?;
    let output = temp_dir.path().join("ja").join("post.md");
    assert!(has_front_matter(MINIMAL_POST));

    common::capture_logs();
    let controller = Controller::from_config_path(&config)?;
    controller.run(&input, Some(&output)).await?;

    assert_eq!(std::fs::read_to_string(&output)?, "こんにちは");
    assert_eq!(common::take_logs(Level::Warn), Vec::<String>::new());

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    assert!(prompt.contains(MINIMAL_POST));
    assert_eq!(body["messages"].as_array().map(|m| m.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_run_withConfigMissingApiKey_shouldFailBeforeAnyRemoteCall() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::anthropic_body("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = common::create_temp_dir()?;
    let config = common::create_test_config(temp_dir.path(), None, &mock_server.uri())?;

    let result = Controller::from_config_path(&config);

    assert!(matches!(result, Err(AppError::Config(_))));
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_run_withMissingInput_shouldFailWithoutRemoteCall() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::anthropic_body("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = common::create_temp_dir()?;
    let config = common::create_test_config(temp_dir.path(), Some("sk-test"), &mock_server.uri())?;
    let controller = Controller::from_config_path(&config)?;

    let result = controller.run(&temp_dir.path().join("absent.md"), None).await;

    assert!(matches!(result, Err(AppError::InputRead { .. })));
    Ok(())
}

#[tokio::test]
async fn test_run_withRemoteFailure_shouldFailAndWriteNothing() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "post.md", MINIMAL_POST)?;
    let config = common::create_test_config(temp_dir.path(), Some("sk-wrong"), &mock_server.uri())?;
    let output = temp_dir.path().join("out.md");

    let result = Controller::from_config_path(&config)?.run(&input, Some(&output)).await;

    match result {
        Err(AppError::Provider(ProviderError::ApiError { status_code, .. })) => assert_eq!(status_code, 401),
        other => panic!("expected API error, got {:?}", other),
    }
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_runWithProvider_withMockProvider_shouldSendSinglePrompt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "post.md", "# No front-matter\n\nBody")?;
    let output = temp_dir.path().join("out.md");

    let provider = MockProvider::scripted(vec![MockReply::Text("# 見出し\n\n本文\n".to_string())]);
    common::capture_logs();
    Controller::run_with_provider(provider, &input, Some(&output)).await?;

    assert_eq!(std::fs::read_to_string(&output)?, "# 見出し\n\n本文");
    assert_eq!(common::take_logs(Level::Warn), vec!["No frontmatter detected in input file".to_string()]);
    Ok(())
}

#[test]
fn test_translateMarkdown_withMalformedReply_shouldReturnMalformedResponse() {
    let translator = DocumentTranslator::new(MockProvider::scripted(vec![MockReply::Malformed]));

    let result = tokio_test::block_on(translator.translate_markdown(MINIMAL_POST));

    assert!(result.unwrap_err().is_malformed_response());
    assert_eq!(translator.provider().request_count(), 1);
}
