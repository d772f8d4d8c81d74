/*!
 * Process-level tests for the two binaries
 */

use anyhow::Result;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

const MDTRANS: &str = env!("CARGO_BIN_EXE_mdtrans");
const MDTRANS_PLACEHOLDER: &str = env!("CARGO_BIN_EXE_mdtrans-placeholder");

async fn run_binary(binary: &str, args: &[&str]) -> Result<Output> {
    Ok(Command::new(binary).args(args).output().await?)
}

#[tokio::test]
async fn test_mdtrans_withMinimalPost_shouldPrintTranslationWithoutWarning() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::anthropic_body("こんにちは")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "post.md", "---\ntitle: Hi\n---\nHello")?;
    let config = common::create_test_config(temp_dir.path(), Some("sk-test"), &mock_server.uri())?;

    let output = run_binary(MDTRANS, &[
        input.to_str().unwrap_or_default(),
        "--config",
        config.to_str().unwrap_or_default(),
    ]).await?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "こんにちは\n");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("No frontmatter"));
    Ok(())
}

#[tokio::test]
async fn test_mdtrans_withConfigMissingApiKey_shouldExitOneWithoutRemoteCall() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::anthropic_body("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "post.md", "Hello")?;
    let config = common::create_test_config(temp_dir.path(), None, &mock_server.uri())?;

    let output = run_binary(MDTRANS, &[
        input.to_str().unwrap_or_default(),
        "-c",
        config.to_str().unwrap_or_default(),
    ]).await?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("api_key"));
    assert!(output.stdout.is_empty());
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_mdtrans_withoutConfigFlag_shouldFailUsage() -> Result<()> {
    let output = run_binary(MDTRANS, &["post.md"]).await?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--config <CONFIG>"));
    Ok(())
}

#[tokio::test]
async fn test_mdtrans_help_shouldShowConfigAsRequired() -> Result<()> {
    let output = run_binary(MDTRANS, &["--help"]).await?;
    let help = String::from_utf8(output.stdout)?;

    let usage = help.lines()
        .find(|line| line.starts_with("Usage:"))
        .unwrap_or_default();
    assert!(usage.contains("--config <CONFIG>"), "usage line was: {}", usage);
    assert!(!usage.contains("[INPUT_FILE]"));
    Ok(())
}

#[tokio::test]
async fn test_mdtrans_completions_shouldNotRequireConfig() -> Result<()> {
    let output = run_binary(MDTRANS, &["completions", "bash"]).await?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("mdtrans"));
    Ok(())
}

#[tokio::test]
async fn test_mdtransPlaceholder_withMissingInput_shouldExitOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("absent.txt");

    let output = run_binary(MDTRANS_PLACEHOLDER, &[
        missing.to_str().unwrap_or_default(),
        "--host",
        "http://127.0.0.1:1",
    ]).await?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("file not found"));
    Ok(())
}
