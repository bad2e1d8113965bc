//! Process-wide store tests
//!
//! These share one global configuration, so they run serially.

use mockito::{Matcher, Server};
use promptvault::PromptSource;
use serial_test::serial;

#[test]
#[serial]
fn test_dotted_access_through_global_store() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/prompts/research-manager")
        .match_query(Matcher::Exact("projectSlug=agents-lextenso".to_string()))
        .match_header("x-api-key", "pk_global")
        .with_status(200)
        .with_body(r#"{"content": "global content"}"#)
        .expect(2)
        .create();

    promptvault::configure(&server.url(), "pk_global");

    let content = promptvault::vault()
        .namespace("agents_lextenso")
        .prompt("research_manager")
        .unwrap();
    assert_eq!(content, "global content");

    let content = promptvault::namespace("agents_lextenso")
        .prompt("research_manager")
        .unwrap();
    assert_eq!(content, "global content");

    mock.assert();
}

#[test]
#[serial]
fn test_last_configure_wins() {
    let mut first = Server::new();
    let first_mock = first
        .mock("GET", "/api/prompts/greeting")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"content": "first"}"#)
        .expect(0)
        .create();

    let mut second = Server::new();
    let second_mock = second
        .mock("GET", "/api/prompts/greeting")
        .match_query(Matcher::Any)
        .match_header("x-api-key", "pk_second")
        .with_status(200)
        .with_body(r#"{"content": "second"}"#)
        .create();

    promptvault::configure(&first.url(), "pk_first");
    promptvault::configure(&format!("{}/", second.url()), "pk_second");

    let content = promptvault::get_prompt("greeting", "demo", None).unwrap();
    assert_eq!(content, "second");

    first_mock.assert();
    second_mock.assert();
}

#[test]
#[serial]
fn test_global_version_pinning() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/prompts/research-manager")
        .match_query(Matcher::Exact("projectSlug=agents-lextenso&version=1".to_string()))
        .with_status(200)
        .with_body(r#"{"content": "v1"}"#)
        .create();

    promptvault::configure(&server.url(), "pk_global");

    let content = promptvault::get_prompt("research-manager", "agents-lextenso", Some(1)).unwrap();
    assert_eq!(content, "v1");
    mock.assert();
}

#[test]
#[serial]
fn test_configure_from_env() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/prompts/from-env")
        .match_query(Matcher::Any)
        .match_header("x-api-key", "pk_env")
        .with_status(200)
        .with_body(r#"{"content": "env content"}"#)
        .expect(2)
        .create();

    // SAFETY: serialized with the other env-reading tests in this binary
    unsafe {
        std::env::set_var("PROMPTVAULT_BASE_URL", server.url());
        std::env::set_var("PROMPTVAULT_API_KEY", "pk_env");
    }

    promptvault::configure_from_env().unwrap();
    let content = promptvault::get_prompt("from-env", "demo", None).unwrap();
    assert_eq!(content, "env content");

    let client = promptvault::PromptClient::from_env().unwrap();
    assert_eq!(client.get_prompt("from-env", "demo", None).unwrap(), "env content");

    // SAFETY: see above
    unsafe {
        std::env::remove_var("PROMPTVAULT_BASE_URL");
        std::env::remove_var("PROMPTVAULT_API_KEY");
    }

    mock.assert();
}
