//! The process-wide store before `configure` has ever been called.
//!
//! Kept in its own test binary so no other test can configure the store first.

use promptvault::{PromptSource, PromptVaultError};

#[test]
fn test_fetch_before_configure_is_not_configured() {
    let cases = [
        ("research-manager", "agents-lextenso", None),
        ("research-manager", "agents-lextenso", Some(3)),
        ("", "", None),
    ];

    for (slug, namespace, version) in cases {
        let err = promptvault::get_prompt(slug, namespace, version).unwrap_err();
        assert!(matches!(err, PromptVaultError::NotConfigured));
    }

    let err = promptvault::namespace("agents_lextenso")
        .prompt("research_manager")
        .unwrap_err();
    assert!(matches!(err, PromptVaultError::NotConfigured));

    let err = promptvault::vault()
        .get_prompt("research-manager", "agents-lextenso", None)
        .unwrap_err();
    assert!(matches!(err, PromptVaultError::NotConfigured));
}
