//! The crate-level `generate` entry point. Kept in its own test binary
//! because it mutates process environment variables.

use quiz_gen::clients::{
    OpenRouterConfig, OpenRouterModel, DEFAULT_ENDPOINT, DEFAULT_ORIGIN, DEFAULT_TITLE,
};
use quiz_gen::{generate, AIError};
use std::net::TcpListener;

#[tokio::test]
async fn generate_ignores_environment_settings_and_surfaces_transport_errors() {
    std::env::set_var("QUIZGEN_MODEL", "env/model");
    std::env::set_var("QUIZGEN_ENDPOINT", "http://127.0.0.1:9/never");
    std::env::set_var("QUIZGEN_ORIGIN", "https://env.example");
    std::env::set_var("QUIZGEN_TITLE", "Env Title");

    let config = OpenRouterConfig::with_credential("explicit-key");
    assert_eq!(config.api_key, "explicit-key");
    assert_eq!(config.model, OpenRouterModel::default());
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.origin, DEFAULT_ORIGIN);
    assert_eq!(config.title, DEFAULT_TITLE);

    // Route the default HTTPS endpoint through a proxy port nobody listens on
    let dead = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    for var in ["https_proxy", "ALL_PROXY", "all_proxy", "NO_PROXY", "no_proxy"] {
        std::env::remove_var(var);
    }
    std::env::set_var("HTTPS_PROXY", format!("http://{dead}"));

    let err = generate("Some source text.", "explicit-key").await.unwrap_err();
    assert!(matches!(err, AIError::Transport(_)), "got {err:?}");
}
