use std::env;

/// Trait for types that can retrieve their configuration key from environment variables
pub trait KeyFromEnv {
    /// The environment variable name for this client's API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking environment variables, loading .env first
    fn find_key() -> Option<String> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        env::var(Self::KEY_NAME).ok().filter(|key| !key.trim().is_empty())
    }
}

/// Read a non-empty setting from the environment (after loading .env).
pub fn env_override(name: &str) -> Option<String> {
    let _ = dotenvy::dotenv();
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
