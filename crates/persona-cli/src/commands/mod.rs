//! Command implementations.

pub mod fetch;
pub mod generate;
pub mod status;
pub mod username;

pub use self::fetch::execute_fetch;
pub use self::generate::execute_generate;
pub use self::status::execute_status;
pub use self::username::execute_username;

use crate::config::Environment;
use crate::error::{CliError, Result};
use persona_domain::extract_username;
use persona_reddit::RedditClient;
use tracing::debug;

/// Username from a profile URL, or an invalid-URL error.
pub fn resolve_username(url: &str) -> Result<String> {
    extract_username(url.trim()).ok_or_else(|| CliError::InvalidUrl(url.trim().to_string()))
}

/// Open an authenticated Reddit session.
pub fn connect_reddit(env: &Environment) -> Result<RedditClient> {
    let credentials = env.reddit_credentials()?;
    let mut client = RedditClient::new(credentials)?;
    client.connect()?;
    debug!("Reddit session established");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_username() {
        assert_eq!(resolve_username(" https://www.reddit.com/u/spez/ ").unwrap(), "spez");
        assert!(matches!(
            resolve_username("https://www.reddit.com/r/test/"),
            Err(CliError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_connect_without_credentials_names_variable() {
        let env = Environment::from_lookup(|_| None);
        match connect_reddit(&env) {
            Err(CliError::Config(msg)) => assert!(msg.contains("REDDIT_CLIENT_ID")),
            other => panic!("Expected config error, got {:?}", other.map(|_| ())),
        }
    }
}
