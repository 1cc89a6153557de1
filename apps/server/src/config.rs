use std::time::Duration;

/// Server configuration, read once at startup from `FORTUNEOK_*`
/// environment variables (a `.env` file is honored in development).
#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    /// Redis connection URL. Absent means the server runs cache-less;
    /// every quote/rate lookup then goes upstream.
    pub redis_url: Option<String>,
    pub quote_api_url: String,
    pub quote_api_key: Option<String>,
    pub rates_api_url: String,
    pub search_cached_url: String,
    pub search_direct_url: String,
    /// Emails allowed on the admin routes.
    pub admin_emails: Vec<String>,
    /// Pre-provisioned sessions, `token=email` pairs. The real session
    /// provider is external; this seeds the in-memory stand-in.
    pub session_tokens: Vec<(String, String)>,
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        // Best-effort; missing .env files are expected in production.
        dotenvy::dotenv().ok();

        let timeout_secs = env_var("FORTUNEOK_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            listen_addr: env_var("FORTUNEOK_LISTEN_ADDR")
                .unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            redis_url: env_var("FORTUNEOK_REDIS_URL"),
            quote_api_url: env_var("FORTUNEOK_QUOTE_API_URL")
                .unwrap_or_else(|| "http://localhost:9300".to_string()),
            quote_api_key: env_var("FORTUNEOK_QUOTE_API_KEY"),
            rates_api_url: env_var("FORTUNEOK_RATES_API_URL").unwrap_or_else(|| {
                "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies"
                    .to_string()
            }),
            search_cached_url: env_var("FORTUNEOK_SEARCH_CACHED_URL")
                .unwrap_or_else(|| "http://localhost:9300/search/cached".to_string()),
            search_direct_url: env_var("FORTUNEOK_SEARCH_DIRECT_URL")
                .unwrap_or_else(|| "http://localhost:9300/search/direct".to_string()),
            admin_emails: env_var("FORTUNEOK_ADMIN_EMAILS")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
            session_tokens: env_var("FORTUNEOK_SESSION_TOKENS")
                .map(|v| parse_token_pairs(&v))
                .unwrap_or_default(),
            request_timeout: Duration::from_secs(timeout_secs),
            cors_origins: env_var("FORTUNEOK_CORS_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or_else(|| vec!["*".to_string()]),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_token_pairs(value: &str) -> Vec<(String, String)> {
    split_list(value)
        .into_iter()
        .filter_map(|pair| {
            let (token, email) = pair.split_once('=')?;
            let token = token.trim();
            let email = email.trim();
            if token.is_empty() || email.is_empty() {
                return None;
            }
            Some((token.to_string(), email.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(
            split_list("a@x.com, ,b@x.com,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
    }

    #[test]
    fn token_pairs_require_both_halves() {
        let pairs = parse_token_pairs("tok1=a@x.com,malformed,=b@x.com,tok2=c@x.com");
        assert_eq!(
            pairs,
            vec![
                ("tok1".to_string(), "a@x.com".to_string()),
                ("tok2".to_string(), "c@x.com".to_string()),
            ]
        );
    }
}
