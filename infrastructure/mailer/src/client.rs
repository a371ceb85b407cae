use reqwest::Client;

/// Shared HTTP client configuration for the transactional e-mail API.
pub struct MailerClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub from_address: String,
}

impl MailerClient {
    pub fn new(base_url: String, api_key: String, from_address: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            from_address,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the send endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}
