use crate::config::LookupConfig;
use crate::domain::model::{LookupResponse, PostalCode, ViaCepResponse};
use crate::domain::ports::PostalLookup;
use crate::utils::error::{FormError, Result};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// ViaCEP 客戶端：GET {base_url}/ws/{cep}/json/
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        let mut client = Self::new(config.base_url.clone());
        client.timeout = config.timeout_seconds.map(Duration::from_secs);
        client
    }

    pub fn endpoint(&self, postal_code: &PostalCode) -> String {
        format!(
            "{}/ws/{}/json/",
            self.base_url.trim_end_matches('/'),
            postal_code
        )
    }
}

#[async_trait::async_trait]
impl PostalLookup for ViaCepClient {
    async fn lookup(&self, postal_code: &PostalCode) -> Result<LookupResponse> {
        let url = self.endpoint(postal_code);
        tracing::debug!("Making lookup request to: {}", url);

        let mut request = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("Lookup response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FormError::LookupStatus {
                status: response.status().as_u16(),
            });
        }

        let parsed: ViaCepResponse = response.json().await?;
        Ok(parsed.into())
    }
}
