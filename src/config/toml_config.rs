use crate::adapters::http::DEFAULT_BASE_URL;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub lookup: LookupConfig,
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub base_url: String,
    /// 查詢期間顯示在街道欄位的文字
    pub loading_text: String,
    /// 不設定時沿用傳輸層預設（不逾時）
    pub timeout_seconds: Option<u64>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            loading_text: "Buscando...".to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub not_found: String,
    pub transport_failure: String,
    pub missing_contribution: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            not_found: "CEP não encontrado ou inválido.".to_string(),
            transport_failure: "Falha na comunicação com o serviço de CEP.".to_string(),
            missing_contribution:
                "Por favor, selecione pelo menos uma forma de contribuição (Voluntário ou Doador)."
                    .to_string(),
        }
    }
}

impl FormConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VIACEP_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        validate_url("lookup.base_url", &self.lookup.base_url)?;
        validate_non_empty_string("lookup.loading_text", &self.lookup.loading_text)?;

        if let Some(timeout) = self.lookup.timeout_seconds {
            validate_range("lookup.timeout_seconds", timeout, 1, 300)?;
        }

        validate_non_empty_string("messages.not_found", &self.messages.not_found)?;
        validate_non_empty_string(
            "messages.transport_failure",
            &self.messages.transport_failure,
        )?;
        validate_non_empty_string(
            "messages.missing_contribution",
            &self.messages.missing_contribution,
        )?;

        Ok(())
    }
}
