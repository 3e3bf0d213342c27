use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 已填入表單的地址資料（由查詢服務回傳後轉換而來）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub region: String,
}

impl AddressRecord {
    /// 街道欄位顯示值："<street>, <neighborhood>"，沒有 bairro 時只有街道
    pub fn street_line(&self) -> String {
        match (self.street.is_empty(), self.neighborhood.is_empty()) {
            (_, true) => self.street.clone(),
            (true, false) => self.neighborhood.clone(),
            (false, false) => format!("{}, {}", self.street, self.neighborhood),
        }
    }
}

/// ViaCEP 的原始 JSON 回應
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViaCepResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub erro: bool,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
}

// 新版 ViaCEP 回傳 "erro": "true"，舊版是布林值
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => !s.is_empty() && s != "false",
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        serde_json::Value::Null => false,
        _ => true,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Found(AddressRecord),
    NotFound,
}

impl From<ViaCepResponse> for LookupResponse {
    fn from(response: ViaCepResponse) -> Self {
        if response.erro {
            return LookupResponse::NotFound;
        }
        LookupResponse::Found(AddressRecord {
            street: response.logradouro.unwrap_or_default(),
            neighborhood: response.bairro.unwrap_or_default(),
            city: response.localidade.unwrap_or_default(),
            region: response.uf.unwrap_or_default(),
        })
    }
}

/// 8 位數的 CEP，只能經由 [`PostalCode::parse`] 建立
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub const LEN: usize = 8;

    /// 去掉非數字字元；長度不是 8 就回傳 None
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = crate::core::masking::digits(raw);
        (digits.len() == Self::LEN).then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 每次 blur 查詢的最終狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// CEP 不足 8 位，未發出請求
    Skipped,
    Populated(AddressRecord),
    NotFound,
    Failed,
    /// 已有較新的查詢開始，這次的回應被丟棄
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancel,
}
