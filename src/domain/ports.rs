use crate::domain::model::{LookupResponse, PostalCode};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 頁面上的文字欄位或下拉選單
pub trait TextField: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn set_disabled(&self, disabled: bool);
}

pub trait Checkbox: Send + Sync {
    fn is_checked(&self) -> bool;
}

/// 提示區塊，錯誤時加上紅色邊框
pub trait HintElement: Send + Sync {
    fn set_border(&self, style: &str);
}

/// 使用者可見的通知（瀏覽器中的 alert）
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[async_trait]
pub trait PostalLookup: Send + Sync {
    async fn lookup(&self, postal_code: &PostalCode) -> Result<LookupResponse>;
}
