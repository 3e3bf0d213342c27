use crate::config::FormConfig;
use crate::domain::model::{AddressRecord, LookupResponse, PostalCode, ResolveOutcome};
use crate::domain::ports::{Notifier, PostalLookup, TextField};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// 由 CEP 查詢地址並填入街道、城市、州欄位
///
/// 狀態：Idle → Loading → {Populated | NotFound | Failed} → Idle。
/// 每次查詢取得一個序號；回應抵達時若已有更新的查詢開始，
/// 該回應直接丟棄，欄位的啟用狀態交給較新的查詢處理。
/// 查詢失敗時，街道欄位還原成第一個未結束查詢開始前的值。
pub struct AddressResolver<L: PostalLookup> {
    lookup: L,
    postal_code: Arc<dyn TextField>,
    street: Arc<dyn TextField>,
    city: Arc<dyn TextField>,
    region: Arc<dyn TextField>,
    notifier: Arc<dyn Notifier>,
    loading_text: String,
    not_found_message: String,
    failure_message: String,
    generation: AtomicU64,
    // 沒有查詢進行中時才記錄，最新的查詢結束時清除
    saved_street: Mutex<Option<String>>,
}

impl<L: PostalLookup> AddressResolver<L> {
    pub fn new(
        lookup: L,
        postal_code: Arc<dyn TextField>,
        street: Arc<dyn TextField>,
        city: Arc<dyn TextField>,
        region: Arc<dyn TextField>,
        notifier: Arc<dyn Notifier>,
        config: &FormConfig,
    ) -> Self {
        Self {
            lookup,
            postal_code,
            street,
            city,
            region,
            notifier,
            loading_text: config.lookup.loading_text.clone(),
            not_found_message: config.messages.not_found.clone(),
            failure_message: config.messages.transport_failure.clone(),
            generation: AtomicU64::new(0),
            saved_street: Mutex::new(None),
        }
    }

    /// CEP 欄位 blur 時呼叫
    pub async fn resolve(&self) -> ResolveOutcome {
        let Some(postal_code) = PostalCode::parse(&self.postal_code.value()) else {
            return ResolveOutcome::Skipped;
        };

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("🔍 Looking up CEP {} (request #{})", postal_code, ticket);

        {
            let mut saved = self.saved_street();
            if saved.is_none() {
                *saved = Some(self.street.value());
            }
        }
        self.street.set_value(&self.loading_text);
        self.set_dependents_disabled(true);

        let result = self.lookup.lookup(&postal_code).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(
                "Discarding response for CEP {} (request #{} superseded)",
                postal_code,
                ticket
            );
            return ResolveOutcome::Superseded;
        }

        let previous_street = self.saved_street().take();

        let outcome = match result {
            Ok(LookupResponse::Found(address)) => {
                self.populate(&address);
                tracing::info!(
                    "✅ CEP {} resolved to {}/{}",
                    postal_code,
                    address.city,
                    address.region
                );
                ResolveOutcome::Populated(address)
            }
            Ok(LookupResponse::NotFound) => {
                tracing::warn!("CEP {} not found", postal_code);
                self.notifier.notify(&self.not_found_message);
                self.clear();
                ResolveOutcome::NotFound
            }
            Err(e) => {
                tracing::error!("❌ Lookup for CEP {} failed: {}", postal_code, e);
                self.notifier.notify(&self.failure_message);
                if let Some(previous) = previous_street {
                    self.street.set_value(&previous);
                }
                ResolveOutcome::Failed
            }
        };

        self.set_dependents_disabled(false);
        outcome
    }

    fn saved_street(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.saved_street
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn populate(&self, address: &AddressRecord) {
        self.street.set_value(&address.street_line());
        self.city.set_value(&address.city);
        self.region.set_value(&address.region);
    }

    fn clear(&self) {
        self.street.set_value("");
        self.city.set_value("");
        self.region.set_value("");
    }

    fn set_dependents_disabled(&self, disabled: bool) {
        self.street.set_disabled(disabled);
        self.city.set_disabled(disabled);
        self.region.set_disabled(disabled);
    }
}
