use crate::config::FormConfig;
use crate::core::guard::SubmissionGuard;
use crate::core::masking::{FieldKind, MaskedField};
use crate::core::resolver::AddressResolver;
use crate::domain::model::{ResolveOutcome, SubmitDecision};
use crate::domain::ports::{Checkbox, HintElement, Notifier, PostalLookup, TextField};
use std::collections::HashMap;
use std::sync::Arc;

/// 頁面提供的元素；缺少的元素以 None 表示，相關功能就不啟用
#[derive(Default, Clone)]
pub struct FormHandles {
    pub cpf: Option<Arc<dyn TextField>>,
    pub phone: Option<Arc<dyn TextField>>,
    pub postal_code: Option<Arc<dyn TextField>>,
    pub street: Option<Arc<dyn TextField>>,
    pub city: Option<Arc<dyn TextField>>,
    pub region: Option<Arc<dyn TextField>>,
    pub volunteer: Option<Arc<dyn Checkbox>>,
    pub donor: Option<Arc<dyn Checkbox>>,
    pub hint: Option<Arc<dyn HintElement>>,
}

pub struct RegistrationForm<L: PostalLookup> {
    masks: HashMap<FieldKind, MaskedField>,
    resolver: Option<AddressResolver<L>>,
    guard: Option<SubmissionGuard>,
}

impl<L: PostalLookup> RegistrationForm<L> {
    /// 綁定遮罩、CEP 查詢與送出檢查
    pub fn init(
        handles: FormHandles,
        lookup: L,
        notifier: Arc<dyn Notifier>,
        config: &FormConfig,
    ) -> Self {
        let mut masks = HashMap::new();
        for (kind, field) in [
            (FieldKind::Cpf, &handles.cpf),
            (FieldKind::Cep, &handles.postal_code),
            (FieldKind::Phone, &handles.phone),
        ] {
            if let Some(field) = field {
                masks.insert(kind, MaskedField::new(field.clone(), kind.formatter()));
            }
        }

        let resolver = match (
            &handles.postal_code,
            &handles.street,
            &handles.city,
            &handles.region,
        ) {
            (Some(postal_code), Some(street), Some(city), Some(region)) => {
                Some(AddressResolver::new(
                    lookup,
                    postal_code.clone(),
                    street.clone(),
                    city.clone(),
                    region.clone(),
                    notifier.clone(),
                    config,
                ))
            }
            _ => {
                tracing::debug!("Address fields missing, CEP lookup disabled");
                None
            }
        };

        let guard = match (&handles.volunteer, &handles.donor, &handles.hint) {
            (Some(volunteer), Some(donor), Some(hint)) => Some(SubmissionGuard::new(
                volunteer.clone(),
                donor.clone(),
                hint.clone(),
                notifier,
                config,
            )),
            _ => None,
        };

        tracing::debug!(
            "Form initialized: {} masks, lookup {}, submit guard {}",
            masks.len(),
            if resolver.is_some() { "on" } else { "off" },
            if guard.is_some() { "on" } else { "off" }
        );

        Self {
            masks,
            resolver,
            guard,
        }
    }

    pub fn on_input(&self, kind: FieldKind) {
        if let Some(mask) = self.masks.get(&kind) {
            mask.on_input();
        }
    }

    pub async fn on_postal_code_blur(&self) -> ResolveOutcome {
        match &self.resolver {
            Some(resolver) => resolver.resolve().await,
            None => ResolveOutcome::Skipped,
        }
    }

    pub fn on_submit(&self) -> SubmitDecision {
        self.guard
            .as_ref()
            .map_or(SubmitDecision::Proceed, SubmissionGuard::on_submit)
    }
}
