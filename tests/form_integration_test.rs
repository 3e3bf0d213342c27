use cadastro_form::core::{ResolveOutcome, SubmitDecision, TextField};
use cadastro_form::{
    FieldKind, FormConfig, FormHandles, MemoryCheckbox, MemoryField, MemoryHint,
    RecordingNotifier, RegistrationForm, ViaCepClient,
};
use anyhow::Result;
use httpmock::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

struct Page {
    cpf: MemoryField,
    phone: MemoryField,
    cep: MemoryField,
    street: MemoryField,
    city: MemoryField,
    region: MemoryField,
    volunteer: MemoryCheckbox,
    donor: MemoryCheckbox,
    hint: MemoryHint,
    notifier: RecordingNotifier,
}

impl Page {
    fn new() -> Self {
        Self {
            cpf: MemoryField::default(),
            phone: MemoryField::default(),
            cep: MemoryField::default(),
            street: MemoryField::default(),
            city: MemoryField::default(),
            region: MemoryField::default(),
            volunteer: MemoryCheckbox::new(false),
            donor: MemoryCheckbox::new(false),
            hint: MemoryHint::new(),
            notifier: RecordingNotifier::new(),
        }
    }

    fn form(&self, base_url: String) -> RegistrationForm<ViaCepClient> {
        let mut config = FormConfig::default();
        config.lookup.base_url = base_url;
        self.form_with_config(&config)
    }

    fn form_with_config(&self, config: &FormConfig) -> RegistrationForm<ViaCepClient> {
        let handles = FormHandles {
            cpf: Some(Arc::new(self.cpf.clone())),
            phone: Some(Arc::new(self.phone.clone())),
            postal_code: Some(Arc::new(self.cep.clone())),
            street: Some(Arc::new(self.street.clone())),
            city: Some(Arc::new(self.city.clone())),
            region: Some(Arc::new(self.region.clone())),
            volunteer: Some(Arc::new(self.volunteer.clone())),
            donor: Some(Arc::new(self.donor.clone())),
            hint: Some(Arc::new(self.hint.clone())),
        };
        RegistrationForm::init(
            handles,
            ViaCepClient::from_config(&config.lookup),
            Arc::new(self.notifier.clone()),
            config,
        )
    }

    /// 模擬逐字輸入，每個字元觸發一次 input 事件
    fn type_into(&self, form: &RegistrationForm<ViaCepClient>, kind: FieldKind, keys: &str) {
        let field = match kind {
            FieldKind::Cpf => &self.cpf,
            FieldKind::Cep => &self.cep,
            FieldKind::Phone => &self.phone,
        };
        for key in keys.chars() {
            let mut value = field.value();
            value.push(key);
            field.set_value(&value);
            form.on_input(kind);
        }
    }
}

#[tokio::test]
async fn test_typing_applies_masks() {
    let page = Page::new();
    let form = page.form("http://127.0.0.1:1".to_string());

    page.type_into(&form, FieldKind::Cpf, "12345678909");
    page.type_into(&form, FieldKind::Phone, "11987654321");
    page.type_into(&form, FieldKind::Cep, "01310100");

    assert_eq!(page.cpf.value(), "123.456.789-09");
    assert_eq!(page.phone.value(), "(11) 98765-4321");
    assert_eq!(page.cep.value(), "01310-100");
}

#[tokio::test]
async fn test_landline_phone_while_typing() {
    let page = Page::new();
    let form = page.form("http://127.0.0.1:1".to_string());

    page.type_into(&form, FieldKind::Phone, "119");
    assert_eq!(page.phone.value(), "(11) 9");

    page.phone.set_value("");
    page.type_into(&form, FieldKind::Phone, "1133334444");
    assert_eq!(page.phone.value(), "(11) 3333-4444");
}

#[tokio::test]
async fn test_blur_populates_address() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/01310100/json/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cep": "01310-100",
                "logradouro": "Av. Paulista",
                "complemento": "",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            }));
    });

    let page = Page::new();
    let form = page.form(server.base_url());
    page.type_into(&form, FieldKind::Cep, "01310100");

    let outcome = form.on_postal_code_blur().await;

    api_mock.assert();
    assert!(matches!(outcome, ResolveOutcome::Populated(_)));
    assert_eq!(page.street.value(), "Av. Paulista, Bela Vista");
    assert_eq!(page.city.value(), "São Paulo");
    assert_eq!(page.region.value(), "SP");
    assert!(!page.street.is_disabled());
    assert!(page.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_blur_with_partial_cep_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({}));
    });

    let page = Page::new();
    let form = page.form(server.base_url());
    page.type_into(&form, FieldKind::Cep, "1234");
    page.street.set_value("Rua Existente");

    let outcome = form.on_postal_code_blur().await;

    assert_eq!(outcome, ResolveOutcome::Skipped);
    api_mock.assert_hits(0);
    assert_eq!(page.street.value(), "Rua Existente");
}

#[tokio::test]
async fn test_blur_with_unknown_cep_clears_fields() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(serde_json::json!({"erro": true}));
    });

    let page = Page::new();
    let form = page.form(server.base_url());
    page.street.set_value("Rua Velha");
    page.city.set_value("Niterói");
    page.region.set_value("RJ");
    page.type_into(&form, FieldKind::Cep, "99999999");

    let outcome = form.on_postal_code_blur().await;

    api_mock.assert();
    assert_eq!(outcome, ResolveOutcome::NotFound);
    assert_eq!(page.street.value(), "");
    assert_eq!(page.city.value(), "");
    assert_eq!(page.region.value(), "");
    assert_eq!(
        page.notifier.messages(),
        vec!["CEP não encontrado ou inválido."]
    );
}

#[tokio::test]
async fn test_blur_with_service_down_keeps_fields() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/01310100/json/");
        then.status(500);
    });

    let page = Page::new();
    let form = page.form(server.base_url());
    page.street.set_value("Rua Velha");
    page.city.set_value("Niterói");
    page.type_into(&form, FieldKind::Cep, "01310100");

    let outcome = form.on_postal_code_blur().await;

    api_mock.assert();
    assert_eq!(outcome, ResolveOutcome::Failed);
    assert_eq!(page.street.value(), "Rua Velha");
    assert_eq!(page.city.value(), "Niterói");
    assert!(!page.city.is_disabled());
    assert_eq!(
        page.notifier.messages(),
        vec!["Falha na comunicação com o serviço de CEP."]
    );
}

#[tokio::test]
async fn test_submit_requires_a_contribution() {
    let page = Page::new();
    let form = page.form("http://127.0.0.1:1".to_string());

    assert_eq!(form.on_submit(), SubmitDecision::Cancel);
    assert_eq!(page.hint.border().as_deref(), Some("2px solid #dc3545"));
    assert_eq!(page.notifier.messages().len(), 1);

    page.donor.set_checked(true);
    assert_eq!(form.on_submit(), SubmitDecision::Proceed);
    assert_eq!(page.hint.border().as_deref(), Some("none"));

    page.donor.set_checked(false);
    page.volunteer.set_checked(true);
    assert_eq!(form.on_submit(), SubmitDecision::Proceed);
}

/// 從 TOML 檔載入的設定會套用到查詢位址與通知文字
#[tokio::test]
async fn test_form_uses_config_file() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(serde_json::json!({"erro": "true"}));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("form.toml");
    let config_content = format!(
        r#"
[lookup]
base_url = "{}"
timeout_seconds = 5

[messages]
not_found = "Postal code not found."
"#,
        server.base_url()
    );
    tokio::fs::write(&config_path, config_content).await?;

    let config = FormConfig::from_file(&config_path)?;
    cadastro_form::utils::validation::Validate::validate(&config)?;

    let page = Page::new();
    let form = page.form_with_config(&config);
    page.type_into(&form, FieldKind::Cep, "99999-999");

    let outcome = form.on_postal_code_blur().await;

    api_mock.assert();
    assert_eq!(outcome, ResolveOutcome::NotFound);
    assert_eq!(page.notifier.messages(), vec!["Postal code not found."]);
    Ok(())
}
