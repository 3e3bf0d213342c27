use cadastro_form::config::Command;
use cadastro_form::core::{ResolveOutcome, SubmitDecision, TextField};
use cadastro_form::utils::logger::{self, LogFormat};
use cadastro_form::utils::validation::Validate;
use cadastro_form::{
    CliConfig, FormHandles, Formatter, LogNotifier, MemoryCheckbox, MemoryField, MemoryHint,
    RegistrationForm, ViaCepClient,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, log_format);

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_form_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match cli.command {
        Command::Mask { field, input } => {
            println!("{}", field.formatter().format(&input));
        }
        Command::Lookup { cep } => {
            let postal_code = MemoryField::new(&cep);
            let street = MemoryField::default();
            let city = MemoryField::default();
            let region = MemoryField::default();

            let handles = FormHandles {
                postal_code: Some(Arc::new(postal_code)),
                street: Some(Arc::new(street.clone())),
                city: Some(Arc::new(city.clone())),
                region: Some(Arc::new(region.clone())),
                ..Default::default()
            };
            let lookup = ViaCepClient::from_config(&config.lookup);
            let form = RegistrationForm::init(handles, lookup, Arc::new(LogNotifier), &config);

            match form.on_postal_code_blur().await {
                ResolveOutcome::Populated(_) => {
                    println!("Endereço: {}", street.value());
                    println!("Cidade:   {}", city.value());
                    println!("Estado:   {}", region.value());
                }
                ResolveOutcome::Skipped => {
                    eprintln!("❌ '{}' is not an 8-digit CEP", cep);
                    std::process::exit(2);
                }
                ResolveOutcome::NotFound | ResolveOutcome::Failed | ResolveOutcome::Superseded => {
                    std::process::exit(1);
                }
            }
        }
        Command::Check { volunteer, donor } => {
            let hint = MemoryHint::new();
            let handles = FormHandles {
                volunteer: Some(Arc::new(MemoryCheckbox::new(volunteer))),
                donor: Some(Arc::new(MemoryCheckbox::new(donor))),
                hint: Some(Arc::new(hint)),
                ..Default::default()
            };
            let form = RegistrationForm::init(
                handles,
                ViaCepClient::from_config(&config.lookup),
                Arc::new(LogNotifier),
                &config,
            );

            match form.on_submit() {
                SubmitDecision::Proceed => println!("✅ Submission allowed"),
                SubmitDecision::Cancel => std::process::exit(1),
            }
        }
    }

    Ok(())
}
