use crate::config::FormConfig;
use crate::core::masking::FieldKind;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cadastro-form")]
#[command(about = "Input masks, CEP lookup and submit checks for the registration form")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format a raw value with the mask of the given field
    Mask {
        /// cpf, cep or phone
        field: FieldKind,
        input: String,
    },
    /// Resolve a CEP into street, city and region
    Lookup { cep: String },
    /// Run the contribution check done on submit
    Check {
        #[arg(long)]
        volunteer: bool,
        #[arg(long)]
        donor: bool,
    },
}

impl CliConfig {
    /// 有指定檔案就載入，否則使用預設值
    pub fn load_form_config(&self) -> Result<FormConfig> {
        match &self.config {
            Some(path) => FormConfig::from_file(path),
            None => Ok(FormConfig::default()),
        }
    }
}
