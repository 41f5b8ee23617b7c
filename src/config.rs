//! Configuração do cliente
//!
//! Ordem de precedência (última vence):
//! 1. valores padrão
//! 2. arquivo opcional `config/clickup.{toml,yaml,json}`
//! 3. variáveis `CLICKUP_*` (ex: `CLICKUP_TOKEN`, `CLICKUP_TIMEOUT_SECS`)
//! 4. `CLICKUP_API_TOKEN` (mesmo nome usado pelo middleware), ou o token
//!    explícito passado a [`ClientSettings::load_with_token`]
//!
//! O arquivo `.env` é carregado antes, se existir.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ClickUpError, Result};

pub const DEFAULT_BASE_URL_V2: &str = "https://api.clickup.com/api/v2";
pub const DEFAULT_BASE_URL_V3: &str = "https://api.clickup.com/api/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Personal token (`pk_...`) ou access token OAuth2
    pub token: String,
    pub base_url_v2: String,
    pub base_url_v3: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ClientSettings {
    /// Configuração padrão com o token informado
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url_v2: DEFAULT_BASE_URL_V2.to_string(),
            base_url_v3: DEFAULT_BASE_URL_V3.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Aponta as duas versões da API para outro host (útil para mocks)
    pub fn with_base_urls(mut self, v2: impl Into<String>, v3: impl Into<String>) -> Self {
        self.base_url_v2 = v2.into();
        self.base_url_v3 = v3.into();
        self
    }

    pub fn with_timeouts(mut self, total_secs: u64, connect_secs: u64) -> Self {
        self.timeout_secs = total_secs;
        self.connect_timeout_secs = connect_secs;
        self
    }

    /// Carrega de `.env`, arquivo de configuração e variáveis de ambiente
    pub fn load() -> Result<Self> {
        Self::load_with_token(None)
    }

    /// Igual a [`load`](Self::load), mas um token explícito (ex: `--token`)
    /// substitui apenas o token; URLs e timeouts continuam vindo das fontes
    pub fn load_with_token(token: Option<String>) -> Result<Self> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("Arquivo .env carregado");
        }

        let builder = Self::defaults()?
            .add_source(File::with_name("config/clickup").required(false))
            .add_source(Environment::with_prefix("CLICKUP").try_parsing(true));

        let token = token.or_else(|| std::env::var("CLICKUP_API_TOKEN").ok());
        let settings = Self::from_builder(Self::override_token(builder, token)?)?;
        tracing::info!(
            "Configuração do ClickUp carregada (v2: {}, v3: {})",
            settings.base_url_v2,
            settings.base_url_v3
        );
        Ok(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("token", "")?
            .set_default("base_url_v2", DEFAULT_BASE_URL_V2)?
            .set_default("base_url_v3", DEFAULT_BASE_URL_V3)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)?)
    }

    fn override_token(
        builder: ConfigBuilder<DefaultState>,
        token: Option<String>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        match token {
            Some(token) => Ok(builder.set_override("token", token)?),
            None => Ok(builder),
        }
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ClickUpError::config(
                "token not configured (set CLICKUP_API_TOKEN or CLICKUP_TOKEN)",
            ));
        }
        if self.base_url_v2.is_empty() || self.base_url_v3.is_empty() {
            return Err(ClickUpError::config("base URLs must not be empty"));
        }
        Ok(())
    }
}
