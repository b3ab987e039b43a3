//! Configuração do Nexia carregada a partir de `nexia.toml`.
//!
//! A struct [`NexiaConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `NEXIA_API_KEY` tem precedência sobre o arquivo.

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuração de nível superior carregada de `nexia.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NexiaConfig {
    /// Chave da API do gateway de IA.
    #[serde(default)]
    pub api_key: String,

    /// Modelo padrão quando não especificado via CLI.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Tempo de vida das entradas do cache de respostas, em segundos.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Limite de entradas do cache de respostas.
    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,

    /// Modo demonstração: relaxa a validação de entrada.
    #[serde(default)]
    pub demo_mode: bool,
}

// Modelo padrão do gateway.
fn default_model() -> String {
    "nexia-standard".to_string()
}

// TTL padrão do cache: 1 hora.
fn default_cache_ttl_secs() -> u64 {
    3600
}

// Limite padrão de entradas do cache.
fn default_cache_max_entries() -> usize {
    128
}

impl Default for NexiaConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_model: default_model(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_max_entries: default_cache_max_entries(),
            demo_mode: false,
        }
    }
}

impl NexiaConfig {
    /// Carrega a configuração de `nexia.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("nexia.toml"))
    }

    /// Carrega a configuração do caminho fornecido, aplicando a precedência
    /// da variável de ambiente.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<NexiaConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo para a chave API.
        if let Ok(key) = std::env::var("NEXIA_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }

        Ok(config)
    }
}
