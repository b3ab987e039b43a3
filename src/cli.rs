//! Interface de linha de comando do Nexia baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (generate, validate,
//! status, pipeline) e flags globais (--model, --demo, --verbose).

use clap::{Parser, Subcommand, ValueEnum};

use crate::artifacts::ArtifactKind;

/// Nexia — serviços centrais da Nexia Suite para agências digitais.
#[derive(Debug, Parser)]
#[command(name = "nexia", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Modelo do gateway a usar nesta sessão.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Ativa o modo demonstração (validação de entrada relaxada).
    #[arg(long, global = true, default_value_t = false)]
    pub demo: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Tipo de artefato aceito pela CLI, mapeado para [`ArtifactKind`] internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ArtifactArg {
    /// Proposta comercial.
    Proposal,
    /// Minuta de contrato de serviço.
    Contract,
    /// Posicionamento de mercado.
    Positioning,
    /// Diagnóstico de negócio.
    Diagnostic,
}

impl From<ArtifactArg> for ArtifactKind {
    fn from(arg: ArtifactArg) -> Self {
        match arg {
            ArtifactArg::Proposal => ArtifactKind::Proposal,
            ArtifactArg::Contract => ArtifactKind::Contract,
            ArtifactArg::Positioning => ArtifactKind::Positioning,
            ArtifactArg::Diagnostic => ArtifactKind::Diagnostic,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Gera um artefato de negócio a partir de uma descrição.
    Generate {
        /// Tipo de artefato a gerar.
        #[arg(value_enum)]
        kind: ArtifactArg,

        /// Descrição do negócio.
        description: String,
    },

    /// Valida uma descrição de negócio sem chamar o gateway.
    Validate {
        /// Texto a validar.
        text: String,

        /// Nome do campo usado nas mensagens de erro.
        #[arg(long, default_value = "Descrição")]
        field: String,
    },

    /// Mostra como um valor de status bruto é normalizado e exibido.
    Status {
        /// Valor de status como lido do armazenamento.
        value: String,
    },

    /// Resume o pipeline a partir de um arquivo JSON de contratos.
    Pipeline {
        /// Caminho para um arquivo JSON contendo uma lista de contratos.
        file: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_generate_subcommand() {
        let cli = Cli::parse_from(["nexia", "generate", "proposal", "salão de beleza"]);
        match cli.command {
            Command::Generate { kind, description } => {
                assert!(matches!(kind, ArtifactArg::Proposal));
                assert_eq!(description, "salão de beleza");
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "nexia",
            "--model",
            "nexia-pro",
            "--demo",
            "--verbose",
            "status",
            "Active",
        ]);
        assert!(cli.demo);
        assert!(cli.verbose);
        assert_eq!(cli.model.as_deref(), Some("nexia-pro"));
    }

    #[test]
    fn cli_parses_validate_with_field() {
        let cli = Cli::parse_from(["nexia", "validate", "Jo", "--field", "Nome"]);
        match cli.command {
            Command::Validate { text, field } => {
                assert_eq!(text, "Jo");
                assert_eq!(field, "Nome");
            }
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn cli_validate_field_defaults() {
        let cli = Cli::parse_from(["nexia", "validate", "texto qualquer"]);
        match cli.command {
            Command::Validate { field, .. } => assert_eq!(field, "Descrição"),
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn artifact_arg_maps_to_kind() {
        assert_eq!(ArtifactKind::from(ArtifactArg::Contract), ArtifactKind::Contract);
        assert_eq!(
            ArtifactKind::from(ArtifactArg::Positioning),
            ArtifactKind::Positioning
        );
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
