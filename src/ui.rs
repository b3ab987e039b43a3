//! Interface de terminal do Nexia — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`GenerationProgress`] acompanha visualmente
//! a geração de um artefato no terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::artifacts::{Artifact, ArtifactKind};
use crate::contract::PipelineSummary;
use crate::status::{is_active, to_display_status, to_persisted_status};
use crate::validation::ValidationResult;

/// Indicador visual de progresso para a geração de um artefato.
pub struct GenerationProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
}

impl GenerationProgress {
    /// Inicia o spinner com o tipo de artefato e a descrição resumida.
    pub fn start(kind: ArtifactKind, description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("Gerando {kind}: {description}"));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
        }
    }

    /// Finaliza o spinner com sucesso e imprime o artefato em JSON.
    pub fn finish_with_artifact(&self, artifact: &Artifact) {
        self.pb.finish_and_clear();
        println!(
            "  {} Artefato gerado ({})",
            self.green.apply_to("✓"),
            artifact.model
        );
        println!(
            "{}",
            serde_json::to_string_pretty(artifact).unwrap_or_default()
        );
    }

    /// Finaliza o spinner com falha e imprime o motivo em vermelho.
    pub fn finish_with_error(&self, message: &str) {
        self.pb.finish_and_clear();
        eprintln!("  {} Falha na geração: {message}", self.red.apply_to("✗"));
    }
}

/// Imprime o resultado de uma validação com cor.
pub fn print_validation(result: &ValidationResult) {
    if result.valid {
        println!("{} entrada válida", Style::new().green().bold().apply_to("✓"));
    } else {
        let message = result.error.as_deref().unwrap_or("entrada inválida");
        println!("{} {message}", Style::new().red().bold().apply_to("✗"));
    }
}

/// Mostra a normalização de um valor de status bruto.
pub fn print_status_mapping(value: &str) {
    let persisted = to_persisted_status(value);
    println!("persisted: {persisted}");
    println!("storage label: {}", persisted.storage_label());
    println!("display: {}", to_display_status(value));
    println!("active: {}", is_active(value));
}

/// Imprime o resumo de pipeline formatado.
pub fn print_pipeline(summary: &PipelineSummary) {
    let bold = Style::new().bold();
    println!("{}", bold.apply_to("─── Pipeline ───"));
    println!("contratos: {}", summary.total);
    println!("assinados: {}", summary.signed);
    println!("pendentes: {}", summary.pending);
    println!("cancelados: {}", summary.canceled);
    println!(
        "valor assinado: R$ {:.2}",
        summary.signed_value_cents as f64 / 100.0
    );
}
