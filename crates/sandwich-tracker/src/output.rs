use sandwich_core::utils::format_h256;
use sandwich_detector::DetectionReport;

/// Texto exibido ao usuário para um relatório de detecção.
pub fn render_text(report: &DetectionReport) -> String {
    if report.is_empty() {
        return match report.block_number {
            Some(n) => format!("No sandwiches found in block {}.", n),
            None => "No sandwiches found in the latest block.".to_string(),
        };
    }

    report
        .sandwiches
        .iter()
        .map(|hash| format!("Delicious Sandwich Found: {}", format_h256(hash)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(report: &DetectionReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
