use sandwich_core::types::TransactionHash;
use serde::Serialize;

/// Resumo de uma passada de ingestão.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub block_number: Option<u64>,
    /// transações listadas no bloco
    pub total: usize,
    /// transações resolvidas com sucesso
    pub fetched: usize,
    /// transações endereçadas a um contrato conhecido
    pub qualifying: usize,
    /// falhas de resolução (ignoradas)
    pub failed: usize,
}

/// Resultado de uma detecção, pronto para exibição ou serialização.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub block_number: Option<u64>,
    pub candidates: usize,
    pub sandwiches: Vec<TransactionHash>,
}

impl DetectionReport {
    pub fn is_empty(&self) -> bool {
        self.sandwiches.is_empty()
    }
}
