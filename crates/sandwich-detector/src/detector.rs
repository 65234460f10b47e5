use crate::accumulator::BlockAccumulator;
use crate::correlation::{self, CandidateSandwich};
use crate::report::{DetectionReport, IngestSummary};
use ethereum_types::Address;
use sandwich_core::{
    traits::ChainProvider,
    types::{BlockTransactions, RawTransaction, TransactionHash},
};
use tracing::{debug, info, warn};

/// Detector de padrões sandwich restrito a um único bloco.
///
/// O estado acumulado pertence a um bloco; chame [`reset`](Self::reset)
/// (ou crie um novo detector) antes de ingerir o próximo.
#[derive(Debug, Clone, Default)]
pub struct SandwichDetector {
    known_contracts: Vec<Address>,
    accumulator: BlockAccumulator,
    block_number: Option<u64>,
}

impl SandwichDetector {
    pub fn new(known_contracts: Vec<Address>) -> Self {
        Self {
            known_contracts,
            accumulator: BlockAccumulator::new(),
            block_number: None,
        }
    }

    pub fn known_contracts(&self) -> &[Address] {
        &self.known_contracts
    }

    /// Adiciona um contrato ao conjunto observado; retorna `false` se já existia.
    pub fn add_contract(&mut self, contract: Address) -> bool {
        if self.known_contracts.contains(&contract) {
            return false;
        }
        self.known_contracts.push(contract);
        true
    }

    /// Remove um contrato do conjunto observado; retorna `false` se não existia.
    pub fn remove_contract(&mut self, contract: &Address) -> bool {
        let before = self.known_contracts.len();
        self.known_contracts.retain(|c| c != contract);
        self.known_contracts.len() != before
    }

    pub fn accumulator(&self) -> &BlockAccumulator {
        &self.accumulator
    }

    pub fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    /// Processa uma transação já resolvida. Retorna `true` se ela foi acumulada.
    pub fn observe(&mut self, tx: &RawTransaction) -> bool {
        match tx.destination_in(&self.known_contracts) {
            Some(destination) => {
                debug!(tx = ?tx.hash, ?destination, origin = ?tx.from, "transação qualificada");
                self.accumulator.record_tx(tx, destination);
                true
            }
            None => false,
        }
    }

    /// Processa uma sequência de transações já resolvidas, retornando quantas foram acumuladas.
    pub fn ingest_transactions<I>(&mut self, txs: I) -> usize
    where
        I: IntoIterator<Item = RawTransaction>,
    {
        txs.into_iter().filter(|tx| self.observe(tx)).count()
    }

    /// Resolve e processa cada transação do bloco, na ordem do bloco.
    ///
    /// Falhas ao resolver uma transação são registradas e a transação é ignorada.
    pub async fn ingest<P>(&mut self, provider: &P, block: &BlockTransactions) -> IngestSummary
    where
        P: ChainProvider + ?Sized,
    {
        let mut summary = IngestSummary {
            block_number: block.number,
            total: block.len(),
            ..Default::default()
        };
        self.block_number = block.number;

        for tx_hash in &block.transactions {
            match provider.fetch_transaction(*tx_hash).await {
                Ok(tx) => {
                    summary.fetched += 1;
                    if self.observe(&tx) {
                        summary.qualifying += 1;
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(tx = ?tx_hash, error = %e, "erro ao processar transação, ignorada");
                }
            }
        }

        info!(
            block = ?summary.block_number,
            total = summary.total,
            qualifying = summary.qualifying,
            failed = summary.failed,
            "ingestão do bloco concluída"
        );
        summary
    }

    /// Candidatos a sandwich (pares com sequência exatamente 2), recalculados a cada chamada.
    pub fn find_bots(&self) -> CandidateSandwich {
        correlation::find_bots(&self.accumulator)
    }

    /// Resolve os candidatos informados nos hashes classificados como sandwich.
    pub fn find_sandwich(&self, candidates: &CandidateSandwich) -> Vec<TransactionHash> {
        correlation::find_sandwich(candidates)
    }

    /// Executa a seleção de candidatos seguida da resolução.
    pub fn detect(&self) -> Vec<TransactionHash> {
        self.find_sandwich(&self.find_bots())
    }

    /// Igual a [`detect`](Self::detect), com metadados para exibição.
    pub fn report(&self) -> DetectionReport {
        let candidates = self.find_bots();
        DetectionReport {
            block_number: self.block_number,
            candidates: candidates.len(),
            sandwiches: self.find_sandwich(&candidates),
        }
    }

    /// Descarta todo o estado do bloco, mantendo os contratos conhecidos.
    pub fn reset(&mut self) {
        self.accumulator.clear();
        self.block_number = None;
    }
}
