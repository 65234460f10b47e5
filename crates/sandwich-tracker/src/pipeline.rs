use ethereum_types::Address;
use sandwich_core::traits::ChainProvider;
use sandwich_detector::{DetectionReport, SandwichDetector};
use tracing::{info, warn};

/// Relatório vazio usado quando nenhum bloco pôde ser obtido.
pub fn empty_report(block: Option<u64>) -> DetectionReport {
    DetectionReport { block_number: block, ..Default::default() }
}

/// Obtém o bloco (o informado ou o mais recente), ingere suas transações e detecta sandwiches.
///
/// Falha ao obter o bloco não é erro: sem transações, o resultado é vazio.
pub async fn detect_block<P>(provider: &P, block: Option<u64>, contracts: Vec<Address>) -> DetectionReport
where
    P: ChainProvider + ?Sized,
{
    let fetched = match block {
        Some(number) => provider.fetch_block(number).await,
        None => provider.fetch_latest_block().await,
    };
    let fetched = match fetched {
        Ok(fetched) => fetched,
        Err(e) => {
            warn!(%e, "falha ao obter bloco");
            return empty_report(block);
        }
    };

    info!(block = ?fetched.number, txs = fetched.len(), contracts = contracts.len(), "analisando bloco");

    let mut detector = SandwichDetector::new(contracts);
    detector.ingest(provider, &fetched).await;
    detector.report()
}
