/*!
 * Sandwich Traits
 * 
 * Fronteira entre o detector e o acesso à blockchain
 */

use async_trait::async_trait;
use crate::error::Result;
use crate::types::{BlockTransactions, RawTransaction, TransactionHash};

/// Trait para provedores de dados da cadeia
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Obtém o bloco mais recente com os hashes de suas transações
    async fn fetch_latest_block(&self) -> Result<BlockTransactions>;

    /// Obtém um bloco específico com os hashes de suas transações
    async fn fetch_block(&self, block_number: u64) -> Result<BlockTransactions>;

    /// Resolve os detalhes de uma transação pelo hash
    async fn fetch_transaction(&self, tx_hash: TransactionHash) -> Result<RawTransaction>;
}

#[async_trait]
impl<P: ChainProvider + ?Sized> ChainProvider for std::sync::Arc<P> {
    async fn fetch_latest_block(&self) -> Result<BlockTransactions> {
        (**self).fetch_latest_block().await
    }

    async fn fetch_block(&self, block_number: u64) -> Result<BlockTransactions> {
        (**self).fetch_block(block_number).await
    }

    async fn fetch_transaction(&self, tx_hash: TransactionHash) -> Result<RawTransaction> {
        (**self).fetch_transaction(tx_hash).await
    }
}
