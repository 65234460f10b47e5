/*!
 * Sandwich Types
 * 
 * Tipos comuns usados em toda a workspace do rastreador
 */

use ethereum_types::{Address, H256, U256};
use serde::{Deserialize, Serialize};

/// Alias para hash de transação
pub type TransactionHash = H256;

/// Transação resolvida a partir do node, apenas com os campos consumidos pelo detector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: TransactionHash,
    /// Ausente em transações de criação de contrato
    pub to: Option<Address>,
    pub from: Address,
    /// Preço do gás em wei
    pub gas_price: U256,
}

impl RawTransaction {
    /// Retorna o destino apenas se ele pertencer ao conjunto informado
    pub fn destination_in(&self, contracts: &[Address]) -> Option<Address> {
        self.to.filter(|to| contracts.contains(to))
    }
}

/// Bloco com as referências (hashes) de suas transações, na ordem do bloco
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransactions {
    /// Número do bloco; ausente para blocos pendentes
    pub number: Option<u64>,
    pub transactions: Vec<TransactionHash>,
}

impl BlockTransactions {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}
