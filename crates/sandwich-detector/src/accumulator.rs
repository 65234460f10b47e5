use ethereum_types::{Address, U256};
use indexmap::IndexMap;
use sandwich_core::types::{RawTransaction, TransactionHash};
use serde::Serialize;
use tracing::debug;

/// Dados de uma transação qualificada, indexados pelo hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TxRecord {
    pub destination: Address,
    pub origin: Address,
    pub gas_price: U256,
}

/// Estatísticas acumuladas durante a ingestão de um único bloco.
///
/// Todos os mapas preservam a ordem de inserção; é ela que define a ordem
/// de saída da correlação.
#[derive(Debug, Clone, Default)]
pub struct BlockAccumulator {
    /// destino -> última origem vista para o destino
    contract_origin: IndexMap<Address, Address>,
    /// destino -> tamanho da sequência atual de transações com a mesma origem
    transaction_count: IndexMap<Address, u32>,
    tx_lookup: IndexMap<TransactionHash, TxRecord>,
}

impl BlockAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra uma transação cujo destino já foi validado como contrato conhecido.
    pub fn record(&mut self, hash: TransactionHash, destination: Address, origin: Address, gas_price: U256) {
        let same_origin = self.contract_origin.get(&destination) == Some(&origin);
        if same_origin {
            *self.transaction_count.entry(destination).or_insert(0) += 1;
        } else {
            self.transaction_count.insert(destination, 1);
            self.contract_origin.insert(destination, origin);
        }

        let record = TxRecord { destination, origin, gas_price };
        if let Some(previous) = self.tx_lookup.insert(hash, record) {
            // última escrita vence; a posição original do hash é mantida
            debug!(tx = ?hash, ?previous, "hash repetido no bloco, registro sobrescrito");
        }
    }

    /// Atalho para [`record`](Self::record) a partir de uma transação resolvida.
    pub fn record_tx(&mut self, tx: &RawTransaction, destination: Address) {
        self.record(tx.hash, destination, tx.from, tx.gas_price);
    }

    pub fn contract_origin(&self) -> &IndexMap<Address, Address> {
        &self.contract_origin
    }

    pub fn transaction_count(&self) -> &IndexMap<Address, u32> {
        &self.transaction_count
    }

    pub fn tx_lookup(&self) -> &IndexMap<TransactionHash, TxRecord> {
        &self.tx_lookup
    }

    /// Contagem de sequência do destino, zero se nunca visto.
    pub fn count_for(&self, destination: &Address) -> u32 {
        self.transaction_count.get(destination).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tx_lookup.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tx_lookup.len()
    }

    pub fn clear(&mut self) {
        self.contract_origin.clear();
        self.transaction_count.clear();
        self.tx_lookup.clear();
    }
}
