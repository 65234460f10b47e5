use crate::accumulator::BlockAccumulator;
use ethereum_types::{Address, U256};
use indexmap::IndexMap;
use sandwich_core::types::TransactionHash;
use serde::Serialize;

/// Contagem de sequência que marca um par destino/origem como provável bot.
pub const BOT_PAIR_RUN: u32 = 2;

/// Transação candidata a fazer parte de um sandwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub destination: Address,
    pub gas_price: U256,
}

/// Candidatos indexados por hash, na ordem de inserção do `tx_lookup`.
pub type CandidateSandwich = IndexMap<TransactionHash, Candidate>;

/// Resultado da primeira passada de `find_sandwich`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotPartition {
    /// primeira ocorrência de cada preço de gás
    pub all_bots: IndexMap<TransactionHash, U256>,
    /// ocorrências seguintes de um preço já visto
    pub duplicate_bots: IndexMap<TransactionHash, U256>,
}

/// Seleciona as transações cujo destino terminou o bloco com sequência exatamente igual a 2.
pub fn find_bots(accumulator: &BlockAccumulator) -> CandidateSandwich {
    accumulator
        .tx_lookup()
        .iter()
        .filter(|(_, record)| accumulator.count_for(&record.destination) == BOT_PAIR_RUN)
        .map(|(hash, record)| {
            (
                *hash,
                Candidate {
                    destination: record.destination,
                    gas_price: record.gas_price,
                },
            )
        })
        .collect()
}

/// Separa os candidatos usando o preço de gás como assinatura do bot.
pub fn partition_bots(candidates: &CandidateSandwich) -> BotPartition {
    let mut partition = BotPartition::default();
    for (hash, candidate) in candidates {
        let seen = partition.all_bots.values().any(|g| *g == candidate.gas_price);
        if seen {
            partition.duplicate_bots.insert(*hash, candidate.gas_price);
        } else {
            partition.all_bots.insert(*hash, candidate.gas_price);
        }
    }
    partition
}

/// Mantém apenas os candidatos cujo preço de gás não se repete entre os demais.
pub fn find_sandwich(candidates: &CandidateSandwich) -> Vec<TransactionHash> {
    let partition = partition_bots(candidates);
    partition
        .all_bots
        .iter()
        .filter(|(_, gas)| !partition.duplicate_bots.values().any(|d| d == *gas))
        .map(|(hash, _)| *hash)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::H256;

    fn candidates(entries: &[(u8, u64)]) -> CandidateSandwich {
        entries
            .iter()
            .map(|(h, g)| {
                (
                    H256::repeat_byte(*h),
                    Candidate {
                        destination: Address::repeat_byte(0xd1),
                        gas_price: U256::from(*g),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        assert!(find_sandwich(&CandidateSandwich::new()).is_empty());
    }

    #[test]
    fn shared_gas_price_goes_to_duplicates() {
        let c = candidates(&[(1, 7), (2, 7)]);
        let partition = partition_bots(&c);
        assert_eq!(partition.all_bots.keys().copied().collect::<Vec<_>>(), vec![H256::repeat_byte(1)]);
        assert_eq!(partition.duplicate_bots.keys().copied().collect::<Vec<_>>(), vec![H256::repeat_byte(2)]);
        assert!(find_sandwich(&c).is_empty());
    }

    #[test]
    fn triple_gas_price_excludes_first_as_well() {
        let c = candidates(&[(1, 5), (2, 5), (3, 5), (4, 9)]);
        let partition = partition_bots(&c);
        assert_eq!(partition.all_bots.len(), 2);
        assert_eq!(partition.duplicate_bots.len(), 2);
        assert_eq!(find_sandwich(&c), vec![H256::repeat_byte(4)]);
    }

    #[test]
    fn unique_gas_prices_keep_insertion_order() {
        let c = candidates(&[(3, 30), (1, 10), (2, 20)]);
        assert_eq!(
            find_sandwich(&c),
            vec![H256::repeat_byte(3), H256::repeat_byte(1), H256::repeat_byte(2)]
        );
    }
}
