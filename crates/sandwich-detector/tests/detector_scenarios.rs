use ethereum_types::{Address, H256, U256};
use sandwich_core::types::RawTransaction;
use sandwich_detector::{partition_bots, SandwichDetector};

fn dex_a() -> Address {
    Address::repeat_byte(0xd1)
}

fn dex_b() -> Address {
    Address::repeat_byte(0xd2)
}

fn make_tx(hash_byte: u8, to: Option<Address>, from_byte: u8, gas: u64) -> RawTransaction {
    RawTransaction {
        hash: H256::repeat_byte(hash_byte),
        to,
        from: Address::repeat_byte(from_byte),
        gas_price: U256::from(gas),
    }
}

fn detector() -> SandwichDetector {
    SandwichDetector::new(vec![dex_a(), dex_b()])
}

#[test]
fn no_known_contract_means_no_sandwich() {
    let mut det = detector();
    let other = Some(Address::repeat_byte(0x99));
    let accepted = det.ingest_transactions(vec![
        make_tx(0x01, other, 0x0a, 10),
        make_tx(0x02, other, 0x0a, 20),
    ]);
    assert_eq!(accepted, 0);
    assert!(det.accumulator().is_empty());
    assert!(det.detect().is_empty());
}

#[test]
fn three_from_same_origin_never_qualify() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0a, 20),
        make_tx(0x03, Some(dex_a()), 0x0a, 30),
    ]);
    assert_eq!(det.accumulator().count_for(&dex_a()), 3);
    assert!(det.find_bots().is_empty());
    assert!(det.detect().is_empty());
}

#[test]
fn pair_with_same_gas_is_discarded() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0a, 10),
    ]);
    let candidates = det.find_bots();
    assert_eq!(candidates.len(), 2);

    let partition = partition_bots(&candidates);
    assert!(partition.all_bots.contains_key(&H256::repeat_byte(0x01)));
    assert!(partition.duplicate_bots.contains_key(&H256::repeat_byte(0x02)));
    assert!(det.detect().is_empty());
}

#[test]
fn pair_with_distinct_gas_is_reported() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0a, 20),
    ]);
    assert_eq!(det.detect(), vec![H256::repeat_byte(0x01), H256::repeat_byte(0x02)]);
}

#[test]
fn two_contracts_follow_lookup_order() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_b()), 0x0b, 30),
        make_tx(0x03, Some(dex_a()), 0x0a, 20),
        make_tx(0x04, Some(dex_b()), 0x0b, 40),
    ]);
    assert_eq!(
        det.detect(),
        vec![
            H256::repeat_byte(0x01),
            H256::repeat_byte(0x02),
            H256::repeat_byte(0x03),
            H256::repeat_byte(0x04),
        ]
    );
}

#[test]
fn contract_creation_is_ignored() {
    let mut det = detector();
    assert!(!det.observe(&make_tx(0x01, None, 0x0a, 10)));
    assert!(det.accumulator().is_empty());
    assert!(det.accumulator().transaction_count().is_empty());
    assert!(det.accumulator().contract_origin().is_empty());
}

#[test]
fn detect_is_repeatable() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0a, 20),
        make_tx(0x03, Some(dex_b()), 0x0b, 20),
    ]);
    let first = det.detect();
    assert_eq!(first, det.detect());
    assert_eq!(det.report().sandwiches, first);
}

#[test]
fn interleaved_origin_resets_the_run() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0b, 11),
        make_tx(0x03, Some(dex_a()), 0x0a, 12),
    ]);
    assert_eq!(det.accumulator().count_for(&dex_a()), 1);
    assert!(det.detect().is_empty());
}

#[test]
fn candidates_cross_contract_gas_collision() {
    let mut det = detector();
    // o mesmo preço de gás em contratos diferentes também conta como assinatura repetida
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0a, 20),
        make_tx(0x03, Some(dex_b()), 0x0b, 20),
        make_tx(0x04, Some(dex_b()), 0x0b, 30),
    ]);
    assert_eq!(det.detect(), vec![H256::repeat_byte(0x01), H256::repeat_byte(0x04)]);
}

#[test]
fn reset_starts_a_fresh_block() {
    let mut det = detector();
    det.ingest_transactions(vec![
        make_tx(0x01, Some(dex_a()), 0x0a, 10),
        make_tx(0x02, Some(dex_a()), 0x0a, 20),
    ]);
    assert_eq!(det.detect().len(), 2);

    det.reset();
    assert!(det.accumulator().is_empty());
    assert!(det.detect().is_empty());
    assert_eq!(det.known_contracts(), &[dex_a(), dex_b()]);
}

#[test]
fn contract_set_is_mutable() {
    let mut det = SandwichDetector::new(vec![]);
    assert!(!det.observe(&make_tx(0x01, Some(dex_a()), 0x0a, 10)));
    assert!(det.add_contract(dex_a()));
    assert!(!det.add_contract(dex_a()));
    assert!(det.observe(&make_tx(0x02, Some(dex_a()), 0x0a, 10)));
    assert!(det.remove_contract(&dex_a()));
    assert!(!det.remove_contract(&dex_a()));
    assert!(!det.observe(&make_tx(0x03, Some(dex_a()), 0x0a, 10)));
}
