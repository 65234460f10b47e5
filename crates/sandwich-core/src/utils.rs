/*!
 * Sandwich Utils
 * 
 * Conversões e formatação de endereços e hashes
 */

use crate::error::{Error, Result};
use ethereum_types::{Address, H256, U256};
use std::str::FromStr;

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = hex.trim();
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.len() != 40 {
        return None;
    }
    Address::from_str(hex_str).ok()
}

/// Converte uma string hexadecimal para H256
pub fn hex_to_h256(hex: &str) -> Option<H256> {
    let hex_str = hex.trim();
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.len() != 64 {
        return None;
    }
    H256::from_str(hex_str).ok()
}

/// Converte uma lista de endereços separada por vírgulas.
/// Entradas vazias são ignoradas; qualquer entrada inválida gera erro de configuração.
pub fn parse_address_list(list: &str) -> Result<Vec<Address>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            hex_to_address(s)
                .ok_or_else(|| Error::Configuration(format!("endereço de contrato inválido: {}", s)))
        })
        .collect()
}

/// Formata um Address para exibição
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Formata um H256 para exibição
pub fn format_h256(hash: &H256) -> String {
    format!("0x{:x}", hash)
}

/// Formata um U256 para exibição
pub fn format_u256(value: &U256) -> String {
    value.to_string()
}
