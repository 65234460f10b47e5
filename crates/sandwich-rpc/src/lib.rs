/*!
 * Sandwich RPC
 *
 * Cliente JSON-RPC para obtenção de blocos e transações em nodes Ethereum
 */

use async_trait::async_trait;
use ethereum_types::{Address, U256, U64};
use sandwich_core::{
    error::{Error, Result},
    traits::ChainProvider,
    types::{BlockTransactions, RawTransaction, TransactionHash},
    utils::format_h256,
};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use web3::{
    transports::{Http, WebSocket},
    Transport, Web3,
};

/// Configuração do cliente RPC
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8545".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

impl RpcConfig {
    /// Configuração apontando para a mainnet via Infura
    pub fn infura(api_key: &str) -> Self {
        Self {
            endpoint: format!("https://mainnet.infura.io/v3/{}", api_key),
            ..Default::default()
        }
    }
}

/// Enum para diferentes tipos de transporte
pub enum TransportType {
    Http(Web3<Http>),
    WebSocket(Web3<WebSocket>),
}

/// Bloco no formato retornado por `eth_getBlockByNumber` sem transações completas
#[derive(Debug, Deserialize)]
struct RpcBlock {
    number: Option<U64>,
    #[serde(default)]
    transactions: Vec<TransactionHash>,
}

/// Transação no formato retornado por `eth_getTransactionByHash`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcTransaction {
    hash: TransactionHash,
    from: Address,
    to: Option<Address>,
    gas_price: Option<U256>,
    max_fee_per_gas: Option<U256>,
}

impl From<RpcTransaction> for RawTransaction {
    fn from(tx: RpcTransaction) -> Self {
        RawTransaction {
            hash: tx.hash,
            to: tx.to,
            from: tx.from,
            gas_price: tx.gas_price.or(tx.max_fee_per_gas).unwrap_or_default(),
        }
    }
}

/// Cliente RPC para Ethereum
pub struct SandwichRpcClient {
    transport: TransportType,
    config: RpcConfig,
}

impl SandwichRpcClient {
    /// Cria um novo cliente RPC HTTP
    pub async fn new_http(config: RpcConfig) -> Result<Self> {
        let transport = Http::new(&config.endpoint)
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via HTTP: {}", e)))?;

        let client = Self {
            transport: TransportType::Http(Web3::new(transport)),
            config,
        };
        client.verify_connection().await?;
        Ok(client)
    }

    /// Cria um novo cliente RPC WebSocket
    pub async fn new_websocket(config: RpcConfig) -> Result<Self> {
        let transport = WebSocket::new(&config.endpoint)
            .await
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via WebSocket: {}", e)))?;

        let client = Self {
            transport: TransportType::WebSocket(Web3::new(transport)),
            config,
        };
        client.verify_connection().await?;
        Ok(client)
    }

    /// Cria um novo cliente baseado na URL
    pub async fn new(config: RpcConfig) -> Result<Self> {
        if config.endpoint.starts_with("ws") {
            Self::new_websocket(config).await
        } else {
            Self::new_http(config).await
        }
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    async fn verify_connection(&self) -> Result<()> {
        self.get_block_number().await?;
        Ok(())
    }

    /// Executa uma chamada JSON-RPC crua, com timeout e novas tentativas
    async fn execute(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let mut attempt = 0;
        loop {
            match self.execute_once(method, params.clone()).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.config.max_retries => {
                    attempt += 1;
                    debug!(method, attempt, error = %e, "nova tentativa de chamada RPC");
                    tokio::time::sleep(self.config.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn execute_once(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let call = async {
            match &self.transport {
                TransportType::Http(web3) => web3.transport().execute(method, params).await,
                TransportType::WebSocket(web3) => web3.transport().execute(method, params).await,
            }
        };

        match tokio::time::timeout(self.config.timeout, call).await {
            Ok(result) => result.map_err(|e| Error::RpcError(format!("Falha em {}: {}", method, e))),
            Err(_) => Err(Error::TimeoutError(format!("{} excedeu {:?}", method, self.config.timeout))),
        }
    }

    /// Obtém o número do bloco atual
    pub async fn get_block_number(&self) -> Result<u64> {
        let value = self.execute("eth_blockNumber", vec![]).await?;
        let number: U64 = serde_json::from_value(value)
            .map_err(|e| Error::DecodeError(format!("Número de bloco inválido: {}", e)))?;
        Ok(number.as_u64())
    }

    /// Obtém um bloco pelo identificador (`latest` ou número em hexadecimal)
    async fn get_block_by_tag(&self, tag: String) -> Result<BlockTransactions> {
        let params = vec![Value::String(tag.clone()), Value::Bool(false)];
        let value = self.execute("eth_getBlockByNumber", params).await?;
        if value.is_null() {
            return Err(Error::NotFound(format!("Bloco {} não encontrado", tag)));
        }

        let block: RpcBlock = serde_json::from_value(value)
            .map_err(|e| Error::DecodeError(format!("Falha ao decodificar bloco: {}", e)))?;

        Ok(BlockTransactions {
            number: block.number.map(|n| n.as_u64()),
            transactions: block.transactions,
        })
    }

    /// Obtém os detalhes de uma transação
    pub async fn get_transaction(&self, tx_hash: TransactionHash) -> Result<RawTransaction> {
        let params = vec![Value::String(format_h256(&tx_hash))];
        let value = self.execute("eth_getTransactionByHash", params).await?;
        if value.is_null() {
            return Err(Error::NotFound(format!("Transação {} não encontrada", format_h256(&tx_hash))));
        }

        let tx: RpcTransaction = serde_json::from_value(value)
            .map_err(|e| Error::DecodeError(format!("Falha ao decodificar transação: {}", e)))?;

        if tx.hash != tx_hash {
            warn!(requested = %format_h256(&tx_hash), returned = %format_h256(&tx.hash), "node retornou hash divergente");
        }

        Ok(tx.into())
    }
}

/// Implementação da trait ChainProvider do sandwich-core
#[async_trait]
impl ChainProvider for SandwichRpcClient {
    async fn fetch_latest_block(&self) -> Result<BlockTransactions> {
        self.get_block_by_tag("latest".to_string()).await
    }

    async fn fetch_block(&self, block_number: u64) -> Result<BlockTransactions> {
        self.get_block_by_tag(format!("0x{:x}", block_number)).await
    }

    async fn fetch_transaction(&self, tx_hash: TransactionHash) -> Result<RawTransaction> {
        self.get_transaction(tx_hash).await
    }
}
