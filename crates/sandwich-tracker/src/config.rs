use clap::Parser;
use ethereum_types::Address;
use sandwich_core::{
    error::{Error, Result},
    utils::parse_address_list,
};
use sandwich_rpc::RpcConfig;
use std::time::Duration;

/// Contrato observado quando nenhum outro é informado.
pub const DEFAULT_DEX_CONTRACT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sandwich-tracker", version, about = "Procura padrões sandwich no bloco mais recente")]
pub struct Cli {
    /// Endpoint JSON-RPC (http, https, ws ou wss)
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Chave da Infura, usada quando nenhum endpoint é informado
    #[arg(long, env = "INFURA_API_KEY", hide_env_values = true)]
    pub infura_api_key: Option<String>,

    /// Contrato de DEX observado (pode ser repetido)
    #[arg(long = "contract", env = "KNOWN_DEX_CONTRACTS", value_delimiter = ',')]
    pub contracts: Vec<String>,

    /// Analisa este bloco em vez do mais recente
    #[arg(long)]
    pub block: Option<u64>,

    /// Timeout de cada chamada RPC, em segundos
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Imprime o resultado em JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuração validada do rastreador.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub rpc: RpcConfig,
    pub contracts: Vec<Address>,
    pub block: Option<u64>,
    pub json: bool,
}

impl TrackerConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mut rpc = match (non_empty(cli.rpc_url), non_empty(cli.infura_api_key)) {
            (Some(endpoint), _) => RpcConfig { endpoint, ..Default::default() },
            (None, Some(key)) => RpcConfig::infura(&key),
            (None, None) => {
                return Err(Error::Configuration(
                    "informe RPC_URL ou INFURA_API_KEY".to_string(),
                ))
            }
        };
        rpc.timeout = Duration::from_secs(cli.timeout_secs);

        let contracts = if cli.contracts.iter().all(|c| c.trim().is_empty()) {
            parse_address_list(DEFAULT_DEX_CONTRACT)?
        } else {
            parse_address_list(&cli.contracts.join(","))?
        };

        Ok(Self {
            rpc,
            contracts,
            block: cli.block,
            json: cli.json,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
