/*!
 * Sandwich Tracker
 *
 * Busca o bloco mais recente (ou o bloco informado), filtra as transações
 * enviadas a contratos de DEX conhecidos e imprime os hashes classificados
 * como sandwich.
 */

mod config;
mod output;
mod pipeline;
mod telemetry;

use clap::Parser;
use config::{Cli, TrackerConfig};
use sandwich_detector::DetectionReport;
use sandwich_rpc::SandwichRpcClient;
use std::process::ExitCode;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_subscriber();

    let config = match TrackerConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "configuração inválida");
            return ExitCode::FAILURE;
        }
    };

    let report = run(&config).await;

    let rendered = if config.json {
        match output::render_json(&report) {
            Ok(json) => json,
            Err(e) => {
                error!(%e, "falha ao serializar resultado");
                return ExitCode::FAILURE;
            }
        }
    } else {
        output::render_text(&report)
    };
    println!("{}", rendered);

    ExitCode::SUCCESS
}

async fn run(config: &TrackerConfig) -> DetectionReport {
    // node inacessível equivale a bloco indisponível: resultado vazio, não erro
    let client = match SandwichRpcClient::new(config.rpc.clone()).await {
        Ok(client) => client,
        Err(e) => {
            warn!(%e, "falha ao conectar ao node Ethereum");
            return pipeline::empty_report(config.block);
        }
    };

    pipeline::detect_block(&client, config.block, config.contracts.clone()).await
}
