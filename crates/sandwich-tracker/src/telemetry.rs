use tracing_subscriber::EnvFilter;

/// Instala o subscriber global. Logs vão para stderr; stdout fica reservado ao resultado.
pub fn init_subscriber() {
    // RUST_LOG tem precedência sobre o nível padrão
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("hyper=warn".parse().expect("well-formed"))
        .add_directive("reqwest=warn".parse().expect("well-formed"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
