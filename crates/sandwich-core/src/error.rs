use thiserror::Error;

/// Erros comuns do rastreador de sandwich
#[derive(Error, Debug)]
pub enum Error {
    /// Credencial ou endpoint obrigatório ausente/inválido na inicialização
    #[error("Erro de configuração: {0}")]
    Configuration(String),

    /// Erro de comunicação com o node Ethereum
    #[error("Erro de RPC: {0}")]
    RpcError(String),
    
    /// Erro de decodificação de dados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),
    
    /// Erro de timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),
    
    /// Recurso não encontrado
    #[error("Não encontrado: {0}")]
    NotFound(String),
}

impl Error {
    /// Indica se o erro veio do transporte (bloco ou transação indisponível)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::RpcError(_) | Error::DecodeError(_) | Error::TimeoutError(_) | Error::NotFound(_)
        )
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
