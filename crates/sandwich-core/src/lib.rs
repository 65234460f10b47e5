/*!
 * Sandwich Core
 * 
 * Tipos, erros e traits compartilhados pelo rastreador de sandwich
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::{Error, Result};
pub use traits::ChainProvider;
pub use types::*;
