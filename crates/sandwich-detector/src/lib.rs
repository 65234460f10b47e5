/*!
 * Sandwich Detector
 *
 * Detecção heurística de padrões sandwich nas transações de um único bloco,
 * restrita a contratos de DEX conhecidos.
 */

mod accumulator;
mod correlation;
mod detector;
mod report;

pub use accumulator::*;
pub use correlation::*;
pub use detector::*;
pub use report::*;
