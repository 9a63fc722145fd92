//! Errores del núcleo (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MapperError {
    #[error("base #{index} is not a mapping (found {found})")]
    BaseNotMapping { index: usize, found: &'static str },
}
