//! keycase
//!
//! Este crate actúa como la librería de entrada de keycase:
//! - Re-exporta el núcleo (`keycase-core`): traducción de claves, materialización
//!   y ensamblado.
//! - Expone `config` con los defaults leídos del entorno (.env).
//! - Expone `errors` y `cli` para el binario `keycase`.

pub mod cli;
pub mod config;
pub mod errors;

pub use keycase_core::*;
