//! Valores definidos por el caller que viajan dentro de un `Value`.
//!
//! Un `ForeignValue` sólo se trata como mapping si su tipo concreto está
//! registrado en un [`MappingRegistry`](crate::registry::MappingRegistry) y
//! además expone `entries()`.

use std::any::{Any, TypeId};
use std::fmt;

use super::Value;

/// Contrato para payloads opacos del caller.
pub trait ForeignValue: Any + fmt::Debug + Send + Sync {
    /// Iteración ordenada (clave, valor). `None` si el tipo no es iterable
    /// como mapping.
    fn entries(&self) -> Option<Vec<(String, Value)>> {
        None
    }

    /// Representación JSON usada al serializar.
    fn to_json(&self) -> serde_json::Value;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// `TypeId` del tipo concreto (no del trait object).
    fn concrete_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}
