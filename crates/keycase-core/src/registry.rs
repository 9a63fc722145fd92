//! Registro de capacidades "mapping-like".
//!
//! Un `MappingRegistry` recuerda qué tipos concretos se consideran mappings.
//! Es append-only: un tipo registrado nunca se elimina. El `Map` nativo está
//! presente desde la construcción.
//!
//! Existe una instancia global perezosa (`MappingRegistry::global()`) que vive
//! todo el proceso; los tests pueden construir registros independientes.

use std::any::TypeId;

use dashmap::DashSet;
use log::debug;
use once_cell::sync::Lazy;

use crate::value::{ForeignValue, Map, Value};

static GLOBAL: Lazy<MappingRegistry> = Lazy::new(MappingRegistry::new);

#[derive(Debug)]
pub struct MappingRegistry {
    types: DashSet<TypeId>,
}

impl MappingRegistry {
    /// Registro nuevo que sólo contiene el `Map` nativo.
    pub fn new() -> Self {
        let types = DashSet::new();
        types.insert(TypeId::of::<Map>());
        Self { types }
    }

    /// Instancia de proceso, creada en el primer uso.
    pub fn global() -> &'static MappingRegistry {
        &GLOBAL
    }

    /// Registra `T` como mapping. Idempotente: devuelve `false` si ya estaba.
    pub fn register<T: ForeignValue>(&self) -> bool {
        let added = self.types.insert(TypeId::of::<T>());
        if added {
            debug!("registry:register type={}", std::any::type_name::<T>());
        }
        added
    }

    pub fn contains<T: ForeignValue>(&self) -> bool {
        self.types.contains(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// ¿Se trata `value` como mapping?
    pub fn is_mapping(&self, value: &Value) -> bool {
        match value {
            Value::Map(_) => self.types.contains(&TypeId::of::<Map>()),
            Value::Foreign(foreign) => {
                self.types.contains(&foreign.concrete_type_id()) && foreign.entries().is_some()
            }
            _ => false,
        }
    }

    /// Pares (clave, valor) en orden de iteración si `value` es mapping.
    pub fn entries(&self, value: &Value) -> Option<Vec<(String, Value)>> {
        match value {
            Value::Map(map) => Some(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            Value::Foreign(foreign) if self.types.contains(&foreign.concrete_type_id()) => {
                foreign.entries()
            }
            _ => None,
        }
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registra `T` en el registro global.
pub fn register_mapping_capability<T: ForeignValue>() -> bool {
    MappingRegistry::global().register::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Pairs(Vec<(String, i64)>);

    impl ForeignValue for Pairs {
        fn entries(&self) -> Option<Vec<(String, Value)>> {
            Some(self.0.iter().map(|(k, v)| (k.clone(), Value::from(*v))).collect())
        }

        fn to_json(&self) -> serde_json::Value {
            json!(self.0.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>())
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl ForeignValue for Opaque {
        fn to_json(&self) -> serde_json::Value {
            json!("opaque")
        }
    }

    #[test]
    fn native_map_is_registered_from_start() {
        let reg = MappingRegistry::new();
        assert_eq!(reg.len(), 1);
        assert!(reg.is_mapping(&Value::from(json!({}))));
        assert!(!reg.is_mapping(&Value::from(json!([]))));
        assert!(!reg.is_mapping(&Value::from("text")));
    }

    #[test]
    fn register_is_idempotent() {
        let reg = MappingRegistry::new();
        assert!(reg.register::<Pairs>());
        assert!(!reg.register::<Pairs>());
        assert!(reg.contains::<Pairs>());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn foreign_needs_registration_and_entries() {
        let reg = MappingRegistry::new();
        let pairs = Value::foreign(Pairs(vec![("a".into(), 1)]));
        assert!(!reg.is_mapping(&pairs));
        assert!(reg.entries(&pairs).is_none());
        reg.register::<Pairs>();
        assert!(reg.is_mapping(&pairs));
        assert_eq!(reg.entries(&pairs).unwrap().len(), 1);

        // registrado pero sin iteración: sigue siendo un escalar
        reg.register::<Opaque>();
        assert!(!reg.is_mapping(&Value::foreign(Opaque)));
    }

    #[test]
    fn registries_are_independent() {
        let a = MappingRegistry::new();
        let b = MappingRegistry::new();
        a.register::<Pairs>();
        assert!(a.contains::<Pairs>());
        assert!(!b.contains::<Pairs>());
    }
}
