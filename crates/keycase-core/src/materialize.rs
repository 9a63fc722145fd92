//! Materializador de registros.
//!
//! Convierte mappings en [`Record`]s cuyos campos son exactamente las claves
//! originales (no hay traducción de estilo). Sólo recorre `List`; una `Tuple`
//! se devuelve intacta aunque contenga mappings.

use crate::registry::MappingRegistry;
use crate::value::{Record, Value};

/// Materializa `value` con el registro global.
pub fn convert_to_object(value: &Value) -> Value {
    convert_to_object_in(MappingRegistry::global(), value)
}

pub fn convert_to_object_in(registry: &MappingRegistry, value: &Value) -> Value {
    match value {
        Value::Map(map) => {
            Value::Record(materialize_entries(registry, map.iter().map(|(k, v)| (k.as_str(), v))))
        }
        Value::List(items) => {
            Value::List(items.iter().map(|item| convert_to_object_in(registry, item)).collect())
        }
        other => match registry.entries(other) {
            Some(entries) => {
                let entries = entries.iter().map(|(k, v)| (k.as_str(), v));
                Value::Record(materialize_entries(registry, entries))
            }
            None => other.clone(),
        },
    }
}

fn materialize_entries<'a>(
    registry: &MappingRegistry,
    entries: impl Iterator<Item = (&'a str, &'a Value)>,
) -> Record {
    let mut record = Record::new();
    for (name, field) in entries {
        let field = if field.is_sequence() || registry.is_mapping(field) {
            convert_to_object_in(registry, field)
        } else {
            field.clone()
        };
        record.set(name.to_string(), field);
    }
    record
}
