//! Traductor de estilo de claves.
//!
//! Recorre recursivamente secuencias y mappings y reescribe cada clave con
//! [`Case::transform`]. Las hojas se devuelven tal cual. La entrada nunca se
//! muta: siempre se construye una estructura nueva.
//!
//! Si dos claves distintas colapsan en la misma clave de salida, gana la que
//! se procesa después (orden de inserción de la fuente).

use log::{debug, trace};

use crate::case::Case;
use crate::registry::MappingRegistry;
use crate::value::{Map, Value};

/// Traduce `value` a `case` usando el registro global.
pub fn translate_case(value: &Value, case: Case) -> Value {
    translate_case_in(MappingRegistry::global(), value, case)
}

/// Igual que [`translate_case`] pero con un registro explícito.
pub fn translate_case_in(registry: &MappingRegistry, value: &Value, case: Case) -> Value {
    match value {
        Value::List(items) => Value::List(translate_items(registry, items, case)),
        Value::Tuple(items) => Value::Tuple(translate_items(registry, items, case)),
        Value::Map(map) => {
            let entries = map.iter().map(|(k, v)| (k.as_str(), v));
            Value::Map(translate_entries(registry, entries, case))
        }
        other => match registry.entries(other) {
            Some(entries) => {
                let entries = entries.iter().map(|(k, v)| (k.as_str(), v));
                Value::Map(translate_entries(registry, entries, case))
            }
            None => other.clone(),
        },
    }
}

fn translate_items(registry: &MappingRegistry, items: &[Value], case: Case) -> Vec<Value> {
    items.iter().map(|item| translate_case_in(registry, item, case)).collect()
}

fn translate_entries<'a, I>(registry: &MappingRegistry, entries: I, case: Case) -> Map
where
    I: ExactSizeIterator<Item = (&'a str, &'a Value)>,
{
    trace!("translate:map case={case} keys={}", entries.len());
    let mut out = Map::with_capacity(entries.len());
    for (key, content) in entries {
        let mapped = case.transform(key);
        let content = if content.is_sequence() || registry.is_mapping(content) {
            translate_case_in(registry, content, case)
        } else {
            content.clone()
        };
        if out.insert(mapped.clone(), content).is_some() {
            debug!("translate:collision key={key} -> {mapped} (last write wins)");
        }
    }
    out
}
