//! Renderizado canónico de un `Value` (útil para comparar y para la CLI).

use std::collections::BTreeMap;

use crate::value::Value;

/// Serializa un `Value` a una representación canónica:
/// - Objetos (maps, records y foráneos) con claves ordenadas
/// - Tuplas como arrays
/// - Sin espacios redundantes
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::List(items) | Value::Tuple(items) => {
            let items: Vec<String> = items.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Map(map) => object(map.iter().map(|(k, v)| (k.as_str(), to_canonical_json(v)))),
        Value::Record(record) => object(record.iter().map(|(k, v)| (k, to_canonical_json(v)))),
        Value::Foreign(foreign) => to_canonical_json(&Value::from(foreign.to_json())),
    }
}

fn object<'a>(entries: impl Iterator<Item = (&'a str, String)>) -> String {
    let tree: BTreeMap<&str, String> = entries.collect();
    let items: Vec<String> = tree.into_iter().map(|(k, v)| format!("{}:{}", quote(k), v)).collect();
    format!("{{{}}}", items.join(","))
}

fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use crate::value::Value;
    use serde_json::json;

    fn canon(v: serde_json::Value) -> String {
        to_canonical_json(&Value::from(v))
    }

    #[test]
    fn test_primitives() {
        assert_eq!(canon(json!(null)), "null");
        assert_eq!(canon(json!(true)), "true");
        assert_eq!(canon(json!(123)), "123");
        assert_eq!(canon(json!("hola")), "\"hola\"");
    }

    #[test]
    fn test_object_sorted_keys() {
        assert_eq!(canon(json!({ "b": 2, "a": 1 })), "{\"a\":1,\"b\":2}");
    }

    #[test]
    fn test_nested() {
        let canonical = canon(json!({ "z": [ { "y": "yes" }, null ], "a": { "x": 10 } }));
        assert_eq!(canonical, "{\"a\":{\"x\":10},\"z\":[{\"y\":\"yes\"},null]}");
    }

    #[test]
    fn test_tuple_and_record() {
        let record: crate::value::Record = [
            ("b".to_string(), Value::from(1)),
            ("a".to_string(), Value::tuple([Value::from("t")])),
        ]
        .into_iter()
        .collect();
        assert_eq!(to_canonical_json(&Value::Record(record)), "{\"a\":[\"t\"],\"b\":1}");
    }
}
