//! Registro materializado: acceso por nombre de campo a los valores de un
//! mapping, con las claves originales (sin traducir).

use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

use serde::{Serialize, Serializer};

use super::{Value, NULL};

/// Objeto de acceso por campo. El orden de los campos no está garantizado.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Recorre registros anidados: `path(&["outer_field", "inner_field"])`.
    pub fn path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first)?;
        for name in rest {
            current = current.as_record()?.get(name)?;
        }
        Some(current)
    }

    pub(crate) fn set(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }

    pub fn into_fields(self) -> HashMap<String, Value> {
        self.fields
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(&NULL)
    }
}

// Serializa con claves ordenadas para que la salida sea estable.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&str, &Value> = self.iter().collect();
        sorted.serialize(serializer)
    }
}
