//! Utilidades de merge para el ensamblador.
//!
//! Merge "shallow": las claves posteriores reemplazan a las anteriores; no
//! se fusionan mappings anidados.

use crate::value::{Map, Value};

/// Copia `entries` sobre `into`. Los nulos sólo entran si `include_nones`.
pub fn merge_entries(into: &mut Map, entries: Vec<(String, Value)>, include_nones: bool) {
    for (key, value) in entries {
        if !value.is_null() || include_nones {
            into.insert(key, value);
        }
    }
}

/// Mapping nuevo con sólo las entradas no nulas (no recursivo).
pub fn without_nulls(entries: Vec<(String, Value)>) -> Map {
    entries.into_iter().filter(|(_, v)| !v.is_null()).collect()
}
