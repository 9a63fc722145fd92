//! Ensamblador de mappings.
//!
//! Orden fijo de construcción:
//! 1. bases, en orden (la posterior gana en colisión), con política de nulos;
//! 2. extras con nombre, re-normalizados;
//! 3. traducción del resultado completo al estilo destino (si hay uno).
//!
//! Los mappings pasados como extras pierden siempre sus entradas nulas, sea
//! cual sea `include_nones`. Los mappings dentro de listas se re-ensamblan
//! solos con las opciones anidadas (sin nulos, `Camel`).

pub mod merge;

use log::debug;

use crate::case::Case;
use crate::errors::MapperError;
use crate::registry::MappingRegistry;
use crate::translate::translate_case_in;
use crate::value::{Map, Value};

pub use merge::{merge_entries, without_nulls};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Conserva las entradas nulas de las bases.
    pub include_nones: bool,
    /// `None` devuelve el merge sin traducir.
    pub target_case: Option<Case>,
}

impl AssembleOptions {
    /// Opciones con las que se re-ensambla cada mapping de una lista.
    pub const NESTED: AssembleOptions = AssembleOptions {
        include_nones: false,
        target_case: Some(Case::Camel),
    };
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self { include_nones: true, target_case: Some(Case::Camel) }
    }
}

/// Ensambla con el registro global.
pub fn assemble_dicts(
    bases: &[Value],
    named: &[(String, Value)],
    options: AssembleOptions,
) -> Result<Value, MapperError> {
    assemble_dicts_in(MappingRegistry::global(), bases, named, options)
}

pub fn assemble_dicts_in(
    registry: &MappingRegistry,
    bases: &[Value],
    named: &[(String, Value)],
    options: AssembleOptions,
) -> Result<Value, MapperError> {
    debug!(
        "assemble:start bases={} named={} include_nones={} case={:?}",
        bases.len(),
        named.len(),
        options.include_nones,
        options.target_case
    );
    let mut result = Map::new();

    for (index, base) in bases.iter().enumerate() {
        let entries = registry
            .entries(base)
            .ok_or(MapperError::BaseNotMapping { index, found: base.kind() })?;
        merge_entries(&mut result, entries, options.include_nones);
    }

    for (field, entry) in named {
        let scoped = if let Some(items) = entry.as_sequence() {
            let mut scoped = Vec::with_capacity(items.len());
            for item in items {
                if registry.is_mapping(item) {
                    let bases = std::slice::from_ref(item);
                    scoped.push(assemble_dicts_in(registry, bases, &[], AssembleOptions::NESTED)?);
                } else {
                    scoped.push(item.clone());
                }
            }
            Value::List(scoped)
        } else if let Some(entries) = registry.entries(entry) {
            Value::Map(without_nulls(entries))
        } else {
            entry.clone()
        };
        result.insert(field.clone(), scoped);
    }

    let merged = Value::Map(result);
    match options.target_case {
        Some(case) => Ok(translate_case_in(registry, &merged, case)),
        None => Ok(merged),
    }
}

/// Builder sobre [`assemble_dicts_in`].
///
/// ```
/// use keycase_core::{Assembler, Case};
/// use serde_json::json;
///
/// let out = Assembler::new()
///     .base(json!({"level_one": 1}))
///     .named("extra_field", json!({"a": null, "b": 2}))
///     .target_case(Some(Case::Pascal))
///     .assemble()
///     .unwrap();
/// assert_eq!(out["LevelOne"].as_i64(), Some(1));
/// assert_eq!(out["ExtraField"]["B"].as_i64(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Assembler<'r> {
    registry: &'r MappingRegistry,
    bases: Vec<Value>,
    named: Vec<(String, Value)>,
    options: AssembleOptions,
}

impl Assembler<'static> {
    pub fn new() -> Self {
        Self::with_registry(MappingRegistry::global())
    }
}

impl Default for Assembler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Assembler<'r> {
    pub fn with_registry(registry: &'r MappingRegistry) -> Self {
        Self { registry, bases: vec![], named: vec![], options: AssembleOptions::default() }
    }

    pub fn base(mut self, base: impl Into<Value>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn bases<I, V>(mut self, bases: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.bases.extend(bases.into_iter().map(Into::into));
        self
    }

    pub fn named(mut self, field: impl Into<String>, entry: impl Into<Value>) -> Self {
        self.named.push((field.into(), entry.into()));
        self
    }

    pub fn include_nones(mut self, include: bool) -> Self {
        self.options.include_nones = include;
        self
    }

    pub fn target_case(mut self, case: Option<Case>) -> Self {
        self.options.target_case = case;
        self
    }

    pub fn options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn assemble(&self) -> Result<Value, MapperError> {
        assemble_dicts_in(self.registry, &self.bases, &self.named, self.options)
    }
}
