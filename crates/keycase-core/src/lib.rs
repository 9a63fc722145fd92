//! keycase-core: normalización del estilo de claves en estructuras anidadas.
//!
//! Cuatro operaciones públicas:
//! - [`translate_case`]: reescribe recursivamente las claves (camel/snake/pascal).
//! - [`convert_to_object`]: materializa mappings en [`Record`]s.
//! - [`assemble_dicts`]: merge de bases + extras con nombre, luego traducción.
//! - [`register_mapping_capability`]: amplía qué tipos cuentan como mapping.
pub mod assemble;
pub mod canonical_json;
pub mod case;
pub mod errors;
pub mod materialize;
pub mod registry;
pub mod translate;
pub mod value;

pub use assemble::{assemble_dicts, assemble_dicts_in, AssembleOptions, Assembler};
pub use canonical_json::to_canonical_json;
pub use case::{transform, Case, ParseCaseError};
pub use errors::MapperError;
pub use materialize::{convert_to_object, convert_to_object_in};
pub use registry::{register_mapping_capability, MappingRegistry};
pub use translate::{translate_case, translate_case_in};
pub use value::{ForeignValue, Map, Record, Value};
