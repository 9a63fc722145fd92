//! Estilos de clave soportados y sus funciones de transformación.
//!
//! `Snake` se define siempre a partir de la forma `Camel`: primero se
//! normaliza la clave a camelCase y sólo después se deriva snake_case. Así
//! `SomeField`, `some_field` y `someField` convergen en `some_field`.

use std::fmt;
use std::str::FromStr;

use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};

/// Estilo de destino para las claves de un mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Case {
    #[serde(alias = "camelCase")]
    Camel = 1,
    #[serde(alias = "snake_case")]
    Snake = 2,
    #[serde(alias = "PascalCase")]
    Pascal = 3,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Camel, Case::Snake, Case::Pascal];

    /// Identidad entera estable (1, 2, 3).
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Case> {
        Case::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Snake => "snake",
            Case::Pascal => "pascal",
        }
    }

    /// Renderiza `key` en este estilo.
    pub fn transform(self, key: &str) -> String {
        transform(self, key)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error al interpretar un nombre de estilo desconocido.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case style: {0}")]
pub struct ParseCaseError(pub String);

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" | "lower_camel" => Ok(Case::Camel),
            "snake" | "snake_case" => Ok(Case::Snake),
            "pascal" | "pascalcase" | "upper_camel" => Ok(Case::Pascal),
            _ => Err(ParseCaseError(s.to_string())),
        }
    }
}

/// Transforma `key` al estilo `case`.
///
/// Sólo `_`, `-` y los espacios separan palabras; cualquier otro carácter
/// (`$`, `.`, dígitos...) se conserva. Los prefijos y sufijos de separadores
/// se conservan tal cual. Las claves sin minúsculas (`ID`, `HTTP_STATUS`),
/// las puramente numéricas y las vacías se devuelven sin cambios.
pub fn transform(case: Case, key: &str) -> String {
    let (prefix, core, suffix) = split_affixes(key);
    if is_verbatim(core) {
        return key.to_string();
    }
    let rendered = match case {
        Case::Camel => camelize(core),
        Case::Pascal => capitalize(&camelize(core)),
        // decompose-then-recompose: snake siempre pasa por camel
        Case::Snake => snake_from_camel(&camelize(core)),
    };
    format!("{prefix}{rendered}{suffix}")
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

fn split_affixes(key: &str) -> (&str, &str, &str) {
    let start = key.len() - key.trim_start_matches(is_separator).len();
    let end = key.trim_end_matches(is_separator).len();
    if start >= end {
        return ("", "", "");
    }
    (&key[..start], &key[start..end], &key[end..])
}

/// Hay alguna mayúscula y ninguna minúscula.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

fn is_verbatim(core: &str) -> bool {
    core.is_empty() || core.chars().all(|c| c.is_ascii_digit()) || is_upper(core)
}

/// Primer carácter en minúscula (salvo que los dos primeros sean
/// mayúsculas) y cada tramo de separadores se sustituye por el siguiente
/// carácter en mayúscula. El resto queda intacto.
fn camelize(core: &str) -> String {
    let prefix: String = core.chars().take(2).collect();
    let keep_first = is_upper(&prefix);
    let mut out = String::with_capacity(core.len());
    let mut upper_next = false;
    for (i, c) in core.chars().enumerate() {
        if is_separator(c) {
            upper_next = true;
        } else if i == 0 && !keep_first {
            out.extend(c.to_lowercase());
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// snake_case por tramos alfanuméricos; los demás caracteres se copian.
fn snake_from_camel(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    let mut word = String::new();
    for c in camel.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else {
            out.push_str(&word.to_snake_case());
            word.clear();
            out.push(c);
        }
    }
    out.push_str(&word.to_snake_case());
    out
}
