//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`)
//! con los valores por defecto que usa la CLI.
use std::env;

use keycase_core::{AssembleOptions, Case};
use log::warn;
use once_cell::sync::Lazy;

/// Variable con el estilo de destino por defecto (`camel`, `snake`, `pascal`).
pub const DEFAULT_CASE_VAR: &str = "KEYCASE_DEFAULT_CASE";
/// Variable que decide si el ensamblado conserva los nulos de las bases.
pub const INCLUDE_NONES_VAR: &str = "KEYCASE_INCLUDE_NONES";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Valores por defecto para traducir y ensamblar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperConfig {
    pub default_case: Case,
    pub include_nones: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self { default_case: Case::Camel, include_nones: true }
    }
}

impl MapperConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración con un lookup arbitrario (tests).
    /// Valores inválidos caen al default con un `warn!`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_case = match lookup(DEFAULT_CASE_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "config: invalid {DEFAULT_CASE_VAR}={raw:?}, using {}",
                    defaults.default_case
                );
                defaults.default_case
            }),
            None => defaults.default_case,
        };
        let include_nones = match lookup(INCLUDE_NONES_VAR) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "config: invalid {INCLUDE_NONES_VAR}={raw:?}, using {}",
                    defaults.include_nones
                );
                defaults.include_nones
            }),
            None => defaults.include_nones,
        };
        Self { default_case, include_nones }
    }

    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions { include_nones: self.include_nones, target_case: Some(self.default_case) }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<MapperConfig> = Lazy::new(MapperConfig::from_env);

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(MapperConfig::from_lookup(lookup(&[])), MapperConfig::default());
    }

    #[test]
    fn reads_both_variables() {
        let cfg = MapperConfig::from_lookup(lookup(&[
            (DEFAULT_CASE_VAR, "Snake"),
            (INCLUDE_NONES_VAR, "off"),
        ]));
        assert_eq!(cfg.default_case, Case::Snake);
        assert!(!cfg.include_nones);
        assert_eq!(
            cfg.assemble_options(),
            AssembleOptions { include_nones: false, target_case: Some(Case::Snake) }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = MapperConfig::from_lookup(lookup(&[
            (DEFAULT_CASE_VAR, "kebab"),
            (INCLUDE_NONES_VAR, "maybe"),
        ]));
        assert_eq!(cfg, MapperConfig::default());
    }
}
