use keycase_core::MapperError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de uso: {0}")]
    Usage(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error de mapeo: {0}")]
    Mapper(#[from] MapperError),
}

impl CoreError {
    /// Código de salida de la CLI para cada variante.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::Usage(_) => 2,
            CoreError::Io(_) | CoreError::Json(_) => 3,
            CoreError::Mapper(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_variant_format() {
        let err = CoreError::Usage("falta FILE".into());
        assert_eq!(err.to_string(), "Error de uso: falta FILE");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: CoreError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_mapper_variant_from() {
        let err: CoreError = MapperError::BaseNotMapping { index: 0, found: "string" }.into();
        assert_eq!(err.to_string(), "Error de mapeo: base #0 is not a mapping (found string)");
        assert_eq!(err.exit_code(), 4);
    }
}
