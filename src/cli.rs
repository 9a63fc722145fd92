//! CLI mínima sobre las operaciones del núcleo.
//!
//! ```text
//! keycase translate [--case <c>] [--canonical] [FILE]
//! keycase object [--canonical] [FILE]
//! keycase assemble [--case <c> | --raw] [--drop-nulls | --keep-nulls]
//!                  [--named FIELD=JSON]... [--canonical] FILE...
//! ```
//!
//! Sin FILE se lee JSON de stdin. Los argumentos se parsean a mano, igual que
//! el resto de herramientas del workspace.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use keycase_core::{
    assemble_dicts, convert_to_object, to_canonical_json, translate_case, AssembleOptions, Case,
    Value,
};
use log::debug;

use crate::config::MapperConfig;
use crate::errors::CoreError;

pub const USAGE: &str = "\
uso:
  keycase translate [--case camel|snake|pascal] [--canonical] [FILE]
  keycase object [--canonical] [FILE]
  keycase assemble [--case <c> | --raw] [--drop-nulls | --keep-nulls]
                   [--named FIELD=JSON]... [--canonical] FILE...";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Translate {
        case: Option<Case>,
        canonical: bool,
        input: Option<PathBuf>,
    },
    Object {
        canonical: bool,
        input: Option<PathBuf>,
    },
    Assemble {
        /// `None`: default de config; `Some(None)`: `--raw`.
        case: Option<Option<Case>>,
        include_nones: Option<bool>,
        named: Vec<(String, Value)>,
        canonical: bool,
        files: Vec<PathBuf>,
    },
    Help,
}

pub fn parse_args(args: &[String]) -> Result<Command, CoreError> {
    let Some((sub, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let mut case: Option<Option<Case>> = None;
    let mut include_nones: Option<bool> = None;
    let mut named: Vec<(String, Value)> = vec![];
    let mut canonical = false;
    let mut positional: Vec<PathBuf> = vec![];

    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--case" => {
                i += 1;
                let raw = rest
                    .get(i)
                    .ok_or_else(|| CoreError::Usage("--case requiere un valor".into()))?;
                let parsed = raw.parse::<Case>().map_err(|e| CoreError::Usage(e.to_string()))?;
                case = Some(Some(parsed));
            }
            "--raw" => case = Some(None),
            "--drop-nulls" => include_nones = Some(false),
            "--keep-nulls" => include_nones = Some(true),
            "--canonical" => canonical = true,
            "--named" => {
                i += 1;
                let raw = rest
                    .get(i)
                    .ok_or_else(|| CoreError::Usage("--named requiere FIELD=JSON".into()))?;
                named.push(parse_named(raw)?);
            }
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with("--") => {
                return Err(CoreError::Usage(format!("opción desconocida: {flag}")))
            }
            path => positional.push(PathBuf::from(path)),
        }
        i += 1;
    }

    match sub.as_str() {
        "translate" => Ok(Command::Translate {
            case: match case {
                Some(Some(c)) => Some(c),
                Some(None) => return Err(CoreError::Usage("--raw sólo aplica a assemble".into())),
                None => None,
            },
            canonical,
            input: single_input(positional)?,
        }),
        "object" => Ok(Command::Object { canonical, input: single_input(positional)? }),
        "assemble" => {
            if positional.is_empty() && named.is_empty() {
                return Err(CoreError::Usage("assemble requiere al menos un FILE o --named".into()));
            }
            Ok(Command::Assemble { case, include_nones, named, canonical, files: positional })
        }
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => Err(CoreError::Usage(format!("subcomando desconocido: {other}"))),
    }
}

fn single_input(mut positional: Vec<PathBuf>) -> Result<Option<PathBuf>, CoreError> {
    if positional.len() > 1 {
        return Err(CoreError::Usage("se esperaba como mucho un FILE".into()));
    }
    Ok(positional.pop())
}

fn parse_named(raw: &str) -> Result<(String, Value), CoreError> {
    let (field, json) = raw
        .split_once('=')
        .ok_or_else(|| CoreError::Usage(format!("--named espera FIELD=JSON, recibido {raw:?}")))?;
    if field.is_empty() {
        return Err(CoreError::Usage("--named con FIELD vacío".into()));
    }
    let value: Value = serde_json::from_str(json)?;
    Ok((field.to_string(), value))
}

fn read_value(input: Option<&PathBuf>, stdin: &mut impl Read) -> Result<Value, CoreError> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn write_value(out: &mut impl Write, value: &Value, canonical: bool) -> Result<(), CoreError> {
    if canonical {
        writeln!(out, "{}", to_canonical_json(value))?;
    } else {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    }
    Ok(())
}

/// Ejecuta `command` leyendo de `stdin` cuando no hay FILE y escribiendo en `out`.
pub fn run(
    command: Command,
    config: &MapperConfig,
    mut stdin: impl Read,
    mut out: impl Write,
) -> Result<(), CoreError> {
    match command {
        Command::Help => {
            writeln!(out, "{USAGE}")?;
        }
        Command::Translate { case, canonical, input } => {
            let case = case.unwrap_or(config.default_case);
            let value = read_value(input.as_ref(), &mut stdin)?;
            debug!("cli:translate case={case} input={:?}", input);
            write_value(&mut out, &translate_case(&value, case), canonical)?;
        }
        Command::Object { canonical, input } => {
            let value = read_value(input.as_ref(), &mut stdin)?;
            write_value(&mut out, &convert_to_object(&value), canonical)?;
        }
        Command::Assemble { case, include_nones, named, canonical, files } => {
            let options = AssembleOptions {
                include_nones: include_nones.unwrap_or(config.include_nones),
                target_case: case.unwrap_or(Some(config.default_case)),
            };
            let bases = files
                .iter()
                .map(|path| read_value(Some(path), &mut stdin))
                .collect::<Result<Vec<_>, _>>()?;
            debug!("cli:assemble files={} named={} options={options:?}", bases.len(), named.len());
            write_value(&mut out, &assemble_dicts(&bases, &named, options)?, canonical)?;
        }
    }
    Ok(())
}
