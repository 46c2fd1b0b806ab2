//! `play run` option parsing.

use std::path::PathBuf;

/// Namespace the main document is registered under when `--namespace` is absent.
pub const DEFAULT_NAMESPACE: &str = "main";

/// Request method used when `--method` is absent.
pub const DEFAULT_METHOD: &str = "GET";

/// Options of `play run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub document: PathBuf,
    pub namespace: String,
    /// Entry function; `None` runs the function named after the method.
    pub function: Option<String>,
    pub method: String,
    /// Request parameters, in command-line order.
    pub params: Vec<(String, String)>,
    /// Extra documents reachable through `procedures_callmodule`.
    pub modules: Vec<(String, PathBuf)>,
}

impl RunOptions {
    pub fn new(document: impl Into<PathBuf>) -> Self {
        RunOptions {
            document: document.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            function: None,
            method: DEFAULT_METHOD.to_string(),
            params: Vec::new(),
            modules: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing document path")]
    MissingDocument,
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
    #[error("`{flag}` expects {expected}, got `{value}`")]
    Malformed {
        flag: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Parse the arguments following `run`.
///
/// Flags use the `--flag=value` form and may appear anywhere:
/// `--namespace=`, `--function=`, `--method=`, `--param=name=value`
/// (repeatable) and `--module=namespace=path` (repeatable).
pub fn parse_run_args(args: &[String]) -> Result<RunOptions, ArgsError> {
    let mut document = None;
    let mut namespace = None;
    let mut function = None;
    let mut method = None;
    let mut params = Vec::new();
    let mut modules = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--namespace=") {
            namespace = Some(non_empty("--namespace", value)?);
        } else if let Some(value) = arg.strip_prefix("--function=") {
            function = Some(non_empty("--function", value)?);
        } else if let Some(value) = arg.strip_prefix("--method=") {
            method = Some(non_empty("--method", value)?.to_ascii_uppercase());
        } else if let Some(value) = arg.strip_prefix("--param=") {
            let (name, value) = split_pair("--param", "name=value", value)?;
            params.push((name, value));
        } else if let Some(value) = arg.strip_prefix("--module=") {
            let (ns, path) = split_pair("--module", "namespace=path", value)?;
            modules.push((ns, PathBuf::from(path)));
        } else if arg.starts_with('-') || document.is_some() {
            return Err(ArgsError::Unexpected(arg.clone()));
        } else {
            document = Some(PathBuf::from(arg));
        }
    }

    let mut options = RunOptions::new(document.ok_or(ArgsError::MissingDocument)?);
    if let Some(ns) = namespace {
        options.namespace = ns;
    }
    if let Some(m) = method {
        options.method = m;
    }
    options.function = function;
    options.params = params;
    options.modules = modules;
    Ok(options)
}

fn non_empty(flag: &'static str, value: &str) -> Result<String, ArgsError> {
    if value.is_empty() {
        return Err(ArgsError::Malformed {
            flag,
            expected: "a value",
            value: String::new(),
        });
    }
    Ok(value.to_string())
}

fn split_pair(
    flag: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<(String, String), ArgsError> {
    match value.split_once('=') {
        Some((key, rest)) if !key.is_empty() => Ok((key.to_string(), rest.to_string())),
        _ => Err(ArgsError::Malformed {
            flag,
            expected,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests;
