//! Document loading and a single request run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use play_eval::{
    BufferContext, Connection, ContentType, Document, EvalError, HttpContext, NullConnection,
    Outcome, PlayConfig, PlayerBuilder,
};

use crate::args::RunOptions;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// What a run wrote to its response.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub body: String,
    pub status: Option<u16>,
    pub content_type: Option<ContentType>,
    pub redirect: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status.unwrap_or(200))?;
        if let Some(content_type) = self.content_type {
            writeln!(f, "Content-Type: {content_type}")?;
        }
        if let Some(location) = &self.redirect {
            writeln!(f, "Location: {location}")?;
        }
        for (name, value) in &self.headers {
            writeln!(f, "{name}: {value}")?;
        }
        writeln!(f)?;
        f.write_str(&self.body)
    }
}

/// Parse a JSON editor document. `path` is only used in the error.
pub fn parse_document(path: &Path, json: &str) -> Result<Document, RunError> {
    serde_json::from_str(json).map_err(|source| RunError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_document(path: &Path) -> Result<Document, RunError> {
    let json = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &json)
}

/// Load every document named by `options` and run the request.
pub fn run(options: &RunOptions) -> Result<RunReport, RunError> {
    let mut documents = vec![(options.namespace.clone(), load_document(&options.document)?)];
    for (namespace, path) in &options.modules {
        documents.push((namespace.clone(), load_document(path)?));
    }
    run_loaded(options, documents)
}

/// Run the request against already parsed documents.
///
/// Later documents replace earlier ones registered under the same namespace.
pub fn run_loaded(
    options: &RunOptions,
    documents: Vec<(String, Document)>,
) -> Result<RunReport, RunError> {
    let player = documents
        .into_iter()
        .fold(
            PlayerBuilder::new().config(PlayConfig::from_env()),
            |builder, (namespace, document)| builder.document(namespace, document),
        )
        .build();

    let cntx = Arc::new(
        options
            .params
            .iter()
            .fold(BufferContext::new(options.method.as_str()), |cntx, (k, v)| {
                cntx.with_param(k.as_str(), v.as_str())
            }),
    );
    let conn: Arc<dyn Connection> = Arc::new(NullConnection);
    let shared: Arc<dyn HttpContext> = Arc::clone(&cntx) as Arc<dyn HttpContext>;

    tracing::debug!(
        namespace = %options.namespace,
        method = %options.method,
        function = ?options.function,
        "running request"
    );
    let outcome = match &options.function {
        Some(function) => player.execute_function(&options.namespace, function, conn, shared)?,
        None => player.execute(&options.namespace, conn, shared)?,
    };

    Ok(RunReport {
        outcome,
        body: cntx.body(),
        status: cntx.status(),
        content_type: cntx.response_content_type(),
        redirect: cntx.redirect_location(),
        headers: cntx.headers(),
    })
}

#[cfg(test)]
mod tests;
