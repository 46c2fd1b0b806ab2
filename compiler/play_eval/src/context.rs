//! External collaborators handed to each invocation.
//!
//! The evaluator talks to the surrounding server through two handles:
//! - [`HttpContext`]: request parameters and the response being built
//! - [`Connection`]: the database handle, opaque to the core and passed
//!   through for extension handlers
//!
//! Both are shared (`Arc`) between an invocation and any cross-namespace
//! executions it starts, so their methods take `&self`.

use std::any::Any;
use std::fmt;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Response content types selectable by `ctx_content_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
    Json,
    Image,
}

impl ContentType {
    /// Parse the editor's name (`TEXT`, `HTML`, `JSON`, `IMG`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TEXT" => Some(ContentType::Text),
            "HTML" => Some(ContentType::Html),
            "JSON" => Some(ContentType::Json),
            "IMG" => Some(ContentType::Image),
            _ => None,
        }
    }

    /// MIME type sent in the `Content-Type` header.
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Text => "text/plain; charset=utf-8",
            ContentType::Html => "text/html; charset=utf-8",
            ContentType::Json => "application/json",
            ContentType::Image => "image/png",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Request/response collaborator.
pub trait HttpContext: Send + Sync {
    /// Value of the request parameter `name`.
    fn get(&self, name: &str) -> Option<String>;

    fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a request parameter.
    fn set(&self, name: &str, value: &str);

    /// Remove a request parameter.
    fn unset(&self, name: &str);

    /// Append raw text to the response body.
    fn echo(&self, text: &str);

    /// Set the response status code.
    fn code(&self, status: u16);

    /// Set a response header.
    fn header(&self, name: &str, value: &str);

    fn content_type(&self, content_type: ContentType);

    /// Redirect the client to `location`.
    fn redirect(&self, location: &str);

    /// Name of the function a plain `execute` should run (the request method).
    fn method_name(&self) -> String;
}

/// Database collaborator. The core never calls it.
pub trait Connection: Send + Sync {
    /// Downcasting hook for handlers that know the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Connection for hosts without a database.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullConnection;

impl Connection for NullConnection {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default)]
struct Response {
    params: FxHashMap<String, String>,
    body: String,
    status: Option<u16>,
    headers: Vec<(String, String)>,
    content_type: Option<ContentType>,
    redirect: Option<String>,
}

/// In-memory [`HttpContext`] that records everything written to it.
///
/// Used by tests and the command-line runner.
#[derive(Debug, Default)]
pub struct BufferContext {
    method: String,
    state: Mutex<Response>,
}

impl BufferContext {
    /// Create a context whose request method is `method`.
    pub fn new(method: impl Into<String>) -> Self {
        BufferContext {
            method: method.into(),
            state: Mutex::new(Response::default()),
        }
    }

    /// Builder-style parameter preset.
    #[must_use]
    pub fn with_param(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.state.lock().params.insert(name.into(), value.into());
        self
    }

    /// Everything echoed so far.
    pub fn body(&self) -> String {
        self.state.lock().body.clone()
    }

    pub fn status(&self) -> Option<u16> {
        self.state.lock().status
    }

    /// Headers in the order they were set.
    pub fn headers(&self) -> Vec<(String, String)> {
        self.state.lock().headers.clone()
    }

    pub fn response_content_type(&self) -> Option<ContentType> {
        self.state.lock().content_type
    }

    pub fn redirect_location(&self) -> Option<String> {
        self.state.lock().redirect.clone()
    }
}

impl HttpContext for BufferContext {
    fn get(&self, name: &str) -> Option<String> {
        self.state.lock().params.get(name).cloned()
    }

    fn exists(&self, name: &str) -> bool {
        self.state.lock().params.contains_key(name)
    }

    fn set(&self, name: &str, value: &str) {
        self.state
            .lock()
            .params
            .insert(name.to_string(), value.to_string());
    }

    fn unset(&self, name: &str) {
        self.state.lock().params.remove(name);
    }

    fn echo(&self, text: &str) {
        self.state.lock().body.push_str(text);
    }

    fn code(&self, status: u16) {
        self.state.lock().status = Some(status);
    }

    fn header(&self, name: &str, value: &str) {
        self.state
            .lock()
            .headers
            .push((name.to_string(), value.to_string()));
    }

    fn content_type(&self, content_type: ContentType) {
        self.state.lock().content_type = Some(content_type);
    }

    fn redirect(&self, location: &str) {
        let mut state = self.state.lock();
        state.redirect = Some(location.to_string());
        state.status.get_or_insert(302);
    }

    fn method_name(&self) -> String {
        self.method.clone()
    }
}

#[cfg(test)]
mod tests;
