use super::*;
use pretty_assertions::assert_eq;

#[test]
fn content_type_names() {
    assert_eq!(ContentType::from_name("JSON"), Some(ContentType::Json));
    assert_eq!(ContentType::from_name("IMG"), Some(ContentType::Image));
    assert_eq!(ContentType::from_name("json"), None);
    assert_eq!(ContentType::Json.mime(), "application/json");
}

#[test]
fn buffer_context_tracks_params() {
    let cx = BufferContext::new("GET").with_param("id", "7");
    assert_eq!(cx.get("id"), Some("7".to_string()));
    assert!(cx.exists("id"));
    cx.set("name", "play");
    cx.unset("id");
    assert!(!cx.exists("id"));
    assert_eq!(cx.get("name"), Some("play".to_string()));
    assert_eq!(cx.method_name(), "GET");
}

#[test]
fn buffer_context_records_response() {
    let cx = BufferContext::new("POST");
    cx.echo("a");
    cx.echo("b");
    cx.header("X-Trace", "1");
    cx.content_type(ContentType::Html);
    cx.code(201);
    assert_eq!(cx.body(), "ab");
    assert_eq!(cx.headers(), vec![("X-Trace".to_string(), "1".to_string())]);
    assert_eq!(cx.response_content_type(), Some(ContentType::Html));
    assert_eq!(cx.status(), Some(201));
}

#[test]
fn redirect_defaults_status_to_found() {
    let cx = BufferContext::new("GET");
    cx.redirect("/login");
    assert_eq!(cx.redirect_location().as_deref(), Some("/login"));
    assert_eq!(cx.status(), Some(302));
}

#[test]
fn null_connection_downcasts() {
    let conn: &dyn Connection = &NullConnection;
    assert!(conn.as_any().downcast_ref::<NullConnection>().is_some());
}
