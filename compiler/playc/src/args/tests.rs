#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::*;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn defaults_apply_when_only_a_document_is_given() {
    let options = parse_run_args(&argv(&["cart.json"])).unwrap();
    assert_eq!(options, RunOptions::new("cart.json"));
    assert_eq!(options.namespace, DEFAULT_NAMESPACE);
    assert_eq!(options.method, DEFAULT_METHOD);
}

#[test]
fn flags_may_precede_the_document() {
    let options = parse_run_args(&argv(&[
        "--namespace=shop.cart",
        "--method=post",
        "cart.json",
        "--function=checkout",
    ]))
    .unwrap();
    assert_eq!(options.document, PathBuf::from("cart.json"));
    assert_eq!(options.namespace, "shop.cart");
    assert_eq!(options.method, "POST");
    assert_eq!(options.function.as_deref(), Some("checkout"));
}

#[test]
fn params_and_modules_repeat_in_order() {
    let options = parse_run_args(&argv(&[
        "main.json",
        "--param=id=7",
        "--param=q=a=b",
        "--param=empty=",
        "--module=lib.math=math.json",
    ]))
    .unwrap();
    assert_eq!(
        options.params,
        vec![
            ("id".to_string(), "7".to_string()),
            ("q".to_string(), "a=b".to_string()),
            ("empty".to_string(), String::new()),
        ]
    );
    assert_eq!(
        options.modules,
        vec![("lib.math".to_string(), PathBuf::from("math.json"))]
    );
}

#[test]
fn rejects_missing_document() {
    assert_eq!(
        parse_run_args(&argv(&["--method=GET"])),
        Err(ArgsError::MissingDocument)
    );
}

#[test]
fn rejects_unknown_flags_and_extra_positionals() {
    assert_eq!(
        parse_run_args(&argv(&["a.json", "--verbose"])),
        Err(ArgsError::Unexpected("--verbose".to_string()))
    );
    assert_eq!(
        parse_run_args(&argv(&["a.json", "b.json"])),
        Err(ArgsError::Unexpected("b.json".to_string()))
    );
}

#[test]
fn rejects_malformed_pairs() {
    let err = parse_run_args(&argv(&["a.json", "--param=novalue"])).unwrap_err();
    assert_eq!(err.to_string(), "`--param` expects name=value, got `novalue`");

    let err = parse_run_args(&argv(&["a.json", "--module==x.json"])).unwrap_err();
    assert!(matches!(err, ArgsError::Malformed { flag: "--module", .. }));

    let err = parse_run_args(&argv(&["a.json", "--function="])).unwrap_err();
    assert!(matches!(err, ArgsError::Malformed { flag: "--function", .. }));
}
