use bundlescope::parsers::bundle::count_exports;
use bundlescope::parsers::{BundleParser, ImportRecord};

#[test]
fn extracts_minified_imports_in_order() {
    let parser = BundleParser::new().unwrap();
    let code = r#"import{a,b}from"react";import{c}from"./x";var q=1;function z(){return q}"#;

    let imports = parser.extract_imports(code);

    assert_eq!(
        imports,
        vec![
            ImportRecord::new("a,b", "react"),
            ImportRecord::new("c", "./x"),
        ]
    );
}

#[test]
fn content_without_imports_yields_nothing() {
    let parser = BundleParser::new().unwrap();
    assert!(parser.extract_imports("").is_empty());
    assert!(parser
        .extract_imports("var a=1;export{a};")
        .is_empty());
}

#[test]
fn whitespace_separated_imports_are_not_recognised() {
    let parser = BundleParser::new().unwrap();
    let code = r#"import { useState } from "react";"#;
    assert!(parser.extract_imports(code).is_empty());
}

#[test]
fn imports_past_the_scan_window_are_ignored() {
    let parser = BundleParser::new().unwrap();
    let code = format!(
        r#"import{{early}}from"a";{}import{{late}}from"b";"#,
        "x".repeat(1200)
    );

    let imports = parser.extract_imports(&code);

    assert_eq!(imports, vec![ImportRecord::new("early", "a")]);
}

#[test]
fn custom_window_limits_the_scan() {
    let parser = BundleParser::with_window(10).unwrap();
    assert_eq!(parser.window(), 10);
    assert!(parser.extract_imports(r#"import{a}from"react";"#).is_empty());
}

#[test]
fn counts_export_statements_across_whole_file() {
    let tail = "y".repeat(5000);
    let code = format!("export{{a}};{tail}export{{b as default}};export{{c}};");
    assert_eq!(count_exports(&code), 3);
    assert_eq!(count_exports("const x = 1; export default x;"), 0);
}

#[test]
fn parse_combines_imports_and_exports() {
    let parser = BundleParser::new().unwrap();
    let result = parser.parse(r#"import{h}from"preact";export{h};"#);
    assert_eq!(result.imports, vec![ImportRecord::new("h", "preact")]);
    assert_eq!(result.export_count, 1);
}
