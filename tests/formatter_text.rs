use bundlescope::core::BundleReport;
use bundlescope::formatters::TextFormatter;
use bundlescope::parsers::ImportRecord;

fn report(imports: Vec<ImportRecord>, size_bytes: u64) -> BundleReport {
    BundleReport {
        file: "vendor-abc.js".to_string(),
        imports,
        export_count: 4,
        size_bytes,
    }
}

#[test]
fn text_report_layout() {
    let r = report(
        vec![
            ImportRecord::new("a,b", "react"),
            ImportRecord::new("c", "./x"),
        ],
        2048,
    );

    let out = TextFormatter::new().format_to_string(&[r]).unwrap();

    let expected = "=== vendor-abc.js ===\n  from \"react\": a,b\n  from \"./x\": c\n  exports: 4\n  size: 2.0 KB\n\n";
    assert_eq!(out, expected);
}

#[test]
fn long_names_are_truncated_to_exactly_200_chars() {
    let names = (0..100)
        .map(|i| format!("name{i}"))
        .collect::<Vec<_>>()
        .join(",");
    assert!(names.len() > 200);
    let r = report(vec![ImportRecord::new(names.clone(), "lib")], 10);

    let out = TextFormatter::new().format_to_string(&[r]).unwrap();

    let line = out
        .lines()
        .find(|l| l.starts_with("  from \"lib\": "))
        .unwrap();
    let shown = line.trim_start_matches("  from \"lib\": ");
    assert_eq!(shown.len(), 200);
    assert_eq!(shown, &names[..200]);
    assert!(!shown.ends_with("..."));
}

#[test]
fn size_is_rounded_to_one_decimal() {
    let out = TextFormatter::new()
        .format_to_string(&[report(Vec::new(), 1587)])
        .unwrap();
    assert!(out.contains("  size: 1.5 KB\n"));
}

#[test]
fn custom_names_limit() {
    let r = report(vec![ImportRecord::new("abcdef", "m")], 1);
    let out = TextFormatter::new()
        .with_names_limit(3)
        .format_to_string(&[r])
        .unwrap();
    assert!(out.contains("from \"m\": abc\n"));
}

#[test]
fn quarter_kilobyte_sizes_round_up() {
    let formatter = TextFormatter::new();
    for (bytes, expected) in [(256, "0.3"), (1280, "1.3"), (2304, "2.3")] {
        let out = formatter
            .format_to_string(&[report(Vec::new(), bytes)])
            .unwrap();
        assert!(
            out.contains(&format!("  size: {expected} KB\n")),
            "{bytes} bytes rendered as {out:?}"
        );
    }
}
