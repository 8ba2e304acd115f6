use std::fs;

use walkdir::WalkDir;

/// Runs every demo script under `demos/` and checks its output against the
/// sibling `.expected` file, byte for byte.
#[test]
fn demo_scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "cheese"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match cheesepp::interpret(&source) {
            Ok(output) => {
                assert_eq!(output, expected, "Demo {path:?} produced unexpected output");
            },
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
