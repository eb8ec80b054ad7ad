//! Fuzz target for folding arbitrary JSON records through every fold mode.
//!
//! Records may carry any shape: missing or non-string tags, foreign types,
//! odd payloads. Every record must come back as an outcome, never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_record_fold
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

const CONFIG: &str = r#"
[unions.Data]
cases = ["None", "Loading", "Loaded"]

[matchers.strict]
type = "Data"
cases = ["None", "Loading"]
mode = "strict"

[matchers.checked]
type = "Data"
cases = ["Loading"]
wildcard = true

[matchers.unchecked]
cases = ["Home", "Loaded"]
mode = "unchecked"
"#;

fuzz_target!(|data: &[u8]| {
    if let Ok(records_text) = std::str::from_utf8(data) {
        let _ = tagfold_app::run_check(tagfold_app::CheckInput {
            config_text: CONFIG,
            records_text,
            overrides: tagfold_settings::Overrides::default(),
        });
    }
});
