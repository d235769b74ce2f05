#![no_main]
use libfuzzer_sys::fuzz_target;
use logsetup::fmt::{FormatTemplate, FormatValues};

fuzz_target!(|data: &str| {
    // Must not panic on any template string, width specs included
    let template = FormatTemplate::parse(data);

    let values = FormatValues::new()
        .timestamp("2025-01-01 00:00:00,000")
        .level("SUCCESS")
        .caller("main")
        .msg("test")
        .target("fuzz")
        .rank("35");
    let _ = template.render(&values);
});
