#![no_main]
use libfuzzer_sys::fuzz_target;
use logsetup::{LevelError, normalize_str};

fuzz_target!(|data: &str| {
    match normalize_str(data) {
        Ok(_) | Err(LevelError::InvalidName(_) | LevelError::InvalidType) => {}
    }
});
