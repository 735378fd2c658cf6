#![no_main]

use libfuzzer_sys::fuzz_target;
use standup_git::parse_log_output;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        for commit in parse_log_output(raw) {
            assert!(commit.hash.chars().count() <= 8);
            assert_eq!(commit.message, commit.message.trim());
        }
    }
});
