#![no_main]

use libfuzzer_sys::fuzz_target;
use rustknx_core::types::DateTime;

fuzz_target!(|data: &[u8]| {
    if let Ok(dt) = DateTime::from_bytes(data) {
        assert!(dt.is_valid());
        let again = DateTime::from_bytes(&dt.to_bytes()).expect("re-encoded value must decode");
        assert_eq!(again, dt);
        let _ = dt.to_string();
    }
});
