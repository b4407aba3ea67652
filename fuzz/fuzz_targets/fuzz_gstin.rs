#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted values must expose a known state code and a 10-char PAN.
        if let Ok(gstin) = gst_invoice::core::validate_gstin_format(s) {
            assert!(gst_invoice::core::gstin::state_name(gstin.state_code()).is_some());
            assert_eq!(gstin.pan().len(), 10);
        }
    }
});
