#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode, rebuild the record, check and re-encode without panicking.
        if let Ok(payload) = gst_invoice::core::InvoicePayload::from_json(s) {
            let invoice = gst_invoice::core::Invoice::from(payload);
            let _ = gst_invoice::core::validate_totals(&invoice);
            let _ = invoice.to_payload().to_json();
        }
    }
});
