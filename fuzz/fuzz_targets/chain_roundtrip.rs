#![no_main]

use libfuzzer_sys::fuzz_target;
use delegated_pki::{decode_chain_from_slice, encode_chain_to_vec};

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode to the identical wire bytes.
    if let Ok(request) = decode_chain_from_slice(data) {
        let bytes = encode_chain_to_vec(&request).expect("decoded chain is within caps");
        assert_eq!(bytes, data);
    }
});
