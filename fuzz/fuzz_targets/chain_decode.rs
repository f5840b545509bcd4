#![no_main]

use libfuzzer_sys::fuzz_target;
use delegated_pki::decode_chain_from_slice;

fuzz_target!(|data: &[u8]| {
    // Fuzz the chain decoder with arbitrary input
    let _ = decode_chain_from_slice(data);
});
