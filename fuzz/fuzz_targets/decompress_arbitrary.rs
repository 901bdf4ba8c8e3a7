#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the slice decoder: any outcome is fine as
    // long as it neither panics nor writes outside the destination.
    let mut out = vec![0u8; 1 << 16];
    let _ = zyphrax::decompress(data, &mut out);
});
