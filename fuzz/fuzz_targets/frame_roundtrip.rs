#![no_main]
use libfuzzer_sys::fuzz_target;

use zyphrax::{compress_to_vec, decompress_to_vec, FrameParams};

fuzz_target!(|data: &[u8]| {
    // Vary level and block size from the input itself so the fuzzer also
    // explores parameter space.
    let level = data.first().copied().unwrap_or(3) as u32 % 8;
    let block_size = 1u32 << (10 + (data.len() % 8));
    let params = FrameParams {
        level,
        block_size,
        checksum: false,
    };

    let frame = match compress_to_vec(data, &params) {
        Ok(f) => f,
        Err(e) => panic!("compression of {} bytes failed: {e}", data.len()),
    };

    let recovered = match decompress_to_vec(&frame) {
        Ok(v) => v,
        // The compressor must never produce a frame it cannot decode.
        Err(e) => panic!(
            "round-trip: decode of self-compressed frame failed: {e} \
             (input {} bytes, frame {} bytes)",
            data.len(),
            frame.len()
        ),
    };

    assert_eq!(
        recovered, data,
        "frame round-trip mismatch: {} bytes in, {} bytes back",
        data.len(),
        recovered.len()
    );
});
