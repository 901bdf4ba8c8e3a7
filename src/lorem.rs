//! Deterministic lorem-ipsum generator for tests and benchmarks.
//!
//! Produces text with natural word-frequency skew so compression runs see
//! realistic literal distributions and match structure. Fully seeded: the
//! same `(size, seed)` pair always yields the same bytes.

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Split-mix style step: cheap, well-distributed, and state-free between
/// calls.
#[inline]
fn next_rand(state: &mut u64) -> u32 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (*state >> 33) as u32
}

/// Generate `size` bytes of seeded lorem-ipsum prose.
///
/// Word selection is squared-uniform so early words dominate, giving the
/// skewed symbol frequencies real text has. Sentences are capitalized and
/// terminated every 8–15 words.
pub fn generate(size: usize, seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 16);
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
    let mut words_in_sentence = 0;
    let mut sentence_len = 8;
    let mut capitalize = true;

    while out.len() < size {
        let r = next_rand(&mut state) as u64;
        // Square the draw to skew toward low indices.
        let idx = ((r * r) >> 32) as usize * WORDS.len() >> 32;
        let word = WORDS[idx.min(WORDS.len() - 1)];

        if capitalize {
            let mut chars = word.as_bytes().to_vec();
            chars[0] = chars[0].to_ascii_uppercase();
            out.extend_from_slice(&chars);
            capitalize = false;
        } else {
            out.extend_from_slice(word.as_bytes());
        }

        words_in_sentence += 1;
        if words_in_sentence >= sentence_len {
            out.extend_from_slice(b". ");
            words_in_sentence = 0;
            sentence_len = 8 + (next_rand(&mut state) % 8) as usize;
            capitalize = true;
        } else {
            out.push(b' ');
        }
    }
    out.truncate(size);
    out
}
