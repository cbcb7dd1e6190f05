use tracing::{debug, trace};

use crate::util::{BLOCK_LEN, Result, chunk, from_ints, pad, to_ints};

pub const DIGEST_LEN: usize = 20;

pub(crate) type State = [u32; 5];

const H: State = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

const ROUNDS: usize = 80;
const ROUNDS_PER_STAGE: usize = 20;

type Logical = fn(u32, u32, u32) -> u32;

fn choose(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | ((!b) & d)
}

fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

fn majority(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

const LOGICAL: [Logical; ROUNDS / ROUNDS_PER_STAGE] = [choose, parity, majority, parity];
const K: [u32; ROUNDS / ROUNDS_PER_STAGE] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// The logical function applied in round `t`.
///
/// # Panics
///
/// Panics if `t` is not in `0..80`.
pub fn logical(t: usize, b: u32, c: u32, d: u32) -> u32 {
    LOGICAL[t / ROUNDS_PER_STAGE](b, c, d)
}

/// The additive constant of round `t`.
///
/// # Panics
///
/// Panics if `t` is not in `0..80`.
pub fn round_constant(t: usize) -> u32 {
    K[t / ROUNDS_PER_STAGE]
}

pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
    let mut w: [u32; ROUNDS] = to_ints::<ROUNDS>(block);
    for i in 16..ROUNDS {
        w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
    }
    w
}

pub fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    let w = expand(block);

    let worked = w.iter().enumerate().fold(*state, |[a, b, c, d, e], (t, &word)| {
        let temp = a.rotate_left(5)
                         .wrapping_add(logical(t, b, c, d))
                         .wrapping_add(e)
                         .wrapping_add(round_constant(t))
                         .wrapping_add(word);
        [temp, a, b.rotate_left(30), c, d]
    });

    for (h, v) in state.iter_mut().zip(worked) {
        *h = h.wrapping_add(v);
    }
}

pub fn serialize(state: &[u32; 5]) -> String {
    state.iter().map(|word| format!("{word:08x}")).collect::<Vec<_>>().join("")
}

pub(crate) fn sha1_state(bytes: &[u8]) -> Result<State> {
    let message = pad(bytes)?;
    let mut state = H;
    let mut num_blocks = 0usize;

    for (i, block) in chunk(&message)?.enumerate() {
        trace!(block = i, "compressing block");
        compress(&mut state, block);
        num_blocks += 1;
    }

    debug!(input_len = bytes.len(), num_blocks, "computed sha1 state");
    Ok(state)
}

pub fn sha1_hash(bytes: &[u8]) -> Result<[u8; DIGEST_LEN]> {
    sha1_state(bytes).map(|state| from_ints(&state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_round(t: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
        match t {
            0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
            20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
            _ => (b ^ c ^ d, 0xCA62C1D6),
        }
    }

    #[test]
    fn round_tables_match_fips_180_4() {
        let inputs = [
            (0x00000000, 0x00000000, 0x00000000),
            (0xffffffff, 0x00000000, 0xffffffff),
            (0xEFCDAB89, 0x98BADCFE, 0x10325476),
            (0x12345678, 0x9abcdef0, 0x0f0f0f0f),
        ];
        for t in 0..ROUNDS {
            for &(b, c, d) in &inputs {
                let (f, k) = reference_round(t, b, c, d);
                assert_eq!(logical(t, b, c, d), f, "logical function of round {t}");
                assert_eq!(round_constant(t), k, "constant of round {t}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn round_constant_out_of_range() {
        round_constant(ROUNDS);
    }

    #[test]
    fn expand_abc_block() {
        let padded = pad(b"abc").unwrap();
        let block: &[u8; BLOCK_LEN] = padded.as_slice().try_into().unwrap();
        let w = expand(block);
        assert_eq!(w[0], 0x61626380);
        assert!(w[1..15].iter().all(|&word| word == 0));
        assert_eq!(w[15], 0x00000018);
        assert_eq!(w[16], 0xC2C4C700);
        for t in 16..ROUNDS {
            assert_eq!(w[t], (w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16]).rotate_left(1));
        }
    }

    #[test]
    fn compress_single_block() {
        let padded = pad(b"abc").unwrap();
        let block: &[u8; BLOCK_LEN] = padded.as_slice().try_into().unwrap();
        let mut state = H;
        compress(&mut state, block);
        assert_eq!(state, [0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]);
    }

    #[test]
    fn serialize_keeps_leading_zeros() {
        let state = [0x00000001, 0x00000000, 0x00000abc, 0x00000010, 0xffffffff];
        let hex = serialize(&state);
        assert_eq!(hex, "000000010000000000000abc00000010ffffffff");
        assert_eq!(hex.len(), 2 * DIGEST_LEN);
    }

    #[test]
    fn serialize_matches_byte_rendering() {
        let state = sha1_state(b"abc").unwrap();
        assert_eq!(serialize(&state), crate::util::to_string(&sha1_hash(b"abc").unwrap()));
    }

    #[test]
    fn empty_message_digest() {
        assert_eq!(
            sha1_hash(b"").unwrap(),
            [
                0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60,
                0x18, 0x90, 0xaf, 0xd8, 0x07, 0x09
            ]
        );
    }
}
