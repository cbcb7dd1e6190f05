use thiserror::Error;

pub mod sha1;

pub const BLOCK_LEN: usize = 64;

const LENGTH_FIELD_LEN: usize = 8;
// 0x80 marker byte plus the 64-bit length field
const HEADER_LEN: usize = 1 + LENGTH_FIELD_LEN;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("message of {len} bytes is too large: its bit length does not fit in 64 bits")]
    InputTooLarge { len: usize },
    #[error("padded buffer length ({0}) is not a multiple of {BLOCK_LEN}")]
    UnalignedBuffer(usize),
}

pub type Result<T> = std::result::Result<T, DigestError>;

pub fn to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| format!("{byte:02x}")).collect::<Vec<_>>().join("")
}

pub(crate) fn bit_length(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(DigestError::InputTooLarge { len })
}

pub(crate) fn zero_pad_len(len: usize) -> usize {
    (BLOCK_LEN - (len % BLOCK_LEN + HEADER_LEN) % BLOCK_LEN) % BLOCK_LEN
}

pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let message_length = bit_length(message.len())?;
    let zeros = zero_pad_len(message.len());

    let mut padded: Vec<u8> = Vec::with_capacity(message.len() + HEADER_LEN + zeros);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0);
    padded.extend(message_length.to_be_bytes());
    Ok(padded)
}

pub fn chunk(padded: &[u8]) -> Result<impl Iterator<Item = &[u8; BLOCK_LEN]>> {
    if padded.len() % BLOCK_LEN != 0 {
        return Err(DigestError::UnalignedBuffer(padded.len()));
    }
    Ok(padded
        .chunks_exact(BLOCK_LEN)
        .map(|block| <&[u8; BLOCK_LEN]>::try_from(block).unwrap_or_else(|_| unreachable!())))
}

pub(crate) fn to_ints<const N: usize>(block: &[u8; BLOCK_LEN]) -> [u32; N] {
    const { assert!(N >= BLOCK_LEN / 4, "output must hold every word of the block") };
    let mut w: [u32; N] = [0; N];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    w
}

pub(crate) fn from_ints<const M: usize, const N: usize>(ints: &[u32; M]) -> [u8; N] {
    const { assert!(M * 4 == N, "`N` expected to be 4 * `M`") };
    let mut arr: [u8; N] = [0; N];
    for (bytes, word) in arr.chunks_exact_mut(4).zip(ints) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    arr
}
