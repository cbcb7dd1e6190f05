mod digest;
mod util;

pub use digest::{Digest, HashAlgorithm, Sha1};
pub use util::sha1::{DIGEST_LEN, compress, expand, logical, round_constant, serialize};
pub use util::{BLOCK_LEN, DigestError, Result, chunk, pad};

pub fn digest(message: &[u8]) -> Result<Digest> {
    digest::compute(message)
}

pub fn hash(input: &[u8]) -> Result<String> {
    Sha1.hash_bytes(input)
}
