use std::fmt;

use crate::util::sha1::{DIGEST_LEN, sha1_hash, sha1_state, serialize};
use crate::util::{Result, to_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_string(&self.0))
    }
}

pub trait HashAlgorithm {
    fn name(&self) -> &'static str;

    fn hash_bytes(&self, input: &[u8]) -> Result<String>;

    fn hash_str(&self, input: &str) -> Result<String> {
        self.hash_bytes(input.as_bytes())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1;

impl HashAlgorithm for Sha1 {
    fn name(&self) -> &'static str {
        "sha1"
    }

    fn hash_bytes(&self, input: &[u8]) -> Result<String> {
        sha1_state(input).map(|state| serialize(&state))
    }
}

pub(crate) fn compute(message: &[u8]) -> Result<Digest> {
    sha1_hash(message).map(Digest)
}
