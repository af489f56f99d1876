//! RSA key secrets.
//!
//! Both key types expect a base64 encoded PEM block. Decoding runs base64,
//! then PEM, then the ASN.1 parse; the key is only stored once every stage
//! has succeeded.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::DecodeError;
use crate::secret::{find, Base, KeyOverride, Secret, SecretBag};

const PUBLIC_KEY: &str = "public_key";
const PRIVATE_KEY: &str = "private_key";

/// RSA public key, parsed from a PKIX (`PUBLIC KEY`) PEM block.
#[derive(Default)]
pub struct PublicKeySecret {
    pub(crate) base: Base,
    pub key: Option<RsaPublicKey>,
}

impl PublicKeySecret {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: Base::new(id),
            key: None,
        }
    }
}

impl Secret for PublicKeySecret {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn decode(&mut self, bag: &SecretBag) -> Result<(), DecodeError> {
        let der = pem_contents(bag, PUBLIC_KEY)?;
        let key = RsaPublicKey::from_public_key_der(&der)
            .map_err(|e| DecodeError::KeyParse(format!("public key: {e}")))?;
        self.key = Some(key);
        Ok(())
    }

    fn key_override(&self) -> KeyOverride {
        KeyOverride::AtMostOne
    }
}

impl fmt::Debug for PublicKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKeySecret")
            .field("id", &self.base.id())
            .field("key", &self.key)
            .finish()
    }
}

/// RSA private key, parsed as PKCS#1 (`RSA PRIVATE KEY`) or, failing that,
/// PKCS#8 (`PRIVATE KEY`).
#[derive(Default)]
pub struct PrivateKeySecret {
    pub(crate) base: Base,
    pub key: Option<RsaPrivateKey>,
}

impl PrivateKeySecret {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: Base::new(id),
            key: None,
        }
    }
}

impl Secret for PrivateKeySecret {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn decode(&mut self, bag: &SecretBag) -> Result<(), DecodeError> {
        let der = pem_contents(bag, PRIVATE_KEY)?;
        let key = match RsaPrivateKey::from_pkcs1_der(&der) {
            Ok(key) => key,
            Err(_) => RsaPrivateKey::from_pkcs8_der(&der)
                .map_err(|e| DecodeError::KeyParse(format!("private key: {e}")))?,
        };
        self.key = Some(key);
        Ok(())
    }

    fn key_override(&self) -> KeyOverride {
        KeyOverride::AtMostOne
    }
}

impl fmt::Debug for PrivateKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeySecret")
            .field("id", &self.base.id())
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Look up the base64 value under `key` and return the DER bytes of its PEM block.
/// Line breaks in the base64 text are ignored.
fn pem_contents(bag: &SecretBag, key: &'static str) -> Result<Zeroizing<Vec<u8>>, DecodeError> {
    let encoded = Zeroizing::new(find(bag, key));
    if encoded.is_empty() {
        return Err(DecodeError::ValueNotFound { key });
    }

    let unwrapped: Zeroizing<Vec<u8>> = Zeroizing::new(
        encoded
            .bytes()
            .filter(|b| !matches!(b, b'\r' | b'\n'))
            .collect(),
    );
    let bytes = Zeroizing::new(STANDARD.decode(unwrapped.as_slice())?);
    let block = pem::parse(bytes.as_slice()).map_err(|e| DecodeError::PemDecode(e.to_string()))?;

    Ok(Zeroizing::new(block.into_contents()))
}
