use {
    bip32::{Mnemonic, PublicKey, XPrv},
    k256::ecdsa::{Signature, signature::DigestSigner},
    rand::rngs::OsRng,
    sha2::{Digest, Sha256},
    tally_types::ByteArray,
};

/// A wrapper over the k256 signing key, providing a handy API for the signing
/// scheme used by Tally accounts: secp256k1 over the SHA-256 digest of the
/// sign doc.
#[derive(Debug)]
pub struct SigningKey {
    inner: k256::ecdsa::SigningKey,
}

impl SigningKey {
    /// Generate a new random private key with the OS RNG.
    pub fn new_random() -> Self {
        Self {
            inner: k256::ecdsa::SigningKey::random(&mut OsRng),
        }
    }

    /// Recover a private key from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> anyhow::Result<Self> {
        Ok(Self {
            inner: k256::ecdsa::SigningKey::from_bytes(&bytes.into())?,
        })
    }

    /// Recover a private key from the given English mnemonic and BIP-44 coin
    /// type.
    ///
    /// Only supports secp256k1, not r1. This is because we use Bitcoin's
    /// BIP-32 library, and Bitcoin only uses k1.
    pub fn from_mnemonic(mnemonic: &Mnemonic, coin_type: usize) -> anyhow::Result<Self> {
        // The `to_seed` function takes a password to generate salt.
        // Here we just use an empty str.
        // For reference, Terra Station and Keplr use an empty string as well:
        // - https://github.com/terra-money/terra.js/blob/v3.1.7/src/key/MnemonicKey.ts#L79
        // - https://github.com/chainapsis/keplr-wallet/blob/b6062a4d24f3dcb15dda063b1ece7d1fbffdbfc8/packages/crypto/src/mnemonic.ts#L63
        let seed = mnemonic.to_seed("");
        let path = format!("m/44'/{coin_type}'/0'/0/0");
        let xprv = XPrv::derive_from_path(&seed, &path.parse()?)?;

        Ok(Self { inner: xprv.into() })
    }

    /// Return the private key as a byte array.
    pub fn private_key(&self) -> [u8; 32] {
        self.inner.to_bytes().into()
    }

    /// Return the compressed public key as a byte array.
    pub fn public_key(&self) -> [u8; 33] {
        self.inner.verifying_key().to_bytes()
    }

    /// Sign the SHA-256 digest of the given bytes.
    pub fn sign(&self, bytes: &[u8]) -> ByteArray<64> {
        let digest = Sha256::new_with_prefix(bytes);
        let signature: Signature = self.inner.sign_digest(digest);

        ByteArray::from_inner(signature.to_bytes().into())
    }
}
