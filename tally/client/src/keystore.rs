use {
    crate::SigningKey,
    aes_gcm::{AeadCore, Aes256Gcm, Key, KeyInit, aead::Aead},
    anyhow::{anyhow, bail},
    pbkdf2::pbkdf2_hmac,
    rand::{Rng, rngs::OsRng},
    serde::{Deserialize, Serialize},
    sha2::Sha256,
    std::{fs, path::Path},
    tally_types::{Binary, ByteArray, JsonDeExt, JsonSerExt},
};

const SECP256K1_COMPRESSED_PUBKEY_LEN: usize = 33;
const PBKDF2_ITERATIONS: u32 = 600_000;
const PBKDF2_SALT_LEN: usize = 16;
const PBKDF2_KEY_LEN: usize = 32;
const AES256GCM_NONCE_LEN: usize = 12;

/// Data structure for encrypting a 32-byte private key before saving on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keystore {
    pub pk: ByteArray<SECP256K1_COMPRESSED_PUBKEY_LEN>,
    pub salt: ByteArray<PBKDF2_SALT_LEN>,
    pub nonce: ByteArray<AES256GCM_NONCE_LEN>,
    pub ciphertext: Binary,
}

impl Keystore {
    /// Read and decrypt a keystore file, returning the raw private key.
    pub fn from_file<F, P>(filename: F, password: P) -> anyhow::Result<[u8; 32]>
    where
        F: AsRef<Path>,
        P: AsRef<[u8]>,
    {
        // read keystore file
        let keystore_str = fs::read_to_string(filename)?;
        let keystore: Keystore = keystore_str.deserialize_json()?;

        keystore.decrypt(password)
    }

    /// Decrypt the private key held in this keystore.
    pub fn decrypt<P>(&self, password: P) -> anyhow::Result<[u8; 32]>
    where
        P: AsRef<[u8]>,
    {
        // recover encryption key from password and salt
        let mut password_hash = [0u8; PBKDF2_KEY_LEN];
        pbkdf2_hmac::<Sha256>(
            password.as_ref(),
            &self.salt,
            PBKDF2_ITERATIONS,
            &mut password_hash,
        );

        // decrypt the private key
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&password_hash));

        cipher
            .decrypt(self.nonce.as_ref().into(), self.ciphertext.as_ref())?
            .try_into()
            .map_err(|bytes: Vec<u8>| {
                anyhow!(
                    "incorrect private key length! expecting: 32, got: {}",
                    bytes.len()
                )
            })
    }

    /// Encrypt a key and save it to a file.
    pub fn write_to_file<F, P>(
        sk: &SigningKey,
        filename: F,
        password: P,
    ) -> anyhow::Result<Self>
    where
        F: AsRef<Path>,
        P: AsRef<[u8]>,
    {
        // generate encryption key
        let mut salt = [0u8; PBKDF2_SALT_LEN];
        OsRng.fill(&mut salt);
        let mut password_hash = [0u8; PBKDF2_KEY_LEN];
        pbkdf2_hmac::<Sha256>(
            password.as_ref(),
            &salt,
            PBKDF2_ITERATIONS,
            &mut password_hash,
        );

        // encrypt the private key
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&password_hash));
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher.encrypt(&nonce, sk.private_key().as_ref())?;

        // write keystore to file
        let keystore = Keystore {
            pk: sk.public_key().into(),
            salt: salt.into(),
            nonce: nonce.as_slice().try_into()?,
            ciphertext: ciphertext.into(),
        };
        let keystore_str = keystore.to_json_string_pretty()?;
        fs::write(filename, keystore_str.as_bytes())?;

        Ok(keystore)
    }
}

impl SigningKey {
    /// Read and decrypt a keystore file, recovering the signing key.
    pub fn from_file<F, P>(filename: F, password: P) -> anyhow::Result<Self>
    where
        F: AsRef<Path>,
        P: AsRef<[u8]>,
    {
        let keystore_str = fs::read_to_string(filename)?;
        let keystore: Keystore = keystore_str.deserialize_json()?;

        let sk = Self::from_bytes(keystore.decrypt(password)?)?;

        // The stored public key isn't covered by the AES-GCM authentication
        // tag, so check it against the decrypted private key.
        if ByteArray::from_inner(sk.public_key()) != keystore.pk {
            bail!("public key in keystore doesn't match the private key");
        }

        Ok(sk)
    }

    /// Encrypt this key and save it to a keystore file.
    pub fn write_to_file<F, P>(&self, filename: F, password: P) -> anyhow::Result<Keystore>
    where
        F: AsRef<Path>,
        P: AsRef<[u8]>,
    {
        Keystore::write_to_file(self, filename, password)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, tally_types::ResultExt};

    #[test]
    fn keystore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("test-key.json");

        let sk = SigningKey::new_random();
        let keystore = sk.write_to_file(&filename, "123").unwrap();

        assert_eq!(keystore.pk, sk.public_key().into());

        let recovered = SigningKey::from_file(&filename, "123").unwrap();
        assert_eq!(recovered.private_key(), sk.private_key());
    }

    #[test]
    fn keystore_rejects_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("test-key.json");

        let sk = SigningKey::new_random();
        sk.write_to_file(&filename, "123").unwrap();

        // AES-GCM authentication fails, so the key must not be recoverable.
        SigningKey::from_file(&filename, "456").should_fail();
    }

    #[test]
    fn keystore_rejects_mismatched_public_key() {
        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("test-key.json");

        let sk = SigningKey::new_random();
        let mut keystore = sk.write_to_file(&filename, "123").unwrap();

        // Swap in another key's public key and write the file back.
        keystore.pk = SigningKey::new_random().public_key().into();
        fs::write(&filename, keystore.to_json_string_pretty().unwrap()).unwrap();

        SigningKey::from_file(&filename, "123")
            .should_fail_with_error("public key in keystore doesn't match");
    }
}
