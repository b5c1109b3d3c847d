// src/consts.rs
//! Shared constants — storage keys, defaults, cipher parameters

/// Substitution offset applied by the credential cipher
pub const CIPHER_SHIFT: u8 = 3;

/// Storage key for the JSON array of favorite ids
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key for the JSON array of catalog entries
pub const CATALOG_KEY: &str = "pokemonData";

/// Storage key for the JSON array of selectable type tags
pub const TYPES_KEY: &str = "pokemonTypes";

/// Secure-store key holding the cipher-encoded credential
pub const PASSWORD_KEY: &str = "password";

/// Types offered for new entries when nothing is stored
pub const DEFAULT_TYPES: [&str; 5] = ["Grass", "Fire", "Water", "Electric", "Flying"];

/// Image used for created entries and for entries without a usable image
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

/// Remote catalog endpoint
pub const DEFAULT_ENDPOINT: &str = "https://pokemon-api-nssw.onrender.com/pokemon";

/// Upper bound on a remote fetch unless the caller supplies one
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 8_000;

/// KDF iterations for the SQLCipher secure database
// ~0.1–0.2s on modern hardware
pub const DB_KDF_ITERATIONS: u32 = 256_000;
