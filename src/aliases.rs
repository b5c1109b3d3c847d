// src/aliases.rs
//! Secret wrapper types built on secure-gate
//!
//! Cleartext credentials only ever live inside these wrappers.

use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(Password, String); // Login credential in cleartext
dynamic_alias!(SecureStoreKey, String); // SQLCipher key for the secure database
