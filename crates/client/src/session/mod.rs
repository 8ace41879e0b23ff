//! Session storage
//!
//! Durable, process-surviving storage for the signed-in session: one
//! bearer token and one serialized user record under fixed keys. The
//! public surface ([`SessionStore`]) never raises storage errors — a
//! failing backend reads as a logged-out session.

mod error;
mod keychain;
mod memory;
mod store;

pub use error::KeychainError;
pub use keychain::{Keychain, KeychainBackend};
pub use memory::MemoryBackend;
pub use store::SessionStore;
