/*!
    RVL (Wii) signing certificate format and the built-in trust chains.

    Titles distributed for the platform carry signed metadata (tickets and
    TMDs) whose signatures chain up to a fixed set of signing certificates:
    one root, a retail hierarchy, and a parallel debug hierarchy. This crate
    models the fixed-size big-endian certificate record, holds the complete
    certificate set as immutable process-wide data, and resolves issuer
    chain names to their certificates.
*/

mod data;
mod error;

pub mod cert;
pub mod chain;
pub mod keys;
pub mod store;

pub use self::error::CertError;
