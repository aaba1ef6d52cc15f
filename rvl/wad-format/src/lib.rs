/*!
    Wii WAD container header formats.

    A WAD wraps a certificate chain, ticket, TMD, and content data behind a
    32-byte header that declares each section's size. Two header layouts
    exist: the standard format and the BroadOn variant used by some
    factory/update images.
*/

mod error;

pub mod header;

pub use self::error::WadError;
