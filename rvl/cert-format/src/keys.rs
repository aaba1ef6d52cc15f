/*!
    Common AES-128 keys.

    Title keys in tickets are encrypted with one of these platform-wide
    keys; which one depends on the ticket's key index and whether the title
    is retail, Korean-region retail, or debug-signed.
*/

use core::fmt;

use crate::data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonKey {
    Retail,
    Korean,
    Debug,
}

impl CommonKey {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Retail => "RETAIL",
            Self::Korean => "KOREAN",
            Self::Debug => "DEBUG",
        }
    }

    /// The raw AES-128 key bytes.
    pub const fn bytes(self) -> &'static [u8; 16] {
        match self {
            Self::Retail => &data::RETAIL_COMMON_KEY,
            Self::Korean => &data::KOREAN_COMMON_KEY,
            Self::Debug => &data::DEBUG_COMMON_KEY,
        }
    }
}

impl fmt::Display for CommonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
