/*!
    The on-disk certificate record layout.

    A certificate is a signature block immediately followed by a public key
    block, with no padding between them. Both block sizes are fixed by their
    type tags, so the total record size is a compile-time function of the
    (signature type, key type) pair. All integers are big-endian and all
    name fields are NUL-terminated, zero-padded fixed-width strings.
*/

use crate::error::CertError;

/// Width of the issuer and subject name fields.
pub const NAME_LEN: usize = 0x40;

/// Zero padding between the signature bytes and the issuer name.
pub const SIGNATURE_PAD_LEN: usize = 0x3C;

/**
    Signature algorithm tag, stored big-endian at the start of a record.

    The root certificate is the trust anchor and is never itself verified,
    so it carries the `Unsigned` variant with no signature bytes at all.
*/
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureType {
    Unsigned = 0x0000_0000,
    Rsa4096 = 0x0001_0000,
    Rsa2048 = 0x0001_0001,
}

impl SignatureType {
    /// Length of the signature bytes themselves.
    pub const fn signature_len(self) -> usize {
        match self {
            Self::Unsigned => 0,
            Self::Rsa4096 => 512,
            Self::Rsa2048 => 256,
        }
    }

    /// Total size of the signature block: tag, signature, padding, issuer.
    pub const fn block_len(self) -> usize {
        4 + self.signature_len() + SIGNATURE_PAD_LEN + NAME_LEN
    }
}

impl TryFrom<u32> for SignatureType {
    type Error = CertError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x0000_0000 => Ok(Self::Unsigned),
            0x0001_0000 => Ok(Self::Rsa4096),
            0x0001_0001 => Ok(Self::Rsa2048),
            _ => Err(CertError::InvalidEnumValue {
                kind: "SignatureType",
                value,
            }),
        }
    }
}

/**
    Public key algorithm tag, stored big-endian at the start of the
    public key block.
*/
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Rsa4096 = 0,
    Rsa2048 = 1,
    Ecc = 2,
}

impl KeyType {
    /// Length of the modulus (RSA) or public point (ECC).
    pub const fn key_len(self) -> usize {
        match self {
            Self::Rsa4096 => 512,
            Self::Rsa2048 => 256,
            Self::Ecc => 60,
        }
    }

    /// Whether the key block carries a 4-byte exponent after the key bytes.
    pub const fn has_exponent(self) -> bool {
        !matches!(self, Self::Ecc)
    }

    /// Zero padding closing the public key block.
    pub const fn trailing_pad_len(self) -> usize {
        match self {
            Self::Rsa4096 | Self::Rsa2048 => 0x34,
            Self::Ecc => 0x3C,
        }
    }

    /// Total size of the public key block: tag, subject, key id, key bytes,
    /// exponent (RSA only), padding.
    pub const fn block_len(self) -> usize {
        let exponent = if self.has_exponent() { 4 } else { 0 };
        4 + NAME_LEN + 4 + self.key_len() + exponent + self.trailing_pad_len()
    }
}

impl TryFrom<u32> for KeyType {
    type Error = CertError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rsa4096),
            1 => Ok(Self::Rsa2048),
            2 => Ok(Self::Ecc),
            _ => Err(CertError::InvalidEnumValue {
                kind: "KeyType",
                value,
            }),
        }
    }
}

/**
    Exact serialized size of a certificate record with the given signature
    and key types.
*/
pub const fn record_size(signature_type: SignatureType, key_type: KeyType) -> usize {
    signature_type.block_len() + key_type.block_len()
}

/**
    A single signing certificate.

    `issuer` is the full chain name of the certificate that signed this one
    (e.g. `Root-CA00000001`), empty only for the unsigned root. `subject` is
    this certificate's own leaf name (e.g. `XS00000003`). `key_id` is an
    opaque field preserved verbatim.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub signature_type: SignatureType,
    pub signature: Vec<u8>,
    pub issuer: String,
    pub key_type: KeyType,
    pub subject: String,
    pub key_id: u32,
    pub public_key: Vec<u8>,
    /// RSA public exponent. `None` for ECC keys.
    pub exponent: Option<u32>,
}

impl Certificate {
    /**
        Parse a certificate record from the start of `data`.

        Trailing bytes beyond the record are ignored.
    */
    pub fn from_bytes(data: &[u8]) -> Result<Self, CertError> {
        let mut r = Reader::new(data);
        Self::parse(&mut r)
    }

    pub(crate) fn parse(r: &mut Reader<'_>) -> Result<Self, CertError> {
        let signature_type = SignatureType::try_from(r.read_u32be()?)?;
        let signature = r.read_bytes(signature_type.signature_len())?.to_vec();
        r.skip(SIGNATURE_PAD_LEN)?;
        let issuer = r.read_name()?;

        let key_type = KeyType::try_from(r.read_u32be()?)?;
        let subject = r.read_name()?;
        let key_id = r.read_u32be()?;
        let public_key = r.read_bytes(key_type.key_len())?.to_vec();
        let exponent = if key_type.has_exponent() {
            Some(r.read_u32be()?)
        } else {
            None
        };
        r.skip(key_type.trailing_pad_len())?;

        Ok(Self {
            signature_type,
            signature,
            issuer,
            key_type,
            subject,
            key_id,
            public_key,
            exponent,
        })
    }

    /**
        Serialize to the exact fixed layout. The output length always equals
        [`Certificate::size`]; short signature or key fields are zero-padded
        to their declared widths.
    */
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.size());

        // Signature block
        buf.extend_from_slice(&(self.signature_type as u32).to_be_bytes());
        let sig_len = self.signature_type.signature_len();
        let take = self.signature.len().min(sig_len);
        buf.extend_from_slice(&self.signature[..take]);
        buf.resize(4 + sig_len + SIGNATURE_PAD_LEN, 0);
        write_name(&mut buf, &self.issuer);

        // Public key block
        let key_start = buf.len();
        buf.extend_from_slice(&(self.key_type as u32).to_be_bytes());
        write_name(&mut buf, &self.subject);
        buf.extend_from_slice(&self.key_id.to_be_bytes());
        let key_len = self.key_type.key_len();
        let take = self.public_key.len().min(key_len);
        buf.extend_from_slice(&self.public_key[..take]);
        buf.resize(key_start + 4 + NAME_LEN + 4 + key_len, 0);
        if self.key_type.has_exponent() {
            buf.extend_from_slice(&self.exponent.unwrap_or(0).to_be_bytes());
        }
        buf.resize(self.size(), 0);

        buf
    }

    /// Serialized record size in bytes.
    pub const fn size(&self) -> usize {
        record_size(self.signature_type, self.key_type)
    }

    /**
        This certificate's full chain name: the issuer chain with the subject
        appended (just the subject for the root, whose issuer is empty).
    */
    pub fn chain_name(&self) -> String {
        if self.issuer.is_empty() {
            self.subject.clone()
        } else {
            format!("{}-{}", self.issuer, self.subject)
        }
    }
}

fn write_name(buf: &mut Vec<u8>, name: &str) {
    let bytes = name.as_bytes();
    // Always leave at least one NUL terminator.
    let take = bytes.len().min(NAME_LEN - 1);
    buf.extend_from_slice(&bytes[..take]);
    buf.resize(buf.len() + (NAME_LEN - take), 0);
}

pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn ensure(&self, n: usize) -> Result<(), CertError> {
        if self.remaining() < n {
            Err(CertError::UnexpectedEof {
                needed: self.pos + n,
                have: self.data.len(),
            })
        } else {
            Ok(())
        }
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CertError> {
        self.ensure(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn skip(&mut self, n: usize) -> Result<(), CertError> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    fn read_u32be(&mut self) -> Result<u32, CertError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a fixed-width NUL-terminated name field.
    fn read_name(&mut self) -> Result<String, CertError> {
        let bytes = self.read_bytes(NAME_LEN)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_type_round_trip() {
        for st in [
            SignatureType::Unsigned,
            SignatureType::Rsa4096,
            SignatureType::Rsa2048,
        ] {
            assert_eq!(SignatureType::try_from(st as u32).unwrap(), st);
        }
    }

    #[test]
    fn signature_type_invalid_value() {
        // ECC signatures exist on the platform but never appear in the
        // certificate store.
        assert!(SignatureType::try_from(0x0001_0002).is_err());
        assert!(SignatureType::try_from(0xFFFF_FFFF).is_err());
    }

    #[test]
    fn key_type_round_trip() {
        for kt in [KeyType::Rsa4096, KeyType::Rsa2048, KeyType::Ecc] {
            assert_eq!(KeyType::try_from(kt as u32).unwrap(), kt);
        }
    }

    #[test]
    fn key_type_invalid_value() {
        assert!(KeyType::try_from(3).is_err());
        assert!(KeyType::try_from(0x0001_0000).is_err());
    }

    #[test]
    fn record_sizes_match_fixed_layouts() {
        assert_eq!(record_size(SignatureType::Unsigned, KeyType::Rsa4096), 0x300);
        assert_eq!(record_size(SignatureType::Rsa4096, KeyType::Rsa2048), 0x400);
        assert_eq!(record_size(SignatureType::Rsa2048, KeyType::Rsa2048), 0x300);
        assert_eq!(record_size(SignatureType::Rsa2048, KeyType::Ecc), 0x240);
    }

    fn sample_cert() -> Certificate {
        Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: vec![0xAB; 256],
            issuer: "Root-CA00000001".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "XS00000099".to_owned(),
            key_id: 0xDEAD_BEEF,
            public_key: vec![0xCD; 256],
            exponent: Some(0x0001_0001),
        }
    }

    #[test]
    fn serialize_layout_offsets() {
        let bytes = sample_cert().to_bytes();
        assert_eq!(bytes.len(), 0x300);

        // Signature block
        assert_eq!(&bytes[..4], &0x0001_0001u32.to_be_bytes());
        assert_eq!(&bytes[4..260], &[0xAB; 256]);
        assert_eq!(&bytes[260..0x140], &[0u8; 0x3C]);
        assert_eq!(&bytes[0x140..0x14F], b"Root-CA00000001");
        assert_eq!(bytes[0x14F], 0);

        // Public key block starts at 0x180
        assert_eq!(&bytes[0x180..0x184], &1u32.to_be_bytes());
        assert_eq!(&bytes[0x184..0x18E], b"XS00000099");
        assert_eq!(&bytes[0x1C4..0x1C8], &0xDEAD_BEEFu32.to_be_bytes());
        assert_eq!(&bytes[0x1C8..0x2C8], &[0xCD; 256]);
        assert_eq!(&bytes[0x2C8..0x2CC], &0x0001_0001u32.to_be_bytes());
        assert_eq!(&bytes[0x2CC..], &[0u8; 0x34]);
    }

    #[test]
    fn parse_round_trip() {
        let cert = sample_cert();
        let parsed = Certificate::from_bytes(&cert.to_bytes()).unwrap();
        assert_eq!(parsed, cert);
    }

    #[test]
    fn parse_unsigned_round_trip() {
        let cert = Certificate {
            signature_type: SignatureType::Unsigned,
            signature: Vec::new(),
            issuer: String::new(),
            key_type: KeyType::Rsa4096,
            subject: "Root".to_owned(),
            key_id: 0,
            public_key: vec![0x11; 512],
            exponent: Some(0x0001_0001),
        };
        let bytes = cert.to_bytes();
        assert_eq!(bytes.len(), 0x300);
        // No signature bytes: padding runs from the tag to the issuer field.
        assert_eq!(&bytes[..4], &[0u8; 4]);
        assert_eq!(&bytes[4..0x40], &[0u8; 0x3C]);
        let parsed = Certificate::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, cert);
    }

    #[test]
    fn parse_ecc_key_has_no_exponent() {
        let cert = Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: vec![0x55; 256],
            issuer: "Root-CA00000002".to_owned(),
            key_type: KeyType::Ecc,
            subject: "MS00000042".to_owned(),
            key_id: 7,
            public_key: vec![0x66; 60],
            exponent: None,
        };
        let bytes = cert.to_bytes();
        assert_eq!(bytes.len(), 0x240);
        let parsed = Certificate::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.exponent, None);
        assert_eq!(parsed, cert);
    }

    #[test]
    fn truncated_record() {
        let bytes = sample_cert().to_bytes();
        let err = Certificate::from_bytes(&bytes[..0x200]).unwrap_err();
        assert!(matches!(err, CertError::UnexpectedEof { .. }));
    }

    #[test]
    fn invalid_signature_tag() {
        let mut bytes = sample_cert().to_bytes();
        bytes[..4].copy_from_slice(&0x0002_0000u32.to_be_bytes());
        let err = Certificate::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, CertError::InvalidEnumValue { kind: "SignatureType", .. }));
    }

    #[test]
    fn chain_name_concatenation() {
        let cert = sample_cert();
        assert_eq!(cert.chain_name(), "Root-CA00000001-XS00000099");

        let mut root_like = sample_cert();
        root_like.issuer = String::new();
        root_like.subject = "Root".to_owned();
        assert_eq!(root_like.chain_name(), "Root");
    }

    #[test]
    fn overlong_name_is_truncated_with_terminator() {
        let mut cert = sample_cert();
        cert.issuer = "X".repeat(100);
        let bytes = cert.to_bytes();
        assert_eq!(bytes.len(), 0x300);
        assert_eq!(bytes[0x140 + NAME_LEN - 1], 0);
    }
}
