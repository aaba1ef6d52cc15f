/*!
    The built-in certificate table and issuer resolution.

    The platform ships exactly nine table slots: an invalid sentinel, the
    unsigned root, three retail certificates, and four debug certificates.
    The table is constructed once, before first use, and never mutated;
    lookups hand out shared references for the life of the process.
*/

use std::sync::LazyLock;

use crate::cert::{Certificate, KeyType, SignatureType, record_size};
use crate::data;
use crate::error::CertError;

const RSA_EXPONENT: u32 = 0x0001_0001;

/**
    Symbolic index of a certificate in the built-in table.

    `Unknown` is the invalid sentinel and never maps to a certificate.
*/
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertIssuer {
    Unknown = 0,
    Root = 1,
    RetailCa = 2,
    RetailTicket = 3,
    RetailTmd = 4,
    DebugCa = 5,
    DebugTicket = 6,
    DebugTmd = 7,
    DebugDev = 8,
}

impl CertIssuer {
    /// The valid (non-sentinel) entries, in table order.
    pub const ALL: [Self; 8] = [
        Self::Root,
        Self::RetailCa,
        Self::RetailTicket,
        Self::RetailTmd,
        Self::DebugCa,
        Self::DebugTicket,
        Self::DebugTmd,
        Self::DebugDev,
    ];

    /// Full chain name of this entry's certificate. `None` for `Unknown`.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Root => Some("Root"),
            Self::RetailCa => Some("Root-CA00000001"),
            Self::RetailTicket => Some("Root-CA00000001-XS00000003"),
            Self::RetailTmd => Some("Root-CA00000001-CP00000004"),
            Self::DebugCa => Some("Root-CA00000002"),
            Self::DebugTicket => Some("Root-CA00000002-XS00000006"),
            Self::DebugTmd => Some("Root-CA00000002-CP00000007"),
            Self::DebugDev => Some("Root-CA00000002-MS00000003"),
        }
    }

    /**
        Resolve an issuer chain name to its table entry.

        The empty name resolves to the root, which is the only certificate
        with no issuer of its own. Matching is exact and case-sensitive over
        whole names; `Root-CA00000001` never matches
        `Root-CA00000001-XS00000003` or vice versa. An absent name is an
        argument error, an unmatched one a routine not-found result.
    */
    pub fn from_name(name: Option<&str>) -> Result<Self, CertError> {
        let Some(name) = name else {
            return Err(CertError::MissingIssuerName);
        };
        if name.is_empty() {
            return Ok(Self::Root);
        }
        Self::ALL
            .into_iter()
            .find(|issuer| issuer.name() == Some(name))
            .ok_or_else(|| CertError::UnknownIssuer(name.to_owned()))
    }
}

impl TryFrom<u32> for CertIssuer {
    type Error = CertError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Root),
            2 => Ok(Self::RetailCa),
            3 => Ok(Self::RetailTicket),
            4 => Ok(Self::RetailTmd),
            5 => Ok(Self::DebugCa),
            6 => Ok(Self::DebugTicket),
            7 => Ok(Self::DebugTmd),
            8 => Ok(Self::DebugDev),
            _ => Err(CertError::InvalidEnumValue {
                kind: "CertIssuer",
                value,
            }),
        }
    }
}

// Serialized sizes, indexed by table position minus one. Must stay in
// lockstep with CERTIFICATES below.
const CERT_SIZES: [usize; 8] = [
    record_size(SignatureType::Unsigned, KeyType::Rsa4096),
    record_size(SignatureType::Rsa4096, KeyType::Rsa2048),
    record_size(SignatureType::Rsa2048, KeyType::Rsa2048),
    record_size(SignatureType::Rsa2048, KeyType::Rsa2048),
    record_size(SignatureType::Rsa4096, KeyType::Rsa2048),
    record_size(SignatureType::Rsa2048, KeyType::Rsa2048),
    record_size(SignatureType::Rsa2048, KeyType::Rsa2048),
    record_size(SignatureType::Rsa2048, KeyType::Ecc),
];

static CERTIFICATES: LazyLock<[Certificate; 8]> = LazyLock::new(|| {
    [
        // Root. Not signed: it is the trust anchor and is never included
        // in the serialized certificate chain.
        Certificate {
            signature_type: SignatureType::Unsigned,
            signature: Vec::new(),
            issuer: String::new(),
            key_type: KeyType::Rsa4096,
            subject: "Root".to_owned(),
            key_id: 0,
            public_key: data::ROOT_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // CA certificate (retail).
        Certificate {
            signature_type: SignatureType::Rsa4096,
            signature: data::RETAIL_CA_SIGNATURE.to_vec(),
            issuer: "Root".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "CA00000001".to_owned(),
            key_id: 0x5BFA_7D5C,
            public_key: data::RETAIL_CA_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // Ticket signing certificate (retail).
        Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: data::RETAIL_TICKET_SIGNATURE.to_vec(),
            issuer: "Root-CA00000001".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "XS00000003".to_owned(),
            key_id: 0xF1B8_9FD1,
            public_key: data::RETAIL_TICKET_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // TMD signing certificate (retail).
        Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: data::RETAIL_TMD_SIGNATURE.to_vec(),
            issuer: "Root-CA00000001".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "CP00000004".to_owned(),
            key_id: 0xF1B8_A064,
            public_key: data::RETAIL_TMD_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // CA certificate (debug).
        Certificate {
            signature_type: SignatureType::Rsa4096,
            signature: data::DEBUG_CA_SIGNATURE.to_vec(),
            issuer: "Root".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "CA00000002".to_owned(),
            key_id: 0x6564_8F2B,
            public_key: data::DEBUG_CA_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // Ticket signing certificate (debug).
        Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: data::DEBUG_TICKET_SIGNATURE.to_vec(),
            issuer: "Root-CA00000002".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "XS00000006".to_owned(),
            key_id: 0xF868_289D,
            public_key: data::DEBUG_TICKET_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // TMD signing certificate (debug).
        Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: data::DEBUG_TMD_SIGNATURE.to_vec(),
            issuer: "Root-CA00000002".to_owned(),
            key_type: KeyType::Rsa2048,
            subject: "CP00000007".to_owned(),
            key_id: 0xF868_28DD,
            public_key: data::DEBUG_TMD_MODULUS.to_vec(),
            exponent: Some(RSA_EXPONENT),
        },
        // Development signing certificate (debug). ECC public key.
        Certificate {
            signature_type: SignatureType::Rsa2048,
            signature: data::DEBUG_DEV_SIGNATURE.to_vec(),
            issuer: "Root-CA00000002".to_owned(),
            key_type: KeyType::Ecc,
            subject: "MS00000003".to_owned(),
            key_id: 0xFCF5_A9BC,
            public_key: data::DEBUG_DEV_PUBLIC_KEY.to_vec(),
            exponent: None,
        },
    ]
});

/**
    Look up a certificate by table entry.

    Fails for `Unknown`, which is the sentinel and holds no certificate.
*/
pub fn certificate(issuer: CertIssuer) -> Result<&'static Certificate, CertError> {
    let index = (issuer as u32 as usize)
        .checked_sub(1)
        .ok_or(CertError::NoSuchCertificate(issuer as u32))?;
    CERTIFICATES
        .get(index)
        .ok_or(CertError::NoSuchCertificate(issuer as u32))
}

/**
    Exact serialized size of a table entry's certificate, in bytes.

    A pure function of the entry's fixed layout, not a measurement; the
    returned values are what [`Certificate::to_bytes`] produces, so chain
    consumers can pre-allocate exactly.
*/
pub fn certificate_size(issuer: CertIssuer) -> Result<usize, CertError> {
    let index = (issuer as u32 as usize)
        .checked_sub(1)
        .ok_or(CertError::NoSuchCertificate(issuer as u32))?;
    CERT_SIZES
        .get(index)
        .copied()
        .ok_or(CertError::NoSuchCertificate(issuer as u32))
}

/// Resolve an issuer chain name and fetch its certificate in one step.
pub fn certificate_from_name(name: &str) -> Result<&'static Certificate, CertError> {
    certificate(CertIssuer::from_name(Some(name))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_serialized_lengths() {
        for issuer in CertIssuer::ALL {
            let cert = certificate(issuer).unwrap();
            let size = certificate_size(issuer).unwrap();
            assert_eq!(cert.to_bytes().len(), size, "{issuer:?}");
            assert_eq!(cert.size(), size, "{issuer:?}");
        }
    }

    #[test]
    fn fixed_sizes() {
        assert_eq!(certificate_size(CertIssuer::Root).unwrap(), 0x300);
        assert_eq!(certificate_size(CertIssuer::RetailCa).unwrap(), 0x400);
        assert_eq!(certificate_size(CertIssuer::RetailTicket).unwrap(), 0x300);
        assert_eq!(certificate_size(CertIssuer::RetailTmd).unwrap(), 0x300);
        assert_eq!(certificate_size(CertIssuer::DebugCa).unwrap(), 0x400);
        assert_eq!(certificate_size(CertIssuer::DebugTicket).unwrap(), 0x300);
        assert_eq!(certificate_size(CertIssuer::DebugTmd).unwrap(), 0x300);
        assert_eq!(certificate_size(CertIssuer::DebugDev).unwrap(), 0x240);
    }

    #[test]
    fn empty_name_resolves_to_root() {
        assert_eq!(CertIssuer::from_name(Some("")).unwrap(), CertIssuer::Root);
    }

    #[test]
    fn absent_name_is_an_argument_error() {
        assert!(matches!(
            CertIssuer::from_name(None),
            Err(CertError::MissingIssuerName)
        ));
    }

    #[test]
    fn full_chain_names_resolve() {
        assert_eq!(
            CertIssuer::from_name(Some("Root-CA00000001-XS00000003")).unwrap(),
            CertIssuer::RetailTicket
        );
        assert_eq!(
            CertIssuer::from_name(Some("Root-CA00000002-MS00000003")).unwrap(),
            CertIssuer::DebugDev
        );
    }

    #[test]
    fn no_prefix_matching() {
        assert!(matches!(
            CertIssuer::from_name(Some("Root-CA00000001-XS00000003-extra")),
            Err(CertError::UnknownIssuer(_))
        ));
        assert!(matches!(
            CertIssuer::from_name(Some("Root-CA0000000")),
            Err(CertError::UnknownIssuer(_))
        ));
    }

    #[test]
    fn name_round_trip() {
        for issuer in CertIssuer::ALL {
            let name = issuer.name().unwrap();
            assert_eq!(CertIssuer::from_name(Some(name)).unwrap(), issuer);
        }
    }

    #[test]
    fn unknown_has_no_certificate() {
        assert!(matches!(
            certificate(CertIssuer::Unknown),
            Err(CertError::NoSuchCertificate(0))
        ));
        assert!(matches!(
            certificate_size(CertIssuer::Unknown),
            Err(CertError::NoSuchCertificate(0))
        ));
    }

    #[test]
    fn index_out_of_enumeration() {
        assert_eq!(CertIssuer::try_from(0).unwrap(), CertIssuer::Unknown);
        assert_eq!(CertIssuer::try_from(8).unwrap(), CertIssuer::DebugDev);
        assert!(matches!(
            CertIssuer::try_from(9),
            Err(CertError::InvalidEnumValue { kind: "CertIssuer", .. })
        ));
        assert!(CertIssuer::try_from(u32::MAX).is_err());
    }

    #[test]
    fn lookup_by_name_matches_lookup_by_index() {
        let by_name = certificate_from_name("Root").unwrap();
        let by_index = certificate(CertIssuer::Root).unwrap();
        assert!(std::ptr::eq(by_name, by_index));
    }

    #[test]
    fn stored_chain_names_match_table_names() {
        for issuer in CertIssuer::ALL {
            let cert = certificate(issuer).unwrap();
            assert_eq!(cert.chain_name(), issuer.name().unwrap(), "{issuer:?}");
        }
    }

    #[test]
    fn referential_closure() {
        let mut unsigned = 0;
        for issuer in CertIssuer::ALL {
            let cert = certificate(issuer).unwrap();
            if cert.issuer.is_empty() {
                unsigned += 1;
            } else {
                // Every issuer field names another certificate in the table.
                let signer = CertIssuer::from_name(Some(&cert.issuer)).unwrap();
                assert_ne!(signer, issuer);
            }
        }
        // Exactly one unsigned record: the root.
        assert_eq!(unsigned, 1);
        assert!(certificate(CertIssuer::Root).unwrap().issuer.is_empty());
    }

    #[test]
    fn retail_ca_serialized_layout() {
        let bytes = certificate(CertIssuer::RetailCa).unwrap().to_bytes();
        assert_eq!(bytes.len(), 0x400);
        assert_eq!(&bytes[..4], &0x0001_0000u32.to_be_bytes());
        // Issuer name sits after the 512-byte signature and 0x3C padding.
        assert_eq!(&bytes[0x240..0x244], b"Root");
        assert_eq!(bytes[0x244], 0);
        assert_eq!(&bytes[0x280..0x284], &1u32.to_be_bytes());
        assert_eq!(&bytes[0x284..0x28E], b"CA00000001");
        assert_eq!(&bytes[0x2C4..0x2C8], &0x5BFA_7D5Cu32.to_be_bytes());
        assert_eq!(bytes[0x2C8], 0xB2);
        assert_eq!(&bytes[0x3C8..0x3CC], &0x0001_0001u32.to_be_bytes());
    }

    #[test]
    fn root_serialized_layout() {
        let bytes = certificate(CertIssuer::Root).unwrap().to_bytes();
        assert_eq!(bytes.len(), 0x300);
        // Unsigned: tag 0, then zero padding up to the (empty) issuer field.
        assert_eq!(&bytes[..0x80], &[0u8; 0x80]);
        assert_eq!(&bytes[0x80..0x84], &0u32.to_be_bytes());
        assert_eq!(&bytes[0x84..0x88], b"Root");
        assert_eq!(bytes[0xC8], 0xF8);
        assert_eq!(&bytes[0x2C8..0x2CC], &0x0001_0001u32.to_be_bytes());
    }

    #[test]
    fn debug_dev_serialized_layout() {
        let bytes = certificate(CertIssuer::DebugDev).unwrap().to_bytes();
        assert_eq!(bytes.len(), 0x240);
        assert_eq!(&bytes[..4], &0x0001_0001u32.to_be_bytes());
        assert_eq!(&bytes[0x140..0x14F], b"Root-CA00000002");
        assert_eq!(&bytes[0x180..0x184], &2u32.to_be_bytes());
        assert_eq!(&bytes[0x184..0x18E], b"MS00000003");
        assert_eq!(&bytes[0x1C4..0x1C8], &0xFCF5_A9BCu32.to_be_bytes());
        // ECC: 60-byte point, no exponent, padded to the end.
        assert_eq!(bytes[0x1C8], 0x00);
        assert_eq!(bytes[0x1C9], 0x8C);
        assert_eq!(&bytes[0x204..], &[0u8; 0x3C]);
    }

    #[test]
    fn store_round_trips_through_bytes() {
        for issuer in CertIssuer::ALL {
            let cert = certificate(issuer).unwrap();
            let parsed = Certificate::from_bytes(&cert.to_bytes()).unwrap();
            assert_eq!(&parsed, cert, "{issuer:?}");
        }
    }
}
