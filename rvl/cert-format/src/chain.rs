/*!
    Certificate chain assembly and parsing.

    A WAD container carries its signing certificates as a plain
    concatenation of records; the header declares the total byte length up
    front. Because every record size is fixed by its type tags, the chain
    serializes to an exactly predictable length.
*/

use crate::cert::{Certificate, Reader};
use crate::error::CertError;
use crate::store::{self, CertIssuer};

/**
    An ordered sequence of certificates, leaf issuers chaining up to the CA.

    The standard chains carried by retail and debug WADs hold the CA, TMD,
    and ticket certificates, in that order, totalling 0xA00 bytes.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateChain {
    certificates: Vec<Certificate>,
}

impl CertificateChain {
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }

    /// The standard retail chain: CA00000001, CP00000004, XS00000003.
    pub fn retail() -> Self {
        Self::standard([
            CertIssuer::RetailCa,
            CertIssuer::RetailTmd,
            CertIssuer::RetailTicket,
        ])
    }

    /// The standard debug chain: CA00000002, CP00000007, XS00000006.
    pub fn debug() -> Self {
        Self::standard([
            CertIssuer::DebugCa,
            CertIssuer::DebugTmd,
            CertIssuer::DebugTicket,
        ])
    }

    fn standard(issuers: [CertIssuer; 3]) -> Self {
        let certificates = issuers
            .into_iter()
            .filter_map(|issuer| store::certificate(issuer).ok())
            .cloned()
            .collect();
        Self { certificates }
    }

    /**
        Parse a concatenated certificate chain. Records are consumed back to
        back until the input is exhausted.
    */
    pub fn from_bytes(data: &[u8]) -> Result<Self, CertError> {
        let mut r = Reader::new(data);
        let mut certificates = Vec::new();
        while r.remaining() > 0 {
            certificates.push(Certificate::parse(&mut r)?);
        }
        Ok(Self { certificates })
    }

    /// Concatenation of each record's exact serialized bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.total_size());
        for cert in &self.certificates {
            buf.extend_from_slice(&cert.to_bytes());
        }
        buf
    }

    /**
        Total serialized size in bytes. Always equals `to_bytes().len()`,
        so consumers can pre-allocate without serializing first.
    */
    pub fn total_size(&self) -> usize {
        self.certificates.iter().map(Certificate::size).sum()
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Find a certificate by its full chain name.
    pub fn find(&self, chain_name: &str) -> Option<&Certificate> {
        self.certificates
            .iter()
            .find(|cert| cert.chain_name() == chain_name)
    }
}
