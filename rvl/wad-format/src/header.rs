/*!
    WAD header parsing and serialization.

    All fields are big-endian. The standard header and the BroadOn variant
    are both 32 bytes and both start with the header size; they are told
    apart by the type field, which in a BroadOn header is a data offset
    instead.
*/

use rvl_cert_format::chain::CertificateChain;

use crate::error::WadError;

/// Both header layouts are exactly this long.
pub const HEADER_SIZE: usize = 0x20;

/// Serialized ticket size, fixed across the platform.
pub const TICKET_SIZE: u32 = 0x2A4;

/**
    WAD type tag: two ASCII characters followed by two NUL bytes.
*/
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WadType {
    /// 'Is': installable title.
    Installable = 0x4973_0000,
    /// 'ib': boot2.
    Boot2 = 0x6962_0000,
    /// 'Bk': backup (data left on an SD card).
    Backup = 0x426B_0000,
}

impl TryFrom<u32> for WadType {
    type Error = WadError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x4973_0000 => Ok(Self::Installable),
            0x6962_0000 => Ok(Self::Boot2),
            0x426B_0000 => Ok(Self::Backup),
            _ => Err(WadError::InvalidType(value)),
        }
    }
}

/**
    Standard WAD header. Sections follow the header in declared order, each
    aligned to 64 bytes.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WadHeader {
    pub wad_type: WadType,
    pub cert_chain_size: u32,
    pub crl_size: u32,
    pub ticket_size: u32,
    pub tmd_size: u32,
    pub data_size: u32,
    pub meta_size: u32,
}

/**
    BroadOn WAD header. Sections are not 64-byte aligned in this format,
    and the content data lives at an explicit offset.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwfHeader {
    pub data_offset: u32,
    pub cert_chain_size: u32,
    pub ticket_size: u32,
    pub tmd_size: u32,
    pub meta_size: u32,
    pub meta_cid: u32,
    pub crl_size: u32,
}

/// A parsed WAD header of either layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadFormat {
    Standard(WadHeader),
    BroadOn(BwfHeader),
}

fn read_u32be(data: &[u8], offset: usize) -> Result<u32, WadError> {
    if offset + 4 > data.len() {
        return Err(WadError::UnexpectedEof {
            needed: offset + 4,
            have: data.len(),
        });
    }
    Ok(u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

fn check_header_size(data: &[u8]) -> Result<(), WadError> {
    let header_size = read_u32be(data, 0x00)?;
    if header_size != HEADER_SIZE as u32 {
        return Err(WadError::InvalidHeaderSize(header_size));
    }
    Ok(())
}

impl WadHeader {
    pub fn from_bytes(data: &[u8]) -> Result<Self, WadError> {
        check_header_size(data)?;
        let wad_type = WadType::try_from(read_u32be(data, 0x04)?)?;
        Ok(Self {
            wad_type,
            cert_chain_size: read_u32be(data, 0x08)?,
            crl_size: read_u32be(data, 0x0C)?,
            ticket_size: read_u32be(data, 0x10)?,
            tmd_size: read_u32be(data, 0x14)?,
            data_size: read_u32be(data, 0x18)?,
            meta_size: read_u32be(data, 0x1C)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0x00..0x04].copy_from_slice(&(HEADER_SIZE as u32).to_be_bytes());
        buf[0x04..0x08].copy_from_slice(&(self.wad_type as u32).to_be_bytes());
        buf[0x08..0x0C].copy_from_slice(&self.cert_chain_size.to_be_bytes());
        buf[0x0C..0x10].copy_from_slice(&self.crl_size.to_be_bytes());
        buf[0x10..0x14].copy_from_slice(&self.ticket_size.to_be_bytes());
        buf[0x14..0x18].copy_from_slice(&self.tmd_size.to_be_bytes());
        buf[0x18..0x1C].copy_from_slice(&self.data_size.to_be_bytes());
        buf[0x1C..0x20].copy_from_slice(&self.meta_size.to_be_bytes());
        buf
    }

    /**
        Check the declared certificate chain size against an assembled
        chain. Chain record sizes are exact, so this is an equality check,
        not a bound.
    */
    pub fn check_cert_chain(&self, chain: &CertificateChain) -> Result<(), WadError> {
        let actual = chain.total_size();
        if self.cert_chain_size as usize != actual {
            return Err(WadError::CertChainSizeMismatch {
                declared: self.cert_chain_size,
                actual,
            });
        }
        Ok(())
    }
}

impl BwfHeader {
    pub fn from_bytes(data: &[u8]) -> Result<Self, WadError> {
        check_header_size(data)?;
        Ok(Self {
            data_offset: read_u32be(data, 0x04)?,
            cert_chain_size: read_u32be(data, 0x08)?,
            ticket_size: read_u32be(data, 0x0C)?,
            tmd_size: read_u32be(data, 0x10)?,
            meta_size: read_u32be(data, 0x14)?,
            meta_cid: read_u32be(data, 0x18)?,
            crl_size: read_u32be(data, 0x1C)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0x00..0x04].copy_from_slice(&(HEADER_SIZE as u32).to_be_bytes());
        buf[0x04..0x08].copy_from_slice(&self.data_offset.to_be_bytes());
        buf[0x08..0x0C].copy_from_slice(&self.cert_chain_size.to_be_bytes());
        buf[0x0C..0x10].copy_from_slice(&self.ticket_size.to_be_bytes());
        buf[0x10..0x14].copy_from_slice(&self.tmd_size.to_be_bytes());
        buf[0x14..0x18].copy_from_slice(&self.meta_size.to_be_bytes());
        buf[0x18..0x1C].copy_from_slice(&self.meta_cid.to_be_bytes());
        buf[0x1C..0x20].copy_from_slice(&self.crl_size.to_be_bytes());
        buf
    }
}

/**
    Detect which header layout `data` carries and parse it.

    A BroadOn header has no type tag, so detection follows the original
    format note: an invalid type field combined with the fixed ticket size
    at the BroadOn ticket-size offset identifies the variant.
*/
pub fn detect(data: &[u8]) -> Result<WadFormat, WadError> {
    check_header_size(data)?;
    let type_field = read_u32be(data, 0x04)?;
    match WadType::try_from(type_field) {
        Ok(_) => Ok(WadFormat::Standard(WadHeader::from_bytes(data)?)),
        Err(err) => {
            if read_u32be(data, 0x0C)? == TICKET_SIZE {
                Ok(WadFormat::BroadOn(BwfHeader::from_bytes(data)?))
            } else {
                Err(err)
            }
        }
    }
}
