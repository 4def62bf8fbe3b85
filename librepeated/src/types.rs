// librepeated/src/types.rs

use std::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort,
};
use std::mem::size_of;
use std::str::FromStr;

use derive_more::Display;

use crate::constants::{
    IOC_DIRMASK, IOC_DIRSHIFT, IOC_NRMASK, IOC_NRSHIFT, IOC_SIZEMASK, IOC_SIZESHIFT,
    IOC_TYPEMASK, IOC_TYPESHIFT,
};
use crate::Error;

/// Transfer direction of a control call, as seen from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// No payload
    #[display(fmt = "none")]
    None,
    /// Caller to device
    #[display(fmt = "write")]
    Write,
    /// Device to caller
    #[display(fmt = "read")]
    Read,
    /// Payload in both directions
    #[display(fmt = "read/write")]
    ReadWrite,
}

impl Direction {
    /// Value of the two-bit direction field.
    pub const fn bits(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Write => 1,
            Self::Read => 2,
            Self::ReadWrite => 3,
        }
    }

    /// Interpret the low two bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & IOC_DIRMASK {
            0 => Self::None,
            1 => Self::Write,
            2 => Self::Read,
            _ => Self::ReadWrite,
        }
    }

    /// Whether the call carries a payload (and therefore a non-zero size).
    pub fn has_payload(self) -> bool {
        self != Self::None
    }
}

/// Named C primitive whose byte width becomes the size field of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    /// `char`
    #[display(fmt = "byte")]
    Byte,
    /// `signed char`
    #[display(fmt = "signed byte")]
    SignedByte,
    /// `unsigned char`
    #[display(fmt = "unsigned byte")]
    UnsignedByte,
    /// `short`
    #[display(fmt = "short")]
    Short,
    /// `unsigned short`
    #[display(fmt = "unsigned short")]
    UnsignedShort,
    /// `int`
    #[display(fmt = "int")]
    Int,
    /// `unsigned int`
    #[display(fmt = "unsigned int")]
    UnsignedInt,
    /// `long`
    #[display(fmt = "long")]
    Long,
    /// `unsigned long`
    #[display(fmt = "unsigned long")]
    UnsignedLong,
    /// `long long`
    #[display(fmt = "long long")]
    LongLong,
    /// `unsigned long long`
    #[display(fmt = "unsigned long long")]
    UnsignedLongLong,
}

impl PrimitiveType {
    /// Every entry of the size table
    pub const ALL: [Self; 11] = [
        Self::Byte,
        Self::SignedByte,
        Self::UnsignedByte,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
    ];

    /// Platform byte width of the type.
    pub const fn size(self) -> u32 {
        let bytes = match self {
            Self::Byte => size_of::<c_char>(),
            Self::SignedByte => size_of::<c_schar>(),
            Self::UnsignedByte => size_of::<c_uchar>(),
            Self::Short => size_of::<c_short>(),
            Self::UnsignedShort => size_of::<c_ushort>(),
            Self::Int => size_of::<c_int>(),
            Self::UnsignedInt => size_of::<c_uint>(),
            Self::Long => size_of::<c_long>(),
            Self::UnsignedLong => size_of::<c_ulong>(),
            Self::LongLong => size_of::<c_longlong>(),
            Self::UnsignedLongLong => size_of::<c_ulonglong>(),
        };
        bytes as u32
    }
}

impl FromStr for PrimitiveType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.to_string() == name)
            .ok_or_else(|| Error::UnknownPrimitiveType(name.to_string()))
    }
}

/// Wire-level control call identifier (32 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:#010x}", _0)]
pub struct Opcode(u32);

impl Opcode {
    /// Wrap a raw opcode word.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw opcode word.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Bits 31..30
    pub const fn direction(&self) -> Direction {
        Direction::from_bits(self.0 >> IOC_DIRSHIFT)
    }

    /// Bits 29..16
    pub const fn size(&self) -> u32 {
        (self.0 >> IOC_SIZESHIFT) & IOC_SIZEMASK
    }

    /// Bits 15..8
    pub const fn family_tag(&self) -> u8 {
        ((self.0 >> IOC_TYPESHIFT) & IOC_TYPEMASK) as u8
    }

    /// Bits 7..0
    pub const fn sequence(&self) -> u8 {
        ((self.0 >> IOC_NRSHIFT) & IOC_NRMASK) as u8
    }
}

impl From<Opcode> for u32 {
    fn from(op: Opcode) -> Self {
        op.0
    }
}

/// Logical identity of a control call. Fields are kept as raw integers so
/// out-of-range values reach the encoder and are reported there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandDescriptor {
    /// Payload direction
    pub direction: Direction,
    /// Device family identifier (8 bits)
    pub family_tag: u32,
    /// Operation index within the family (8 bits)
    pub sequence: u32,
    /// Payload byte width (14 bits); ignored for `Direction::None`
    pub size: u32,
}

impl CommandDescriptor {
    /// Build a descriptor without validating it; `encode` checks ranges.
    pub const fn new(direction: Direction, family_tag: u32, sequence: u32, size: u32) -> Self {
        Self {
            direction,
            family_tag,
            sequence,
            size,
        }
    }
}
