// librepeated/src/constants.rs
//! Common ioctl layout and device constants used across the crate

/// Width of the sequence (command number) field
pub const IOC_NRBITS: u32 = 8;
/// Width of the family tag (type / magic) field
pub const IOC_TYPEBITS: u32 = 8;
/// Width of the payload size field
pub const IOC_SIZEBITS: u32 = 14;
/// Width of the direction field
pub const IOC_DIRBITS: u32 = 2;

/// Mask of the sequence field (after shifting)
pub const IOC_NRMASK: u32 = (1 << IOC_NRBITS) - 1;
/// Mask of the family tag field
pub const IOC_TYPEMASK: u32 = (1 << IOC_TYPEBITS) - 1;
/// Mask of the size field
pub const IOC_SIZEMASK: u32 = (1 << IOC_SIZEBITS) - 1;
/// Mask of the direction field
pub const IOC_DIRMASK: u32 = (1 << IOC_DIRBITS) - 1;

/// Bit offset of the sequence field
pub const IOC_NRSHIFT: u32 = 0;
/// Bit offset of the family tag field
pub const IOC_TYPESHIFT: u32 = IOC_NRSHIFT + IOC_NRBITS;
/// Bit offset of the size field
pub const IOC_SIZESHIFT: u32 = IOC_TYPESHIFT + IOC_TYPEBITS;
/// Bit offset of the direction field
pub const IOC_DIRSHIFT: u32 = IOC_SIZESHIFT + IOC_SIZEBITS;

/// Family tag of the repeating-pattern device: `'r'`
pub const REPEATED_MAGIC: u8 = b'r';

/// Sequence number of the set-pattern control call
pub const SET_PATTERN_NR: u8 = 0;
/// Sequence number of the reset control call
pub const RESET_NR: u8 = 1;

/// Device node the driver registers under
pub const DEFAULT_DEVICE_PATH: &str = "/dev/repeated";

/// Environment variable overriding the device node path
pub const ENV_DEVICE_PATH: &str = "REPEATED_DEVICE";
/// Environment variable overriding the family tag (a single character or a
/// number such as `0x72`)
pub const ENV_FAMILY_TAG: &str = "REPEATED_FAMILY_TAG";

/// Largest buffer a single bulk read on a device node allocates
pub const MAX_READ_CHUNK: usize = 64 * 1024;
