// librepeated/src/ioctl/codec.rs

use crate::constants::{
    IOC_DIRSHIFT, IOC_NRMASK, IOC_NRSHIFT, IOC_SIZEMASK, IOC_SIZESHIFT, IOC_TYPEMASK,
    IOC_TYPESHIFT,
};
use crate::types::{CommandDescriptor, Direction, Opcode, PrimitiveType};
use crate::{Error, Result};

/// Pack already range-checked fields into an opcode word.
pub(crate) const fn pack(direction: Direction, size: u32, family_tag: u32, sequence: u32) -> u32 {
    (direction.bits() << IOC_DIRSHIFT)
        | (size << IOC_SIZESHIFT)
        | (family_tag << IOC_TYPESHIFT)
        | (sequence << IOC_NRSHIFT)
}

fn check(field: &'static str, value: u32, max: u32) -> Result<u32> {
    if value > max {
        return Err(Error::InvalidDescriptor { field, value, max });
    }
    Ok(value)
}

/// Encode a descriptor into its opcode (`_IOC`).
///
/// The size of a `Direction::None` descriptor is ignored and encoded as 0.
pub fn encode(desc: &CommandDescriptor) -> Result<Opcode> {
    let family_tag = check("family_tag", desc.family_tag, IOC_TYPEMASK)?;
    let sequence = check("sequence", desc.sequence, IOC_NRMASK)?;
    let size = if desc.direction.has_payload() {
        check("size", desc.size, IOC_SIZEMASK)?
    } else {
        0
    };
    Ok(Opcode::from_raw(pack(desc.direction, size, family_tag, sequence)))
}

/// Split an opcode back into its four fields.
pub fn decode(op: Opcode) -> CommandDescriptor {
    CommandDescriptor::new(
        op.direction(),
        u32::from(op.family_tag()),
        u32::from(op.sequence()),
        op.size(),
    )
}

/// Look up the byte width of a named C primitive.
pub fn size_of_primitive(name: &str) -> Result<u32> {
    Ok(name.parse::<PrimitiveType>()?.size())
}

/// `_IO(family_tag, sequence)`: control call without payload.
pub fn control_no_payload(family_tag: impl Into<u32>, sequence: impl Into<u32>) -> Result<Opcode> {
    encode(&CommandDescriptor::new(
        Direction::None,
        family_tag.into(),
        sequence.into(),
        0,
    ))
}

/// `_IOR` / `_IOW` / `_IOWR`: control call whose payload is one
/// `primitive_type` wide.
pub fn control_with_payload(
    family_tag: impl Into<u32>,
    sequence: impl Into<u32>,
    direction: Direction,
    primitive_type: &str,
) -> Result<Opcode> {
    let size = size_of_primitive(primitive_type)?;
    encode(&CommandDescriptor::new(
        direction,
        family_tag.into(),
        sequence.into(),
        size,
    ))
}
