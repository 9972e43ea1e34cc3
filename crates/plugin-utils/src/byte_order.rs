//! Native byte order and network/host conversion
//!
//! Values exchanged with another process over the wire are big-endian. The
//! host may be either, so conversions go through [`ByteOrder::NATIVE`], which
//! is derived from `to_ne_bytes` rather than reinterpreting memory.

/// Byte ordering of multi-byte integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first; the network convention
    Big,
    /// Least significant byte first
    Little,
}

impl ByteOrder {
    /// Byte order of the machine this code runs on.
    pub const NATIVE: ByteOrder = if is_big_endian() {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Byte order used on the wire.
    pub const NETWORK: ByteOrder = ByteOrder::Big;
}

/// Detect whether the native integer layout is big-endian.
///
/// Lays out `0x01020304` in native order and checks whether the most
/// significant byte comes first.
pub const fn is_big_endian() -> bool {
    matches!(0x0102_0304_u32.to_ne_bytes(), [0x01, ..])
}

/// Swap the two bytes of a 16-bit value.
pub const fn swap_bytes_u16(value: u16) -> u16 {
    (value << 8) | (value >> 8)
}

/// Reverse the four bytes of a 32-bit value.
pub const fn swap_bytes_u32(value: u32) -> u32 {
    ((value & 0x0000_00FF) << 24)
        | ((value & 0x0000_FF00) << 8)
        | ((value & 0x00FF_0000) >> 8)
        | ((value & 0xFF00_0000) >> 24)
}

/// Convert a 16-bit value from network to host byte order.
pub const fn network_to_host_u16(value: u16) -> u16 {
    match ByteOrder::NATIVE {
        ByteOrder::Big => value,
        ByteOrder::Little => swap_bytes_u16(value),
    }
}

/// Convert a 16-bit value from host to network byte order.
pub const fn host_to_network_u16(value: u16) -> u16 {
    // The swap is its own inverse.
    network_to_host_u16(value)
}

/// Convert a 32-bit value from network to host byte order.
pub const fn network_to_host_u32(value: u32) -> u32 {
    match ByteOrder::NATIVE {
        ByteOrder::Big => value,
        ByteOrder::Little => swap_bytes_u32(value),
    }
}

/// Convert a 32-bit value from host to network byte order.
pub const fn host_to_network_u32(value: u32) -> u32 {
    network_to_host_u32(value)
}
