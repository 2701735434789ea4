//! 8080 flag bit definitions and the precomputed Sign/Zero/Parity table.
//!
//! Flag bit positions in the F (flags) register, LSB first.
//!
//! # References
//! - Intel 8080 Microcomputer Systems User's Manual

/// Carry flag (bit 0)
pub const C_FLAG: u8 = 0b0000_0001;
/// Reserved, reads as 1 when pushed (bit 1)
pub const N_FLAG: u8 = 0b0000_0010;
/// Parity flag, set when the result has even parity (bit 2)
pub const P_FLAG: u8 = 0b0000_0100;
/// Reserved, always 0 (bit 3)
pub const X_FLAG: u8 = 0b0000_1000;
/// Auxiliary (half) carry flag (bit 4)
pub const H_FLAG: u8 = 0b0001_0000;
/// Reserved, always 0 (bit 5)
pub const Y_FLAG: u8 = 0b0010_0000;
/// Zero flag (bit 6)
pub const Z_FLAG: u8 = 0b0100_0000;
/// Sign flag (bit 7)
pub const S_FLAG: u8 = 0b1000_0000;

/// Bit index of each flag, for callers that want to shift rather than mask.
pub const C_SHIFT: u8 = 0;
pub const N_SHIFT: u8 = 1;
pub const P_SHIFT: u8 = 2;
pub const X_SHIFT: u8 = 3;
pub const H_SHIFT: u8 = 4;
pub const Y_SHIFT: u8 = 5;
pub const Z_SHIFT: u8 = 6;
pub const S_SHIFT: u8 = 7;

/// Read-only 256-entry table of S|Z|P bits for every possible 8-bit result.
///
/// `szp_flags[v]` has S_FLAG set iff `v >= 0x80`, Z_FLAG set iff `v == 0`,
/// P_FLAG set iff `v` has even parity, and every other bit clear. Consulted
/// by every arithmetic/logic opcode; H and C are never table-driven and are
/// always computed from the operand-wise bit expressions in `cpu::helpers`.
pub static SZP_FLAGS: [u8; 256] = build_szp_table();

const fn build_szp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut v: usize = 0;
    while v < 256 {
        let mut f = 0u8;
        if v >= 0x80 {
            f |= S_FLAG;
        }
        if v == 0 {
            f |= Z_FLAG;
        }
        if (v as u8).count_ones() % 2 == 0 {
            f |= P_FLAG;
        }
        table[v] = f;
        v += 1;
    }
    table
}
