use bitvec::order::Msb0;
use bitvec::vec::BitVec;

/// One bit per piece, most significant bit first, as sent in `bitfield` messages.
pub type PieceBitfield = BitVec<u8, Msb0>;
