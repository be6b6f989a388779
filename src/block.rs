//! MD5 compression function: one 64-byte block in, updated chaining value out.

/// Size of one message block in bytes.
pub(crate) const BLOCK_SIZE: usize = 64;
/// Number of 32-bit words in the chaining value.
pub(crate) const STATE_WORDS: usize = 4;

const ROUND_STEPS: usize = 16;
const TOTAL_STEPS: usize = 64;

/// Additive constants from RFC 1321: the integer part of `2^32 * |sin(i + 1)|`
/// for step `i`, laid out in step order.
const SINE_TABLE: [u32; TOTAL_STEPS] = [
    0xD76A_A478,
    0xE8C7_B756,
    0x2420_70DB,
    0xC1BD_CEEE,
    0xF57C_0FAF,
    0x4787_C62A,
    0xA830_4613,
    0xFD46_9501,
    0x6980_98D8,
    0x8B44_F7AF,
    0xFFFF_5BB1,
    0x895C_D7BE,
    0x6B90_1122,
    0xFD98_7193,
    0xA679_438E,
    0x49B4_0821,
    0xF61E_2562,
    0xC040_B340,
    0x265E_5A51,
    0xE9B6_C7AA,
    0xD62F_105D,
    0x0244_1453,
    0xD8A1_E681,
    0xE7D3_FBC8,
    0x21E1_CDE6,
    0xC337_07D6,
    0xF4D5_0D87,
    0x455A_14ED,
    0xA9E3_E905,
    0xFCEF_A3F8,
    0x676F_02D9,
    0x8D2A_4C8A,
    0xFFFA_3942,
    0x8771_F681,
    0x6D9D_6122,
    0xFDE5_380C,
    0xA4BE_EA44,
    0x4BDE_CFA9,
    0xF6BB_4B60,
    0xBEBF_BC70,
    0x289B_7EC6,
    0xEAA1_27FA,
    0xD4EF_3085,
    0x0488_1D05,
    0xD9D4_D039,
    0xE6DB_99E5,
    0x1FA2_7CF8,
    0xC4AC_5665,
    0xF429_2244,
    0x432A_FF97,
    0xAB94_23A7,
    0xFC93_A039,
    0x655B_59C3,
    0x8F0C_CC92,
    0xFFEF_F47D,
    0x8584_5DD1,
    0x6FA8_7E4F,
    0xFE2C_E6E0,
    0xA301_4314,
    0x4E08_11A1,
    0xF753_7E82,
    0xBD3A_F235,
    0x2AD7_D2BB,
    0xEB86_D391,
];

/// Left-rotation amounts: four per round, each reused four times within its round.
const ROTATION: [u32; 16] = [7, 12, 17, 22, 5, 9, 14, 20, 4, 11, 16, 23, 6, 10, 15, 21];

#[inline(always)]
fn mix_f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn mix_g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn mix_h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn mix_i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Folds one block into the chaining value.
///
/// Pure apart from its explicit inputs: the same state and block always
/// produce the same next state.
pub(crate) fn process_block(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let mut x = [0u32; ROUND_STEPS];
    for (word, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..TOTAL_STEPS {
        let round = step / ROUND_STEPS;
        let (mixed, word) = match round {
            0 => (mix_f(b, c, d), step),
            1 => (mix_g(b, c, d), (5 * step + 1) % ROUND_STEPS),
            2 => (mix_h(b, c, d), (3 * step + 5) % ROUND_STEPS),
            _ => (mix_i(b, c, d), (7 * step) % ROUND_STEPS),
        };

        let rotated = a
            .wrapping_add(mixed)
            .wrapping_add(x[word])
            .wrapping_add(SINE_TABLE[step])
            .rotate_left(ROTATION[round * 4 + step % 4]);
        let next = b.wrapping_add(rotated);

        a = d;
        d = c;
        c = b;
        b = next;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_block() {
        // The padded block for a zero-length message: 0x80 then zeros, with a
        // zero length field. The resulting registers are the little-endian
        // words of d41d8cd98f00b204e9800998ecf8427e.
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x80;

        let mut state = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];
        process_block(&mut state, &block);

        assert_eq!(state, [0xD98C_1DD4, 0x04B2_008F, 0x9809_80E9, 0x7E42_F8EC]);
    }

    #[test]
    fn mixing_functions_select_and_mix() {
        // F selects y or z by the bits of x.
        assert_eq!(mix_f(0xFFFF_FFFF, 0x1111_1111, 0x2222_2222), 0x1111_1111);
        assert_eq!(mix_f(0x0000_0000, 0x1111_1111, 0x2222_2222), 0x2222_2222);

        // G is F with the selector moved to z.
        assert_eq!(mix_g(0x1111_1111, 0x2222_2222, 0xFFFF_FFFF), 0x1111_1111);
        assert_eq!(mix_g(0x1111_1111, 0x2222_2222, 0x0000_0000), 0x2222_2222);

        assert_eq!(mix_h(0x0F0F_0F0F, 0x00FF_00FF, 0x3333_3333), 0x3CC3_3CC3);

        // I reduces to y when x is clear and z is all ones.
        assert_eq!(mix_i(0x0000_0000, 0x1234_5678, 0xFFFF_FFFF), 0x1234_5678);
        assert_eq!(mix_i(0xFFFF_FFFF, 0x0000_0000, 0x0000_0000), 0xFFFF_FFFF);
    }
}
