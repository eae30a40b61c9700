//! Packing between byte slices and `u32`/`u64` word slices.
//!
//! The `read_*` routines pack bytes into words, the `write_*` routines
//! unpack words into bytes, each in both byte orders. Partial trailing
//! groups are allowed: a tail shorter than one word occupies the leading
//! bytes of its serialization and the missing bytes read as zero. All
//! routines panic when the destination cannot hold the request instead of
//! truncating it.

macro_rules! read_impl {
    ($name:ident, $word:ty, $size:expr, $from:ident, $doc_order:expr) => {
        #[doc = concat!("Packs `src` into ", $doc_order, " words.")]
        ///
        /// Words not covered by `src` are zeroed.
        ///
        /// # Panics
        ///
        /// Panics if `src` does not fit in `dst`.
        pub fn $name(dst: &mut [$word], src: &[u8]) {
            assert!(
                src.len() <= $size * dst.len(),
                "source does not fit in the word buffer"
            );
            for word in dst.iter_mut() {
                *word = 0;
            }
            for (word, chunk) in dst.iter_mut().zip(src.chunks($size)) {
                let mut bytes = [0u8; $size];
                bytes[..chunk.len()].copy_from_slice(chunk);
                *word = <$word>::$from(bytes);
            }
        }
    };
}

macro_rules! write_impl {
    ($name:ident, $word:ty, $size:expr, $to:ident, $doc_order:expr) => {
        #[doc = concat!(
            "Unpacks ", $doc_order,
            " words into the leading `dst.len()` bytes of their serialization."
        )]
        ///
        /// # Panics
        ///
        /// Panics if `dst` is longer than the serialization of `src`.
        pub fn $name(dst: &mut [u8], src: &[$word]) {
            assert!(
                dst.len() <= $size * src.len(),
                "word buffer does not fill the destination"
            );
            for (chunk, word) in dst.chunks_mut($size).zip(src.iter()) {
                chunk.copy_from_slice(&word.$to()[..chunk.len()]);
            }
        }
    };
}

read_impl!(read_u32v_be, u32, 4, from_be_bytes, "big-endian `u32`");
read_impl!(read_u32v_le, u32, 4, from_le_bytes, "little-endian `u32`");
read_impl!(read_u64v_be, u64, 8, from_be_bytes, "big-endian `u64`");
read_impl!(read_u64v_le, u64, 8, from_le_bytes, "little-endian `u64`");

write_impl!(write_u32v_be, u32, 4, to_be_bytes, "big-endian `u32`");
write_impl!(write_u32v_le, u32, 4, to_le_bytes, "little-endian `u32`");
write_impl!(write_u64v_be, u64, 8, to_be_bytes, "big-endian `u64`");
write_impl!(write_u64v_le, u64, 8, to_le_bytes, "little-endian `u64`");

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn u32_big_endian_packing() {
        let mut words = [0u32; 2];
        read_u32v_be(&mut words, &hex!("0102030405060708"));
        assert_eq!(words, [0x0102_0304, 0x0506_0708]);

        let mut bytes = [0u8; 8];
        write_u32v_be(&mut bytes, &words);
        assert_eq!(bytes, hex!("0102030405060708"));
    }

    #[test]
    fn u32_little_endian_packing() {
        let mut words = [0u32; 2];
        read_u32v_le(&mut words, &hex!("0102030405060708"));
        assert_eq!(words, [0x0403_0201, 0x0807_0605]);

        let mut bytes = [0u8; 8];
        write_u32v_le(&mut bytes, &words);
        assert_eq!(bytes, hex!("0102030405060708"));
    }

    #[test]
    fn u64_packing_round_trips() {
        let mut words = [0u64; 2];
        read_u64v_be(&mut words, &hex!("00112233445566778899aabbccddeeff"));
        assert_eq!(words, [0x0011_2233_4455_6677, 0x8899_aabb_ccdd_eeff]);

        let mut bytes = [0u8; 16];
        write_u64v_be(&mut bytes, &words);
        assert_eq!(bytes, hex!("00112233445566778899aabbccddeeff"));

        read_u64v_le(&mut words, &hex!("00112233445566778899aabbccddeeff"));
        assert_eq!(words, [0x7766_5544_3322_1100, 0xffee_ddcc_bbaa_9988]);

        write_u64v_le(&mut bytes, &words);
        assert_eq!(bytes, hex!("00112233445566778899aabbccddeeff"));
    }

    #[test]
    fn ragged_tail_zero_fills_the_last_word() {
        let mut words = [0u32; 2];
        read_u32v_be(&mut words, &hex!("01020304aabb"));
        assert_eq!(words, [0x0102_0304, 0xaabb_0000]);

        read_u32v_le(&mut words, &hex!("01020304aabb"));
        assert_eq!(words, [0x0403_0201, 0x0000_bbaa]);
    }

    #[test]
    fn ragged_round_trip_preserves_present_bytes() {
        let src = hex!("0102030405060708090a0b");
        for len in 0..=src.len() {
            let mut words = [0u32; 3];
            read_u32v_be(&mut words, &src[..len]);
            let mut bytes = [0u8; 11];
            write_u32v_be(&mut bytes[..len], &words);
            assert_eq!(bytes[..len], src[..len]);

            read_u32v_le(&mut words, &src[..len]);
            write_u32v_le(&mut bytes[..len], &words);
            assert_eq!(bytes[..len], src[..len]);
        }
    }

    #[test]
    fn uncovered_words_are_zeroed() {
        let mut words = [0xdead_beefu32; 4];
        read_u32v_le(&mut words, &hex!("01020304"));
        assert_eq!(words, [0x0403_0201, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn read_bounds_are_checked() {
        let mut words = [0u32; 1];
        read_u32v_le(&mut words, &[0u8; 5]);
    }

    #[test]
    #[should_panic(expected = "does not fill")]
    fn write_bounds_are_checked() {
        let mut bytes = [0u8; 9];
        write_u32v_le(&mut bytes, &[0u32; 2]);
    }
}
