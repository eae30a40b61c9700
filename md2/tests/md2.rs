use hex_literal::hex;
use md2::{Digest, Md2};

fn check(input: &[u8], expected: [u8; 16]) {
    let mut hasher = Md2::new();
    hasher.update(input);
    assert_eq!(hasher.finalize()[..], expected[..]);
}

#[test]
fn rfc1319_test_suite() {
    check(b"", hex!("8350e5a3e24c153df2275c9f80692773"));
    check(b"a", hex!("32ec01ec4a6dac72c0ab96fb34c0b5d1"));
    check(b"abc", hex!("da853b0d3f88d99b30283a69e6ded6bb"));
    check(b"message digest", hex!("ab4f496bfb2a530b219ff33031fe06b0"));
    check(
        b"abcdefghijklmnopqrstuvwxyz",
        hex!("4e8ddff3650292ab5a4108c3aa47940b"),
    );
    check(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex!("da33def2a42df13975352846c30338cd"),
    );
    check(
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex!("d5976f79d83d3a0dc9806c3c66f3efd8"),
    );
}

#[test]
fn digest_is_chunking_invariant() {
    let data: Vec<u8> = (0u32..192).map(|i| i as u8).collect();
    // lengths around the block size, a block multiple and beyond
    for &len in &[0usize, 1, 15, 16, 17, 31, 32, 33, 64, 192] {
        let input = &data[..len];
        let oneshot = Md2::digest(input);

        let mut hasher = Md2::new();
        for byte in input {
            hasher.update(&[*byte]);
        }
        assert_eq!(hasher.finalize(), oneshot);

        for split in 0..=len {
            let mut hasher = Md2::new();
            hasher.update(&input[..split]);
            hasher.update(&input[split..]);
            assert_eq!(hasher.finalize(), oneshot);
        }
    }
}

#[test]
fn hasher_is_reusable_after_reset() {
    let mut hasher = Md2::new();
    hasher.update(b"abc");
    let first = hasher.finalize_reset();
    hasher.update(b"abc");
    assert_eq!(hasher.finalize_reset(), first);

    hasher.update(b"discarded input");
    hasher.reset();
    hasher.update(b"abc");
    assert_eq!(hasher.finalize_reset(), first);
}

#[test]
fn block_multiple_gets_a_full_padding_block() {
    // 16 and 32 byte messages pad with a whole block of 16s
    let input = [0x55u8; 32];
    assert_eq!(Md2::digest(&input[..16]), {
        let mut hasher = Md2::new();
        hasher.update(&input[..7]);
        hasher.update(&input[7..16]);
        hasher.finalize()
    });
    assert_eq!(Md2::digest(&input), {
        let mut hasher = Md2::new();
        hasher.update(&input[..17]);
        hasher.update(&input[17..]);
        hasher.finalize()
    });
}

#[test]
fn write_adapter_feeds_the_hasher() {
    use std::io::Write;

    let mut hasher = Md2::new();
    hasher.write_all(b"message ").unwrap();
    hasher.write_all(b"digest").unwrap();
    hasher.flush().unwrap();
    assert_eq!(hasher.finalize()[..], hex!("ab4f496bfb2a530b219ff33031fe06b0"));
}
