use bit_twiddle::bit_field;

/// A spread of 32-bit values: edges, alternating patterns and the demo's start value.
pub const SAMPLE_U32: [u32; 8] = [
    0,
    1,
    0b10001,
    0x5555_5555,
    0xaaaa_aaaa,
    0x1234_5678,
    0x8000_0000,
    u32::MAX,
];

/// Panics if `before` and `after` differ anywhere other than bit `index`.
pub fn assert_only_bit_changed(before: u32, after: u32, index: usize) {
    for other in (0..bit_field::width::<u32>()).filter(|m| *m != index) {
        assert_eq!(
            bit_field::test_bit(before, other).unwrap(),
            bit_field::test_bit(after, other).unwrap(),
            "bit {} changed while operating on bit {} ({:#x} -> {:#x})",
            other,
            index,
            before,
            after
        );
    }
}
