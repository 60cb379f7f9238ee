use proptest::prelude::*;

use xpx_primitives::util::{WireReader, WireWriter};
use xpx_primitives::{base32, convert, uint64};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = convert::bytes_to_hex(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert!(encoded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        let decoded = convert::hex_to_bytes(&encoded).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn base32_roundtrip(blocks in prop::collection::vec(prop::array::uniform5(any::<u8>()), 0..16)) {
        let bytes: Vec<u8> = blocks.into_iter().flatten().collect();
        let encoded = base32::encode(&bytes).unwrap();
        prop_assert_eq!(encoded.len(), bytes.len() / 5 * 8);
        let decoded = base32::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn uint64_word_roundtrip(value in any::<u64>()) {
        let (low, high) = uint64::to_words(value);
        prop_assert_eq!(uint64::from_words(low, high), value);
        prop_assert_eq!(uint64::from_le_bytes(uint64::to_le_bytes(value)), value);
    }

    #[test]
    fn wire_roundtrip(
        a in any::<u8>(),
        b in any::<u16>(),
        c in any::<u32>(),
        d in any::<u64>(),
        tail in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut writer = WireWriter::new();
        writer.write_u8(a);
        writer.write_u16_le(b);
        writer.write_u32_le(c);
        writer.write_u64_le(d);
        writer.write_bytes(&tail);

        let data = writer.into_bytes();
        let mut reader = WireReader::new(&data);
        prop_assert_eq!(reader.read_u8().unwrap(), a);
        prop_assert_eq!(reader.read_u16_le().unwrap(), b);
        prop_assert_eq!(reader.read_u32_le().unwrap(), c);
        prop_assert_eq!(reader.read_u64_le().unwrap(), d);
        prop_assert_eq!(reader.read_bytes(tail.len()).unwrap(), tail.as_slice());
        prop_assert_eq!(reader.remaining(), 0);
    }
}
