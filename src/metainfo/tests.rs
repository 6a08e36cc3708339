#[cfg(test)]
mod metainfo_tests {
    use std::io;
    use std::io::Read;
    use proptest::prelude::*;
    use crate::metainfo::metainfo::{digest_piece, generate_pieces};
    use crate::metainfo::structs::content_id::ContentId;
    use crate::metainfo::structs::piece_set::PieceSet;

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    struct FailingReader {
        remaining: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "source broke"));
            }
            let n = buf.len().min(self.remaining);
            buf[..n].fill(7);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_generate_pieces_short_last_piece() {
        let data = sample(10);
        let mut out = Vec::new();
        generate_pieces(&mut data.as_slice(), 4, &mut out).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], digest_piece(&data[0..4]));
        assert_eq!(out[1], digest_piece(&data[4..8]));
        assert_eq!(out[2], digest_piece(&data[8..10]));
    }

    #[test]
    fn test_generate_pieces_exact_multiple() {
        let data = sample(12);
        let mut out = Vec::new();
        generate_pieces(&mut data.as_slice(), 4, &mut out).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[2], digest_piece(&data[8..12]));
    }

    #[test]
    fn test_generate_pieces_empty_input() {
        let mut out = Vec::new();
        generate_pieces(&mut io::empty(), 16, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_pieces_appends_to_existing() {
        let data = sample(8);
        let mut out = vec![digest_piece(b"seed")];
        generate_pieces(&mut data.as_slice(), 8, &mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], digest_piece(b"seed"));
    }

    #[test]
    fn test_generate_pieces_rejects_zero_length() {
        let mut out = Vec::new();
        let error = generate_pieces(&mut sample(4).as_slice(), 0, &mut out).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_generate_pieces_keeps_partial_output_on_error() {
        let mut reader = FailingReader { remaining: 10 };
        let mut out = Vec::new();
        let error = generate_pieces(&mut reader, 4, &mut out).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], digest_piece(&[7u8; 4]));
        assert_eq!(out[2], digest_piece(&[7u8; 2]));
    }

    #[test]
    fn test_piece_set_geometry() {
        let data = sample(100_000);
        let set = PieceSet::from_bytes(&data, 16384).unwrap();
        assert_eq!(set.total_length, 100_000);
        assert_eq!(set.piece_count(), 7);
        assert_eq!(set.piece_size(0), Some(16384));
        assert_eq!(set.piece_size(6), Some(100_000 - 6 * 16384));
        assert_eq!(set.piece_size(7), None);
        assert!(set.verify(6, &data[6 * 16384..]));
        assert!(!set.verify(5, &data[6 * 16384..]));
    }

    #[test]
    fn test_piece_set_verify_rejects_corruption() {
        let mut data = sample(64);
        let set = PieceSet::from_bytes(&data, 32).unwrap();
        data[40] ^= 0xff;
        assert!(set.verify(0, &data[..32]));
        assert!(!set.verify(1, &data[32..]));
    }

    #[test]
    fn test_content_id_depends_on_content() {
        let a = PieceSet::from_bytes(&sample(64), 32).unwrap();
        let b = PieceSet::from_bytes(&sample(65), 32).unwrap();
        assert_eq!(a.content_id(), a.clone().content_id());
        assert_ne!(a.content_id(), b.content_id());
    }

    #[test]
    fn test_content_id_hex_and_serde() {
        let id = ContentId([0xab; 20]);
        let text = id.to_string();
        assert_eq!(text, "ab".repeat(20));
        assert_eq!(text.parse::<ContentId>().unwrap(), id);
        assert!("abcd".parse::<ContentId>().is_err());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(serde_json::from_str::<ContentId>(&json).unwrap(), id);
    }

    proptest! {
        #[test]
        fn prop_digest_count_matches_ceiling(len in 0usize..4096, piece_length in 1u64..512) {
            let data = sample(len);
            let mut out = Vec::new();
            generate_pieces(&mut data.as_slice(), piece_length, &mut out).unwrap();
            let expected = (len as u64).div_ceil(piece_length) as usize;
            prop_assert_eq!(out.len(), expected);
            if expected > 0 {
                let last_start = (expected - 1) * piece_length as usize;
                prop_assert_eq!(out[expected - 1], digest_piece(&data[last_start..]));
            }
        }
    }
}
