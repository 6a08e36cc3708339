#[cfg(test)]
mod common_tests {
    use crate::common::common::{from_binary_string, from_binary_string_fixed, hex2bin, to_binary_string};
    use crate::common::structs::custom_error::CustomError;
    use crate::config::structs::configuration::Configuration;
    use crate::logging::{parse_level, setup_logging};

    #[test]
    fn test_binary_string_keeps_high_bytes() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let encoded = to_binary_string(&bytes);
        assert_eq!(encoded.chars().count(), 256);
        assert_eq!(from_binary_string(&encoded), Some(bytes));
    }

    #[test]
    fn test_binary_string_rejects_wide_chars() {
        assert_eq!(from_binary_string("abc\u{0100}"), None);
    }

    #[test]
    fn test_binary_string_fixed_length() {
        let encoded = to_binary_string(&[7u8; 20]);
        assert_eq!(from_binary_string_fixed::<20>(&encoded), Some([7u8; 20]));
        assert_eq!(from_binary_string_fixed::<32>(&encoded), None);
    }

    #[test]
    fn test_hex2bin() {
        assert_eq!(hex2bin::<2>("abff"), Some([0xab, 0xff]));
        assert_eq!(hex2bin::<2>("abf"), None);
        assert_eq!(hex2bin::<2>("zzzz"), None);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("torrent not found");
        assert_eq!(format!("{}", error), "torrent not found");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(parse_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_setup_logging_rejects_unknown_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("loud");
        assert!(setup_logging(&config).is_err());
    }
}
