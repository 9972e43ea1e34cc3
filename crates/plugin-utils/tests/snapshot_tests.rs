//! Snapshot tests for error message formatting.
//!
//! Plugins log these strings; keep them stable.

use mumble_plugin_utils::{UtilsError, encoding::try_wide_to_narrow};

mod encoding_error_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_invalid_utf8() {
        assert_snapshot!(
            UtilsError::InvalidUtf8 { valid_up_to: 5 }.to_string(),
            @"Invalid UTF-8 sequence after 5 valid bytes"
        );
    }

    #[test]
    fn test_unpaired_surrogate() {
        let err = match try_wide_to_narrow::<u16>(&[0x0041, 0xD83D, 0x0042]) {
            Ok(text) => text,
            Err(err) => err.to_string(),
        };
        assert_snapshot!(err, @"Unpaired UTF-16 surrogate 0xD83D at unit 1");
    }

    #[test]
    fn test_invalid_code_point() {
        let err = match try_wide_to_narrow::<u32>(&[0x41, 0x42, 0x0011_0000]) {
            Ok(text) => text,
            Err(err) => err.to_string(),
        };
        assert_snapshot!(err, @"Invalid UTF-32 code point 0x00110000 at unit 2");
    }
}

mod io_error_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_io_error() {
        let err = UtilsError::io(
            "plugins/positional.dat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_snapshot!(err.to_string(), @"Failed to read plugins/positional.dat: no such file");
    }

    #[test]
    fn test_config_error() {
        assert_snapshot!(
            UtilsError::config("unknown variant `x87`").to_string(),
            @"Configuration error: unknown variant `x87`"
        );
    }
}
