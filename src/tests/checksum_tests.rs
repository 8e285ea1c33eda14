#[cfg(test)]
mod tests {
    use crate::errors::PropError;
    use crate::implementations::checksum::{ checksum_encode, ChecksumScheme };
    use crate::models::address::Address;

    const EIP55_VECTORS: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_sha3_legacy_matches_existing_toolchain_output() {
        assert_eq!(
            checksum_encode("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", ChecksumScheme::Sha3Legacy).unwrap(),
            "0x5Aaeb6053F3e94c9B9a09F33669435E7Ef1bEAEd"
        );
        assert_eq!(
            checksum_encode("fb6916095ca1df60bb79ce92ce3ea74c37c5d359", ChecksumScheme::Sha3Legacy).unwrap(),
            "0xfb6916095CA1DF60BB79cE92CE3Ea74C37c5D359"
        );
        assert_eq!(
            checksum_encode(&"cc".repeat(20), ChecksumScheme::Sha3Legacy).unwrap(),
            "0xcCcCCcCCCccCccCcCccCcCcCcccCccCcccccCCcc"
        );
    }

    #[test]
    fn test_sha3_legacy_differs_from_eip55() {
        let lower = EIP55_VECTORS[0].to_lowercase();
        let legacy = checksum_encode(&lower, ChecksumScheme::Sha3Legacy).unwrap();
        let eip55 = checksum_encode(&lower, ChecksumScheme::Eip55).unwrap();
        assert_ne!(legacy, eip55);
    }

    #[test]
    fn test_eip55_matches_reference_vectors() {
        for expected in EIP55_VECTORS {
            let encoded = checksum_encode(&expected.to_lowercase(), ChecksumScheme::Eip55).unwrap();
            assert_eq!(encoded, expected);
        }
    }

    #[test]
    fn test_reencoding_is_idempotent_for_both_schemes() {
        for scheme in [ChecksumScheme::Sha3Legacy, ChecksumScheme::Eip55] {
            for vector in EIP55_VECTORS {
                let once = checksum_encode(vector, scheme).unwrap();
                let twice = checksum_encode(&once, scheme).unwrap();
                assert_eq!(once, twice, "{:?} is not idempotent on {}", scheme, vector);
            }
        }
    }

    #[test]
    fn test_input_case_and_prefix_do_not_matter() {
        let upper = "0X5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED";
        let bare = "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert_eq!(
            checksum_encode(upper, ChecksumScheme::Eip55).unwrap(),
            checksum_encode(bare, ChecksumScheme::Eip55).unwrap()
        );
    }

    #[test]
    fn test_digits_are_never_cased() {
        let digits = "0x0000000000000000000000000000000000010000";
        assert_eq!(checksum_encode(digits, ChecksumScheme::Sha3Legacy).unwrap(), digits);
    }

    #[test]
    fn test_non_hex_character_is_rejected_with_position() {
        match checksum_encode("0x12g4", ChecksumScheme::Sha3Legacy) {
            Err(PropError::InvalidAddress { position, character, .. }) => {
                assert_eq!(position, 2);
                assert_eq!(character, 'g');
            }
            other => panic!("expected InvalidAddress, got {:?}", other),
        }
    }

    #[test]
    fn test_only_full_width_addresses_are_encoded() {
        for scheme in [ChecksumScheme::Sha3Legacy, ChecksumScheme::Eip55] {
            for input in ["", "0x", "abc", "0x10000"] {
                assert!(
                    matches!(checksum_encode(input, scheme), Err(PropError::MalformedAddress { .. })),
                    "{:?} accepted {:?}",
                    scheme,
                    input
                );
            }
            let long = "a".repeat(41);
            assert!(matches!(checksum_encode(&long, scheme), Err(PropError::MalformedAddress { .. })));
            assert!(checksum_encode(&"a".repeat(40), scheme).is_ok());
        }
    }

    #[test]
    fn test_short_address_checksums_through_padded_form() {
        let address = Address::parse("0x10000").unwrap();
        assert_eq!(address.to_hex(), "0000000000000000000000000000000000010000");
        assert_eq!(
            address.to_checksum(ChecksumScheme::Sha3Legacy),
            checksum_encode(&address.to_hex(), ChecksumScheme::Sha3Legacy).unwrap()
        );
        assert_eq!(Address::parse("0xabc").unwrap().to_hex(), format!("{:0>40}", "abc"));
    }

    #[test]
    fn test_address_display_form_uses_encoder() {
        let address = Address::parse(EIP55_VECTORS[1]).unwrap();
        assert_eq!(address.to_string(), EIP55_VECTORS[1].to_lowercase());
        assert_eq!(address.to_checksum(ChecksumScheme::Eip55), EIP55_VECTORS[1]);
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(ChecksumScheme::parse("EIP55"), Some(ChecksumScheme::Eip55));
        assert_eq!(ChecksumScheme::parse("legacy"), Some(ChecksumScheme::Sha3Legacy));
        assert_eq!(ChecksumScheme::parse("md5"), None);
        assert_eq!(ChecksumScheme::default(), ChecksumScheme::Sha3Legacy);
    }
}
