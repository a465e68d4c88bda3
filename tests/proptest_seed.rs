use proptest::prelude::*;

use jingtum_keyaddress::prelude::*;
use jingtum_keyaddress::keygen::below_order;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn seed_serialize_parse_roundtrip(bytes in prop::array::uniform16(any::<u8>())) {
        let seed = Seed::from_bytes(bytes);
        let encoded = seed.serialize().unwrap();

        prop_assert!(encoded.starts_with('s'));
        prop_assert_eq!(Seed::parse(&encoded), seed);
        prop_assert_eq!(Seed::parse_for(&seed.serialize_for(Network::Ripple).unwrap(), Network::Ripple), seed);
    }

    #[test]
    fn hex_and_check_forms_agree(bytes in prop::array::uniform16(any::<u8>())) {
        let from_hex = Seed::parse(&encode_02x(&bytes));
        let from_check = Seed::parse(&Seed::from_bytes(bytes).serialize().unwrap());

        prop_assert_eq!(from_hex, from_check);
        prop_assert_eq!(
            from_hex.get_key(Account::Default, None).unwrap(),
            from_check.get_key(Account::Default, None).unwrap()
        );
    }

    #[test]
    fn passphrase_is_deterministic(phrase in "[a-zA-Z0-9 ]{1,40}") {
        let a = Seed::parse_passphrase(&phrase);
        let b = Seed::parse_passphrase(&phrase);

        prop_assert!(a.is_valid());
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.get_key(Account::Index(1), None).unwrap(), b.get_key(Account::Index(1), None).unwrap());
    }

    #[test]
    fn derived_scalars_are_below_order(bytes in prop::array::uniform16(any::<u8>()), index in 0u32..1000) {
        let generator = KeyGenerator::default().derive_generator(&Seed::from_bytes(bytes)).unwrap();
        let private_gen: [u8; 32] = {
            let mut out = [0u8; 32];
            out.copy_from_slice(&generator.private_gen().as_bytes());
            out
        };
        prop_assert!(below_order(&private_gen));

        let kp = generator.account(index).unwrap();
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&kp.secret().as_bytes());
        prop_assert!(below_order(&secret));
    }

    #[test]
    fn malformed_family_seed_is_invalid(tail in "[0IOl]{1,30}") {
        //'0', 'I', 'O' and 'l' are not base58 characters
        let input = format!("s{}", tail);
        prop_assert_eq!(Seed::parse(&input), Seed::Invalid);
    }
}
