extern crate auction_fp;

#[cfg(test)]
mod tests {
    use auction_fp::rule::{self, Format, ValuationRule};
    use auction_fp::*;

    #[test]
    fn presets() {
        let symmetric = rule::from_name("symmetric").unwrap();
        assert_eq!(symmetric.bid_space, 101);
        assert_eq!(symmetric.format, Format::AllPay);
        assert_eq!(symmetric.players, 3);
        assert_eq!(symmetric.rounds, 1000);
        assert_eq!(symmetric.valuation, ValuationRule::Uniform);
        assert_eq!(symmetric.strong_slot(), None);

        let asymmetric = rule::from_file("resources/rule/asymmetric.json").unwrap();
        assert_eq!(asymmetric, rule::from_name("asymmetric").unwrap());
        assert_eq!(asymmetric.format, Format::FirstPrice);
        assert_eq!(asymmetric.weak_upper(), 75);
        assert_eq!(asymmetric.strong_slot(), Some(1));
        assert!(!asymmetric.parallel);
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(rule::from_name("leduc"), Err(Error::UnknownPreset(_))));
        assert!(matches!(rule::from_file("no/such/rule.json"), Err(Error::Io(_))));
    }

    #[test]
    fn configured_asymmetry() {
        let rule = rule::from_json(
            r#"{
                "bid_space": 50,
                "format": "first_price",
                "players": 4,
                "rounds": 10,
                "valuation": { "kind": "asymmetric", "weak_upper": 20, "strong_slot": 2 },
                "seed": 3,
                "parallel": true
            }"#,
        )
        .unwrap();
        assert_eq!(rule.weak_upper(), 20);
        assert_eq!(rule.strong_slot(), Some(2));
        assert_eq!(rule.seed, Some(3));
        assert!(rule.parallel);
        assert_eq!(rule.iterations(), 11);
    }

    #[test]
    fn player_count_limit() {
        let mut largest = rule::Rule::new(10, Format::FirstPrice, rule::MAX_PLAYERS, 0);
        assert!(largest.validate().is_ok());
        largest.players += 1;
        assert!(matches!(largest.validate(), Err(Error::TooManyPlayers(127))));
    }

    #[test]
    fn invalid_rules() {
        let with = |fields: &str| {
            rule::from_json(&format!(
                r#"{{ "format": "all_pay", "rounds": 1, {} }}"#,
                fields
            ))
        };
        assert!(matches!(
            with(r#""bid_space": 0, "players": 2"#),
            Err(Error::InvalidBidSpace(0))
        ));
        assert!(matches!(
            with(r#""bid_space": 10, "players": 1"#),
            Err(Error::TooFewPlayers(1))
        ));
        assert!(matches!(
            with(r#""bid_space": 10, "players": 200"#),
            Err(Error::TooManyPlayers(200))
        ));
        assert!(matches!(
            with(r#""bid_space": 10, "players": 2, "valuation": { "kind": "asymmetric", "strong_slot": 2 }"#),
            Err(Error::InvalidStrongSlot(2, 2))
        ));
        assert!(matches!(
            with(r#""bid_space": 10, "players": 2, "valuation": { "kind": "asymmetric", "weak_upper": 11 }"#),
            Err(Error::InvalidWeakUpper(11, 10))
        ));
        assert!(matches!(
            rule::from_json(r#"{ "bid_space": 10, "format": "all_pay", "players": 2, "rounds": -1 }"#),
            Err(Error::Json(_))
        ));
    }
}
