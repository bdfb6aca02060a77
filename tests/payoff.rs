extern crate auction_fp;

#[cfg(test)]
mod tests {
    use approx_eq::assert_approx_eq;
    use auction_fp::bid::Pool;
    use auction_fp::rule::{self, Format, Rule};
    use auction_fp::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn random_sample(rng: &mut SmallRng, bid_space: usize, len: usize) -> Vec<usize> {
        (0..len).map(|_| rng.random_range(0..bid_space)).collect()
    }

    #[test]
    fn choose_symmetry() {
        for n in 0..30u64 {
            assert_eq!(combinatorics::choose(n, 0), Some(1));
            assert_eq!(combinatorics::choose(n, n), Some(1));
            for r in 0..=n {
                assert_eq!(combinatorics::choose(n, r), combinatorics::choose(n, n - r));
            }
        }
    }

    #[test]
    fn win_prob_is_a_probability() {
        let mut rng = SmallRng::seed_from_u64(3);
        for players in 2..6 {
            let rule = Rule::new(12, Format::FirstPrice, players, 0);
            for len in 1..20 {
                let sample = random_sample(&mut rng, rule.bid_space, len);
                for bid in 0..rule.bid_space {
                    let p = payoff::win_prob(&rule, bid, &sample);
                    assert!(p >= 0.0 && p <= 1.0 + 1e-12, "p_win {} out of range", p);
                }
            }
        }
    }

    #[test]
    fn win_prob_extremes() {
        let rule = Rule::new(10, Format::FirstPrice, 3, 0);
        assert_eq!(payoff::win_prob(&rule, 2, &[3, 5, 9, 3]), 0.0);
        assert_eq!(payoff::win_prob(&rule, 7, &[3, 5, 6, 0]), 1.0);
    }

    #[test]
    fn win_prob_ties() {
        let two = Rule::new(3, Format::FirstPrice, 2, 0);
        assert_approx_eq!(payoff::win_prob(&two, 1, &[1]), 0.5);

        // two opponents, each below or tied with probability 1/2
        let three = Rule::new(3, Format::FirstPrice, 3, 0);
        assert_approx_eq!(payoff::win_prob(&three, 2, &[1, 2]), 7.0 / 12.0);
    }

    #[test]
    fn payoff_formats() {
        let first = Rule::new(3, Format::FirstPrice, 2, 0);
        assert_approx_eq!(payoff::payoff(&first, 2, 1, &[1]), 0.5);
        assert_eq!(payoff::payoff(&first, 2, 2, &[1]), 0.0);
        assert_approx_eq!(payoff::payoff(&first, 0, 1, &[0]), -1.0);

        let all_pay = Rule::new(3, Format::AllPay, 2, 0);
        assert_approx_eq!(payoff::payoff(&all_pay, 2, 1, &[0]), 1.0);
        assert_eq!(payoff::payoff(&all_pay, 2, 1, &[1]), 0.0);
        assert_approx_eq!(payoff::payoff(&all_pay, 1, 2, &[0, 1]), -1.0);
    }

    #[test]
    fn pool_matches_sample() {
        let mut rng = SmallRng::seed_from_u64(11);
        for players in 2..5 {
            for format in [Format::FirstPrice, Format::AllPay].iter() {
                let rule = Rule::new(15, *format, players, 0);
                let sample = random_sample(&mut rng, rule.bid_space, 40);
                let pool = Pool::from_bids(rule.bid_space, &sample);
                for bid in 0..rule.bid_space {
                    assert_eq!(
                        payoff::win_prob(&rule, bid, &sample).to_bits(),
                        payoff::win_prob_in(&rule, bid, &pool).to_bits()
                    );
                    assert_eq!(
                        payoff::payoff(&rule, 9, bid, &sample).to_bits(),
                        payoff::payoff_in(&rule, 9, bid, &pool).to_bits()
                    );
                }
            }
        }
    }

    #[test]
    fn largest_player_count() {
        let rule = Rule::new(10, Format::FirstPrice, rule::MAX_PLAYERS, 0);
        let p = payoff::win_prob(&rule, 5, &[5, 4, 3]);
        assert!(p > 0.0 && p <= 1.0);
        assert_eq!(payoff::win_prob(&rule, 9, &[5, 4, 3]), 1.0);
    }

    #[test]
    #[should_panic]
    fn too_many_players_panics() {
        let rule = Rule::new(10, Format::FirstPrice, 200, 0);
        payoff::win_prob(&rule, 5, &[5, 4, 3]);
    }

    #[test]
    #[should_panic]
    fn empty_sample_panics() {
        let rule = Rule::new(3, Format::FirstPrice, 2, 0);
        payoff::win_prob(&rule, 1, &[]);
    }
}
