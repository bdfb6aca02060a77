/// Number of `r`-subsets of an `n`-set, or `None` when the running product
/// does not fit in a `u128`.
///
/// Uses `choose(n, r) == choose(n, n - r)` to keep the product short. Each
/// partial product `choose(n, i)` is an integer, so the running division is
/// exact. The middle coefficient has the largest running product, so if
/// `choose(n, n / 2)` fits then every `choose(n, r)` does.
pub fn choose(n: u64, r: u64) -> Option<u128> {
    debug_assert!(r <= n, "choose({}, {}) is undefined", n, r);
    let r = r.min(n - r);
    (0..r).try_fold(1u128, |acc, i| {
        acc.checked_mul((n - i) as u128).map(|prod| prod / (i + 1) as u128)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal() {
        for n in 1..40u64 {
            for r in 1..n {
                assert_eq!(
                    choose(n, r).unwrap(),
                    choose(n - 1, r - 1).unwrap() + choose(n - 1, r).unwrap()
                );
            }
        }
    }

    #[test]
    fn small_values() {
        assert_eq!(choose(0, 0), Some(1));
        assert_eq!(choose(5, 2), Some(10));
        assert_eq!(choose(10, 3), Some(120));
        assert_eq!(choose(52, 5), Some(2_598_960));
    }

    #[test]
    fn overflow_boundary() {
        assert!((0..=125).all(|r| choose(125, r).is_some()));
        assert_eq!(choose(126, 63), None);
        assert_eq!(choose(140, 70), None);
        assert_eq!(choose(140, 1), Some(140));
    }
}
