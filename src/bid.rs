/// A point of the bid grid `[0, x)`.
pub type Bid = usize;

/// A private valuation. Strong bidders may reach `x` itself.
pub type Value = usize;

/// One bid per player, in slot order.
pub type BidRound = Vec<Bid>;

/// Empirical frequency of each bid, indexed by bid.
pub type Distribution = Vec<f64>;

/// Bid counts over the grid.
///
/// Holds the same information as a flattened opponent sample for every
/// quantity the payoff model reads (fractions below and at a bid), without
/// rescanning history.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pool {
    counts: Vec<usize>,
    len: usize,
}

impl Pool {
    pub fn new(bid_space: usize) -> Self {
        Pool {
            counts: vec![0; bid_space],
            len: 0,
        }
    }

    pub fn from_bids(bid_space: usize, bids: &[Bid]) -> Self {
        let mut pool = Pool::new(bid_space);
        pool.extend(bids);
        pool
    }

    pub fn add(&mut self, bid: Bid) {
        self.counts[bid] += 1;
        self.len += 1;
    }

    pub fn extend(&mut self, bids: &[Bid]) {
        for &bid in bids {
            self.add(bid);
        }
    }

    /// Counts of `self` with every bid of `other` taken out.
    ///
    /// `other` must be a sub-multiset of `self`.
    pub fn without(&self, other: &Pool) -> Pool {
        debug_assert_eq!(self.counts.len(), other.counts.len());
        Pool {
            counts: self
                .counts
                .iter()
                .zip(other.counts.iter())
                .map(|(all, own)| all - own)
                .collect(),
            len: self.len - other.len,
        }
    }

    pub fn count(&self, bid: Bid) -> usize {
        self.counts[bid]
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bid_space(&self) -> usize {
        self.counts.len()
    }
}
