// Session rewards - a point per scan, spent on a fixed catalog
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient points: need {cost}, have {points}")]
    InsufficientPoints { cost: u32, points: u32 },
}

/// Points and scan tally for the current session.
///
/// Starts from zero on every launch and is never written to disk. One ledger
/// per process, owned by whoever runs the event loop and passed down by
/// mutable reference.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewardsLedger {
    points: u32,
    items_scanned: u32,
}

impl RewardsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn items_scanned(&self) -> u32 {
        self.items_scanned
    }

    /// Award a completed scan: one point, one more item on the tally.
    pub fn record_scan(&mut self) {
        self.points += 1;
        self.items_scanned += 1;
        tracing::debug!(
            points = self.points,
            items = self.items_scanned,
            "scan recorded"
        );
    }

    /// Spend `cost` points. A short balance rejects and changes nothing;
    /// points never go negative.
    pub fn redeem(&mut self, cost: u32) -> Result<(), LedgerError> {
        if cost > self.points {
            return Err(LedgerError::InsufficientPoints {
                cost,
                points: self.points,
            });
        }
        self.points -= cost;
        tracing::info!(cost, remaining = self.points, "reward redeemed");
        Ok(())
    }
}

/// A redeemable reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardOption {
    pub id: u32,
    pub name: &'static str,
    pub points: u32,
}

/// What the points buy. Fixed, same for everyone.
pub const REWARD_CATALOG: &[RewardOption] = &[
    RewardOption {
        id: 1,
        name: "Candy",
        points: 1,
    },
    RewardOption {
        id: 2,
        name: "Free Pencil",
        points: 10,
    },
    RewardOption {
        id: 3,
        name: "Free Drink",
        points: 100,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_scan_bumps_points_and_tally() {
        let mut ledger = RewardsLedger::new();
        ledger.record_scan();
        ledger.record_scan();
        assert_eq!(ledger.points(), 2);
        assert_eq!(ledger.items_scanned(), 2);
    }

    #[test]
    fn redeem_subtracts_exactly_the_cost() {
        let mut ledger = RewardsLedger::new();
        for _ in 0..5 {
            ledger.record_scan();
        }
        ledger.redeem(3).unwrap();
        assert_eq!(ledger.points(), 2);
        // The tally is scans, not balance; spending leaves it alone.
        assert_eq!(ledger.items_scanned(), 5);
    }

    #[test]
    fn short_balance_rejects_and_changes_nothing() {
        let mut ledger = RewardsLedger::new();
        ledger.record_scan();

        let err = ledger.redeem(10).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientPoints { cost: 10, points: 1 });
        assert_eq!(err.to_string(), "Insufficient points: need 10, have 1");
        assert_eq!(ledger.points(), 1);
        assert_eq!(ledger.items_scanned(), 1);
    }

    #[test]
    fn redeeming_the_whole_balance_lands_on_zero() {
        let mut ledger = RewardsLedger::new();
        ledger.record_scan();
        ledger.redeem(1).unwrap();
        assert_eq!(ledger.points(), 0);
        // And an empty balance can still be "redeemed" for free.
        ledger.redeem(0).unwrap();
        assert_eq!(ledger.points(), 0);
    }

    #[test]
    fn scan_redeem_scan_sequence_balances_out() {
        let mut ledger = RewardsLedger::new();
        ledger.record_scan();
        assert_eq!((ledger.points(), ledger.items_scanned()), (1, 1));

        assert!(ledger.redeem(10).is_err());
        assert_eq!((ledger.points(), ledger.items_scanned()), (1, 1));

        for _ in 0..9 {
            ledger.record_scan();
        }
        ledger.redeem(10).unwrap();
        assert_eq!(ledger.points(), 0);
        assert_eq!(ledger.items_scanned(), 10);
    }

    #[test]
    fn catalog_is_priced_in_ascending_order() {
        let prices: Vec<u32> = REWARD_CATALOG.iter().map(|r| r.points).collect();
        assert_eq!(prices, vec![1, 10, 100]);
        assert_eq!(REWARD_CATALOG[1].name, "Free Pencil");
    }
}
