//! # Pricing Module
//!
//! Commission tiers and rental quotes.
//!
//! ## Commission Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Daily rate                      Commission (flat, per rental)          │
//! │  ─────────────────────────────   ──────────────────────────────         │
//! │  rate <= €30.00                  €2.00                                  │
//! │  €30.00 < rate <= €50.00         €5.00                                  │
//! │  rate > €50.00                   €10.00                                 │
//! │                                                                         │
//! │  Each boundary belongs to the lower tier.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rental Quote
//! ```text
//! start ──────────────── end
//!   │    elapsed time      │
//!   └──────────┬───────────┘
//!              ▼
//!   days  = ceil(elapsed / 24h)
//!   total = days × daily rate + commission
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::RentalPeriod;

/// Upper bound (inclusive) of the lowest commission tier.
pub const LOW_TIER_MAX: Money = Money::from_cents(3000);

/// Upper bound (inclusive) of the middle commission tier.
pub const MID_TIER_MAX: Money = Money::from_cents(5000);

pub const LOW_TIER_COMMISSION: Money = Money::from_cents(200);
pub const MID_TIER_COMMISSION: Money = Money::from_cents(500);
pub const HIGH_TIER_COMMISSION: Money = Money::from_cents(1000);

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Flat commission charged on a rental of a tool with this daily rate.
///
/// Any rate is accepted, zero and negative included; they fall in the
/// lowest tier.
///
/// ## Example
/// ```rust
/// use toolrent_core::{commission_for, Money};
///
/// assert_eq!(commission_for(Money::from_cents(3000)).cents(), 200);
/// assert_eq!(commission_for(Money::from_cents(3001)).cents(), 500);
/// assert_eq!(commission_for(Money::from_cents(5001)).cents(), 1000);
/// ```
pub fn commission_for(daily_rate: Money) -> Money {
    if daily_rate <= LOW_TIER_MAX {
        LOW_TIER_COMMISSION
    } else if daily_rate <= MID_TIER_MAX {
        MID_TIER_COMMISSION
    } else {
        HIGH_TIER_COMMISSION
    }
}

/// Whole days between start and end, rounded up.
///
/// A partial day counts as a full one. Zero or negative spans are passed
/// through as zero or a negative count.
pub fn billable_days(period: &RentalPeriod) -> i64 {
    let secs = (period.end - period.start).num_seconds();
    // ceil for positive spans, truncation toward zero otherwise
    if secs > 0 {
        (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    } else {
        secs / SECONDS_PER_DAY
    }
}

/// Priced breakdown of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalQuote {
    pub days: i64,
    pub commission: Money,
    pub total: Money,
}

/// Prices a rental of `period` at `daily_rate`.
///
/// The period is not checked here; callers that want to refuse inverted
/// spans build it with [`RentalPeriod::new`].
pub fn quote(period: &RentalPeriod, daily_rate: Money) -> CoreResult<RentalQuote> {
    let days = billable_days(period);
    let commission = commission_for(daily_rate);
    let total = daily_rate
        .checked_multiply_days(days)
        .and_then(|base| base.checked_add(commission))
        .ok_or(CoreError::AmountOverflow("rental total"))?;

    Ok(RentalQuote {
        days,
        commission,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_rental_date;

    fn period(start: &str, end: &str) -> RentalPeriod {
        RentalPeriod::unchecked(
            parse_rental_date(start).unwrap(),
            parse_rental_date(end).unwrap(),
        )
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_commission_tier_boundaries() {
        assert_eq!(commission_for(money("30")), money("2"));
        assert_eq!(commission_for(money("30.01")), money("5"));
        assert_eq!(commission_for(money("50")), money("5"));
        assert_eq!(commission_for(money("50.01")), money("10"));
    }

    #[test]
    fn test_commission_accepts_degenerate_rates() {
        assert_eq!(commission_for(Money::zero()), money("2"));
        assert_eq!(commission_for(money("-15")), money("2"));
        assert_eq!(commission_for(money("10000")), money("10"));
    }

    #[test]
    fn test_quote_three_days_low_tier() {
        let q = quote(&period("2024-05-01", "2024-05-04"), money("25.00")).unwrap();
        assert_eq!(q.days, 3);
        assert_eq!(q.commission, money("2"));
        assert_eq!(q.total, money("77.00"));
    }

    #[test]
    fn test_quote_one_day_mid_tier() {
        let q = quote(&period("2024-05-01", "2024-05-02"), money("45.00")).unwrap();
        assert_eq!(q.days, 1);
        assert_eq!(q.commission, money("5"));
        assert_eq!(q.total, money("50.00"));
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let p = period("2024-05-01T10:00", "2024-05-02T10:01");
        assert_eq!(billable_days(&p), 2);

        let p = period("2024-05-01T10:00", "2024-05-01T10:01");
        assert_eq!(billable_days(&p), 1);
    }

    #[test]
    fn test_inverted_period_passes_through() {
        let p = period("2024-05-04", "2024-05-01");
        assert_eq!(billable_days(&p), -3);
        let q = quote(&p, money("25")).unwrap();
        assert_eq!(q.total, money("-73"));

        let same = period("2024-05-01", "2024-05-01");
        let q = quote(&same, money("60")).unwrap();
        assert_eq!(q.days, 0);
        assert_eq!(q.total, money("10"));
    }

    #[test]
    fn test_quote_overflow_is_an_error() {
        let p = period("2024-05-01", "2024-05-03");
        assert!(matches!(
            quote(&p, Money::from_cents(i64::MAX)),
            Err(CoreError::AmountOverflow(_))
        ));
    }
}
