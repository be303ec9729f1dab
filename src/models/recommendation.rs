//! Debt payment recommendations produced by the allocation engine
//!
//! Recommendations are computed fresh for every request and never stored.

use serde::{Serialize, Serializer};
use std::fmt;

use super::debt::Utilization;
use super::ids::DebtAccountId;
use super::money::Money;

/// Why a debt received the payment it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationReason {
    /// Leftover cash could not cover every minimum
    MinimumPaymentOnly,
    /// Debt was offered a share of the surplus
    HighUtilization(Utilization),
    /// Surplus was exhausted before this debt
    MinimumPayment,
}

impl fmt::Display for RecommendationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinimumPaymentOnly => write!(f, "Minimum payment only"),
            Self::HighUtilization(u) => write!(f, "High utilization ({}%)", u.percent_display()),
            Self::MinimumPayment => write!(f, "Minimum payment"),
        }
    }
}

impl Serialize for RecommendationReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A recommended payment toward one debt for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtRecommendation {
    pub debt_account_id: DebtAccountId,
    pub account_name: String,
    pub recommended_payment: Money,
    /// 1 is paid first; 0 means no prioritization was possible
    pub priority_rank: u32,
    pub reason: RecommendationReason,
    pub utilization: Option<Utilization>,
}

impl DebtRecommendation {
    pub fn receives_extra(&self) -> bool {
        matches!(self.reason, RecommendationReason::HighUtilization(_))
    }
}
