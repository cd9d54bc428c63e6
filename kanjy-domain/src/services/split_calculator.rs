use crate::model::{Money, Multiplier, Participant, ParticipantId, RoleTable};
use rust_decimal::Decimal;

/// Splits a bill by role multipliers, honouring fixed-amount overrides.
///
/// Shares are rounded one by one, half away from zero. The rounding residue is
/// left as is: the sum of shares may be off from the total by up to one unit
/// per variable participant.
pub struct SplitCalculator<'a> {
    roles: &'a RoleTable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Share {
    pub participant: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSummary {
    pub total: Money,
    pub fixed_sum: Money,
    pub remaining: Money,
    /// `remaining / Σ multipliers`, `None` when nothing can be divided.
    pub base_unit: Option<Decimal>,
    pub allocated: Money,
    /// `total - allocated`; negative when rounding or fixed amounts over-allocate.
    pub rounding_residue: i128,
}

struct Pool {
    fixed_sum: Money,
    remaining: Money,
    /// Σ variable multipliers, `None` when zero or not representable.
    multiplier_sum: Option<Decimal>,
}

impl<'a> SplitCalculator<'a> {
    pub fn new(roles: &'a RoleTable) -> Self {
        Self { roles }
    }

    /// Amount owed by `participant`, evaluated against the roster `all`.
    pub fn share(&self, total: Money, participant: &Participant, all: &[Participant]) -> Money {
        if let Some(fixed) = participant.fixed_amount {
            return fixed;
        }
        let pool = self.pool(total, all);
        Self::variable_share(&pool, self.multiplier_of(participant))
    }

    /// Shares for every participant, in roster order.
    pub fn shares(&self, total: Money, all: &[Participant]) -> Vec<Share> {
        let pool = self.pool(total, all);
        all.iter()
            .map(|participant| Share {
                participant: participant.id,
                amount: match participant.fixed_amount {
                    Some(fixed) => fixed,
                    None => Self::variable_share(&pool, self.multiplier_of(participant)),
                },
            })
            .collect()
    }

    pub fn summary(&self, total: Money, all: &[Participant]) -> SplitSummary {
        let pool = self.pool(total, all);
        let allocated: Money = self.shares(total, all).iter().map(|share| share.amount).sum();
        let summary = SplitSummary {
            total,
            fixed_sum: pool.fixed_sum,
            remaining: pool.remaining,
            base_unit: pool.base_unit(),
            allocated,
            rounding_residue: total.difference(allocated),
        };
        tracing::debug!(
            total = %summary.total,
            fixed_sum = %summary.fixed_sum,
            remaining = %summary.remaining,
            base_unit = ?summary.base_unit,
            allocated = %summary.allocated,
            rounding_residue = summary.rounding_residue,
            participant_count = all.len(),
            "Split computed"
        );
        summary
    }

    fn multiplier_of(&self, participant: &Participant) -> Multiplier {
        participant.role.effective_multiplier(self.roles)
    }

    fn pool(&self, total: Money, all: &[Participant]) -> Pool {
        let fixed_sum: Money = all.iter().filter_map(|p| p.fixed_amount).sum();
        let remaining = total.saturating_sub(fixed_sum);

        let multiplier_sum = all
            .iter()
            .filter(|p| !p.is_fixed())
            .try_fold(Decimal::ZERO, |acc, p| {
                acc.checked_add(self.multiplier_of(p).value())
            });

        Pool {
            fixed_sum,
            remaining,
            multiplier_sum: multiplier_sum.filter(|sum| !sum.is_zero()),
        }
    }

    // `remaining * multiplier / sum`, divided once so exact halves reach rounding.
    fn variable_share(pool: &Pool, multiplier: Multiplier) -> Money {
        pool.multiplier_sum
            .and_then(|sum| {
                pool.remaining
                    .as_decimal()
                    .checked_mul(multiplier.value())?
                    .checked_div(sum)
            })
            .map(Money::from_decimal_rounded)
            .unwrap_or(Money::ZERO)
    }
}

impl Pool {
    fn base_unit(&self) -> Option<Decimal> {
        self.multiplier_sum
            .and_then(|sum| self.remaining.as_decimal().checked_div(sum))
    }
}
