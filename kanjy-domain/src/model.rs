use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("multiplier must not be negative (found {0})")]
    NegativeMultiplier(Decimal),
    #[error("'{0}' is not a valid multiplier")]
    MalformedMultiplier(String),
    #[error("'{0}' is not a standard role")]
    UnknownRole(String),
    #[error("{0} is not one of the candidate dates")]
    UnknownCandidate(DateTime<Utc>),
}

/// Amount in the smallest currency unit (1 yen).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Rounds half away from zero; values outside `u64` collapse to zero.
    pub fn from_decimal_rounded(value: Decimal) -> Self {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(rounded.to_u64().unwrap_or(0))
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Signed difference `self - rhs`.
    pub fn difference(self, rhs: Self) -> i128 {
        i128::from(self.0) - i128::from(rhs.0)
    }

    /// Keeps only digits (ASCII or full-width) and parses the rest.
    ///
    /// Empty, digit-less or overflowing input yields zero.
    pub fn parse_lenient(text: &str) -> Self {
        let digits: String = text
            .chars()
            .filter_map(|c| match c {
                '0'..='9' => Some(c),
                '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10),
                _ => None,
            })
            .collect();
        Self(digits.parse().unwrap_or(0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Weight of a participant in the split. Never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Multiplier(Decimal);

impl Multiplier {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::NegativeMultiplier(value));
        }
        Ok(Self(value.normalize()))
    }

    /// `tenths / 10`, e.g. `from_tenths(15)` is 1.5.
    pub fn from_tenths(tenths: u32) -> Self {
        Self(Decimal::new(i64::from(tenths), 1).normalize())
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Multiplier {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for Decimal {
    fn from(value: Multiplier) -> Self {
        value.0
    }
}

impl FromStr for Multiplier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::MalformedMultiplier(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardRole {
    Director,
    Manager,
    Staff,
    Newcomer,
}

impl StandardRole {
    pub const ALL: [StandardRole; 4] = [
        StandardRole::Director,
        StandardRole::Manager,
        StandardRole::Staff,
        StandardRole::Newcomer,
    ];

    /// Role given to participants that come from web responses.
    pub const BASE: StandardRole = StandardRole::Staff;

    pub fn default_multiplier(self) -> Multiplier {
        match self {
            StandardRole::Director => Multiplier::from_tenths(15),
            StandardRole::Manager => Multiplier::from_tenths(12),
            StandardRole::Staff => Multiplier::ONE,
            StandardRole::Newcomer => Multiplier::from_tenths(8),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            StandardRole::Director => "director",
            StandardRole::Manager => "manager",
            StandardRole::Staff => "staff",
            StandardRole::Newcomer => "newcomer",
        }
    }
}

impl FromStr for StandardRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        StandardRole::ALL
            .into_iter()
            .find(|role| role.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

/// Organizer-editable multipliers for the standard roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTable {
    multipliers: IndexMap<StandardRole, Multiplier>,
}

impl RoleTable {
    pub fn multiplier(&self, role: StandardRole) -> Multiplier {
        self.multipliers
            .get(&role)
            .copied()
            .unwrap_or_else(|| role.default_multiplier())
    }

    pub fn set(&mut self, role: StandardRole, multiplier: Multiplier) {
        self.multipliers.insert(role, multiplier);
    }

    pub fn iter(&self) -> impl Iterator<Item = (StandardRole, Multiplier)> + '_ {
        StandardRole::ALL
            .into_iter()
            .map(|role| (role, self.multiplier(role)))
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self {
            multipliers: StandardRole::ALL
                .into_iter()
                .map(|role| (role, role.default_multiplier()))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoleAssignment {
    Standard { role: StandardRole },
    Custom { name: String, multiplier: Multiplier },
}

impl RoleAssignment {
    pub fn standard(role: StandardRole) -> Self {
        RoleAssignment::Standard { role }
    }

    pub fn custom(name: impl Into<String>, multiplier: Multiplier) -> Self {
        RoleAssignment::Custom {
            name: name.into(),
            multiplier,
        }
    }

    pub fn effective_multiplier(&self, table: &RoleTable) -> Multiplier {
        match self {
            RoleAssignment::Standard { role } => table.multiplier(*role),
            RoleAssignment::Custom { multiplier, .. } => *multiplier,
        }
    }
}

impl Default for RoleAssignment {
    fn default() -> Self {
        RoleAssignment::standard(StandardRole::BASE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantSource {
    Manual,
    WebResponse,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub role: RoleAssignment,
    pub collected: bool,
    /// When set, the participant pays exactly this and their multiplier is ignored.
    pub fixed_amount: Option<Money>,
    pub source: ParticipantSource,
}

impl Participant {
    pub fn manual(name: impl Into<String>, role: RoleAssignment) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            role,
            collected: false,
            fixed_amount: None,
            source: ParticipantSource::Manual,
        }
    }

    /// Synthesizes a participant from a response. The link is by name only.
    pub fn from_response(response: &RsvpResponse) -> Self {
        Self {
            id: ParticipantId::new(),
            name: response.participant_name.clone(),
            role: RoleAssignment::default(),
            collected: false,
            fixed_amount: None,
            source: ParticipantSource::WebResponse,
        }
    }

    pub fn with_fixed_amount(mut self, amount: Money) -> Self {
        self.fixed_amount = Some(amount);
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed_amount.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Attending,
    Maybe,
    NotAttending,
    #[default]
    Undecided,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpResponse {
    /// Free text typed by the respondent; not a stable identity.
    pub participant_name: String,
    #[serde(default)]
    pub status: RsvpStatus,
    #[serde(default)]
    pub available_dates: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub maybe_dates: Vec<DateTime<Utc>>,
    pub responded_at: DateTime<Utc>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event metadata together with its candidate dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSchedule {
    pub title: String,
    candidate_dates: Vec<DateTime<Utc>>,
    confirmed_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub memo: Option<String>,
}

impl CandidateSchedule {
    pub fn new<I>(title: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let mut candidate_dates: Vec<DateTime<Utc>> = candidates.into_iter().collect();
        candidate_dates.sort_unstable();
        candidate_dates.dedup();
        Self {
            title: title.into(),
            candidate_dates,
            confirmed_date: None,
            location: None,
            memo: None,
        }
    }

    /// Candidate dates in ascending order.
    pub fn candidate_dates(&self) -> &[DateTime<Utc>] {
        &self.candidate_dates
    }

    pub fn confirmed_date(&self) -> Option<DateTime<Utc>> {
        self.confirmed_date
    }

    pub fn confirm(&mut self, date: DateTime<Utc>) -> Result<(), DomainError> {
        if self.candidate_dates.binary_search(&date).is_err() {
            return Err(DomainError::UnknownCandidate(date));
        }
        self.confirmed_date = Some(date);
        Ok(())
    }

    pub fn clear_confirmation(&mut self) {
        self.confirmed_date = None;
    }
}
