use crate::model::RsvpResponse;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Compares dates by calendar day in the organizer's time zone.
///
/// Every comparison between a response and a candidate or confirmed date goes
/// through here, so a 09:00 answer and a 21:00 answer on the same local day
/// both count for that day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceMatcher {
    offset: FixedOffset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTally {
    pub date: DateTime<Utc>,
    pub available: usize,
    pub maybe: usize,
}

impl AttendanceMatcher {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Japan Standard Time (UTC+09:00).
    pub fn jst() -> Self {
        Self::new(FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix()))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn local_day(&self, date: DateTime<Utc>) -> NaiveDate {
        date.with_timezone(&self.offset).date_naive()
    }

    pub fn is_same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.local_day(a) == self.local_day(b)
    }

    pub fn is_available_on(&self, response: &RsvpResponse, date: DateTime<Utc>) -> bool {
        self.contains_day(&response.available_dates, date)
    }

    pub fn is_maybe_on(&self, response: &RsvpResponse, date: DateTime<Utc>) -> bool {
        self.contains_day(&response.maybe_dates, date)
    }

    pub fn count_available(&self, responses: &[RsvpResponse], date: DateTime<Utc>) -> usize {
        responses
            .iter()
            .filter(|response| self.is_available_on(response, date))
            .count()
    }

    pub fn count_maybe(&self, responses: &[RsvpResponse], date: DateTime<Utc>) -> usize {
        responses
            .iter()
            .filter(|response| self.is_maybe_on(response, date))
            .count()
    }

    /// Candidate with the most available votes.
    ///
    /// Ties go to the earliest candidate. Returns `None` only for an empty
    /// candidate list.
    pub fn most_voted(
        &self,
        candidates: &[DateTime<Utc>],
        responses: &[RsvpResponse],
    ) -> Option<DateTime<Utc>> {
        let mut sorted = candidates.to_vec();
        sorted.sort_unstable();

        let mut best: Option<(DateTime<Utc>, usize)> = None;
        for date in sorted {
            let count = self.count_available(responses, date);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((date, count)),
            }
        }
        best.map(|(date, _)| date)
    }

    /// Available and maybe counts for each candidate, in ascending date order.
    pub fn tally(
        &self,
        candidates: &[DateTime<Utc>],
        responses: &[RsvpResponse],
    ) -> Vec<DateTally> {
        let mut sorted = candidates.to_vec();
        sorted.sort_unstable();
        sorted
            .into_iter()
            .map(|date| DateTally {
                date,
                available: self.count_available(responses, date),
                maybe: self.count_maybe(responses, date),
            })
            .collect()
    }

    fn contains_day(&self, dates: &[DateTime<Utc>], date: DateTime<Utc>) -> bool {
        let day = self.local_day(date);
        dates.iter().any(|candidate| self.local_day(*candidate) == day)
    }
}

impl Default for AttendanceMatcher {
    fn default() -> Self {
        Self::jst()
    }
}
