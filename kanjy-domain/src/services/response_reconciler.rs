use crate::{
    model::{Participant, RsvpResponse, RsvpStatus},
    services::AttendanceMatcher,
};
use chrono::{DateTime, Utc};

/// Builds the working roster from form responses.
///
/// The returned list is meant to replace the current roster wholesale.
/// Responses are not de-duplicated: two respondents typing the same name
/// become two participants, and the only link back to a response is that name.
pub struct ResponseReconciler {
    matcher: AttendanceMatcher,
}

impl ResponseReconciler {
    pub fn new(matcher: AttendanceMatcher) -> Self {
        Self { matcher }
    }

    /// With a confirmed date, keeps attending respondents available that day.
    /// Without one, keeps everybody regardless of status.
    pub fn reconcile(
        &self,
        responses: &[RsvpResponse],
        confirmed_date: Option<DateTime<Utc>>,
    ) -> Vec<Participant> {
        let roster: Vec<Participant> = responses
            .iter()
            .filter(|response| match confirmed_date {
                Some(date) => {
                    response.status == RsvpStatus::Attending
                        && self.matcher.is_available_on(response, date)
                }
                None => true,
            })
            .map(Participant::from_response)
            .collect();

        tracing::debug!(
            response_count = responses.len(),
            participant_count = roster.len(),
            confirmed_date = ?confirmed_date,
            "Roster reconciled from responses"
        );
        roster
    }
}

impl Default for ResponseReconciler {
    fn default() -> Self {
        Self::new(AttendanceMatcher::default())
    }
}
