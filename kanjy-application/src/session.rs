use crate::{config::KanjyConfig, error::SessionError, ports::ResponseStore};
use chrono::{DateTime, Utc};
use kanjy_domain::{
    AttendanceMatcher, CandidateSchedule, EventId, Money, Multiplier, Participant, ParticipantId,
    ResponseReconciler, RoleAssignment, RoleTable, RsvpResponse, Share, SplitCalculator,
    SplitSummary, StandardRole,
};

/// Working state of one event on the organizer's device.
///
/// Owned by the caller; nothing here is shared or global.
pub struct EventSession {
    schedule: CandidateSchedule,
    roster: Vec<Participant>,
    roles: RoleTable,
    total_text: String,
    responses: Vec<RsvpResponse>,
    matcher: AttendanceMatcher,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionStatus {
    pub participant_count: usize,
    pub collected_count: usize,
    pub collected_amount: Money,
    pub outstanding_amount: Money,
}

impl CollectionStatus {
    pub fn is_complete(&self) -> bool {
        self.collected_count == self.participant_count
    }
}

impl EventSession {
    pub fn new(schedule: CandidateSchedule, config: &KanjyConfig) -> Self {
        Self {
            schedule,
            roster: Vec::new(),
            roles: config.role_table.clone(),
            total_text: String::new(),
            responses: Vec::new(),
            matcher: config.matcher(),
        }
    }

    pub fn schedule(&self) -> &CandidateSchedule {
        &self.schedule
    }

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    pub fn responses(&self) -> &[RsvpResponse] {
        &self.responses
    }

    pub fn matcher(&self) -> AttendanceMatcher {
        self.matcher
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn add_participant(
        &mut self,
        name: impl Into<String>,
        role: RoleAssignment,
    ) -> ParticipantId {
        let participant = Participant::manual(name, role);
        let id = participant.id;
        tracing::debug!(participant_id = %id, name = %participant.name, "Participant added");
        self.roster.push(participant);
        id
    }

    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant, SessionError> {
        let index = self
            .roster
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::UnknownParticipant(id))?;
        let removed = self.roster.remove(index);
        tracing::debug!(participant_id = %id, name = %removed.name, "Participant removed");
        Ok(removed)
    }

    /// Renaming a participant that came from a response cuts its only link to that response.
    pub fn rename_participant(
        &mut self,
        id: ParticipantId,
        name: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.participant_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_role(
        &mut self,
        id: ParticipantId,
        role: RoleAssignment,
    ) -> Result<(), SessionError> {
        self.participant_mut(id)?.role = role;
        Ok(())
    }

    /// Flips the collected flag and returns the new value.
    pub fn toggle_collected(&mut self, id: ParticipantId) -> Result<bool, SessionError> {
        let participant = self.participant_mut(id)?;
        participant.collected = !participant.collected;
        Ok(participant.collected)
    }

    pub fn set_fixed_amount(
        &mut self,
        id: ParticipantId,
        amount: Option<Money>,
    ) -> Result<(), SessionError> {
        self.participant_mut(id)?.fixed_amount = amount;
        Ok(())
    }

    /// Stores the text as typed; see [`EventSession::total`] for the parsed value.
    pub fn set_total_text(&mut self, text: impl Into<String>) {
        self.total_text = text.into();
    }

    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    pub fn total(&self) -> Money {
        Money::parse_lenient(&self.total_text)
    }

    pub fn set_role_multiplier(&mut self, role: StandardRole, multiplier: Multiplier) {
        self.roles.set(role, multiplier);
    }

    /// Confirms one of the candidate dates and rebuilds the roster from the
    /// responses already held by the session.
    pub fn confirm_date(&mut self, date: DateTime<Utc>) -> Result<(), SessionError> {
        self.schedule.confirm(date)?;
        tracing::info!(confirmed_date = %date, "Date confirmed");
        self.rebuild_roster();
        Ok(())
    }

    /// Drops the confirmation. The roster is left as is.
    pub fn clear_confirmed_date(&mut self) {
        self.schedule.clear_confirmation();
    }

    /// Replaces the held responses and the whole roster.
    ///
    /// Manually added participants, collected flags and fixed amounts are lost.
    pub fn sync_with_responses(&mut self, responses: Vec<RsvpResponse>) -> usize {
        self.responses = responses;
        self.rebuild_roster()
    }

    pub fn refresh_responses(
        &mut self,
        store: &dyn ResponseStore,
        event_id: &EventId,
    ) -> Result<usize, SessionError> {
        let responses = store.responses(event_id).inspect_err(|err| {
            tracing::warn!(event_id = %event_id, error = %err, "Failed to load responses");
        })?;
        Ok(self.sync_with_responses(responses))
    }

    pub fn most_voted_date(&self) -> Option<DateTime<Utc>> {
        self.matcher
            .most_voted(self.schedule.candidate_dates(), &self.responses)
    }

    pub fn shares(&self) -> Vec<Share> {
        SplitCalculator::new(&self.roles).shares(self.total(), &self.roster)
    }

    pub fn share_of(&self, id: ParticipantId) -> Option<Money> {
        let participant = self.participant(id)?;
        Some(SplitCalculator::new(&self.roles).share(self.total(), participant, &self.roster))
    }

    pub fn split_summary(&self) -> SplitSummary {
        SplitCalculator::new(&self.roles).summary(self.total(), &self.roster)
    }

    pub fn collection_status(&self) -> CollectionStatus {
        let mut status = CollectionStatus {
            participant_count: self.roster.len(),
            collected_count: 0,
            collected_amount: Money::ZERO,
            outstanding_amount: Money::ZERO,
        };
        for (participant, share) in self.roster.iter().zip(self.shares()) {
            if participant.collected {
                status.collected_count += 1;
                status.collected_amount += share.amount;
            } else {
                status.outstanding_amount += share.amount;
            }
        }
        status
    }

    fn rebuild_roster(&mut self) -> usize {
        let reconciler = ResponseReconciler::new(self.matcher);
        let previous = self.roster.len();
        self.roster = reconciler.reconcile(&self.responses, self.schedule.confirmed_date());
        tracing::info!(
            response_count = self.responses.len(),
            previous_participants = previous,
            participants = self.roster.len(),
            confirmed_date = ?self.schedule.confirmed_date(),
            "Roster replaced from responses"
        );
        self.roster.len()
    }

    fn participant_mut(&mut self, id: ParticipantId) -> Result<&mut Participant, SessionError> {
        self.roster
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SessionError::UnknownParticipant(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use chrono::{FixedOffset, TimeZone};
    use fxhash::FxHashMap;
    use kanjy_domain::{DomainError, ParticipantSource, RsvpStatus};
    use rstest::{fixture, rstest};

    fn jst(day: u32, hour: u32) -> DateTime<Utc> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, day, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn response(name: &str, status: RsvpStatus, available: &[DateTime<Utc>]) -> RsvpResponse {
        RsvpResponse {
            participant_name: name.to_string(),
            status,
            available_dates: available.to_vec(),
            maybe_dates: Vec::new(),
            responded_at: jst(1, 12),
            comment: None,
        }
    }

    #[fixture]
    fn session() -> EventSession {
        let schedule = CandidateSchedule::new("新年会", [jst(15, 19), jst(16, 19)]);
        EventSession::new(schedule, &KanjyConfig::default())
    }

    fn responses() -> Vec<RsvpResponse> {
        vec![
            response("佐藤", RsvpStatus::Attending, &[jst(15, 19)]),
            response("鈴木", RsvpStatus::Attending, &[jst(15, 12), jst(16, 19)]),
            response("高橋", RsvpStatus::NotAttending, &[]),
        ]
    }

    #[rstest]
    fn total_text_is_normalized(mut session: EventSession) {
        session.set_total_text("¥12,000-");
        assert_eq!(session.total_text(), "¥12,000-");
        assert_eq!(session.total(), Money::from_u64(12000));

        session.set_total_text("未定");
        assert_eq!(session.total(), Money::ZERO);
    }

    #[rstest]
    fn roster_edits_flow_into_shares(mut session: EventSession) {
        let boss =
            session.add_participant("部長", RoleAssignment::standard(StandardRole::Director));
        let staff =
            session.add_participant("一般", RoleAssignment::standard(StandardRole::Staff));
        session.set_total_text("10000");
        session.set_role_multiplier(StandardRole::Director, Multiplier::from_tenths(40));

        assert_eq!(session.share_of(boss), Some(Money::from_u64(8000)));
        assert_eq!(session.share_of(staff), Some(Money::from_u64(2000)));

        session.set_fixed_amount(boss, Some(Money::from_u64(7000))).unwrap();
        assert_eq!(session.share_of(boss), Some(Money::from_u64(7000)));
        assert_eq!(session.share_of(staff), Some(Money::from_u64(3000)));

        session.set_role(staff, RoleAssignment::custom("ゲスト", Multiplier::ZERO)).unwrap();
        assert_eq!(session.share_of(staff), Some(Money::ZERO));
    }

    #[rstest]
    fn unknown_participant_is_reported(mut session: EventSession) {
        let stranger = ParticipantId::new();
        assert_eq!(
            session.toggle_collected(stranger),
            Err(SessionError::UnknownParticipant(stranger))
        );
        assert_eq!(
            session.remove_participant(stranger),
            Err(SessionError::UnknownParticipant(stranger))
        );
        assert_eq!(session.share_of(stranger), None);
    }

    #[rstest]
    fn rename_and_remove(mut session: EventSession) {
        let id = session.add_participant("さとう", RoleAssignment::default());
        session.rename_participant(id, "佐藤").unwrap();
        assert_eq!(session.participant(id).map(|p| p.name.as_str()), Some("佐藤"));

        let removed = session.remove_participant(id).unwrap();
        assert_eq!(removed.name, "佐藤");
        assert!(session.roster().is_empty());
    }

    #[rstest]
    fn collection_status_tracks_collected_flags(mut session: EventSession) {
        let a = session.add_participant("A", RoleAssignment::default());
        session.add_participant("B", RoleAssignment::default());
        session.add_participant("C", RoleAssignment::default());
        session.set_total_text("9000");

        assert!(session.toggle_collected(a).unwrap());
        let status = session.collection_status();
        assert_eq!(
            status,
            CollectionStatus {
                participant_count: 3,
                collected_count: 1,
                collected_amount: Money::from_u64(3000),
                outstanding_amount: Money::from_u64(6000),
            }
        );
        assert!(!status.is_complete());

        assert!(!session.toggle_collected(a).unwrap());
        assert_eq!(session.collection_status().collected_count, 0);
    }

    #[rstest]
    fn sync_replaces_manual_participants(mut session: EventSession) {
        session.add_participant("手入力", RoleAssignment::default());

        assert_eq!(session.sync_with_responses(responses()), 3);
        assert!(
            session
                .roster()
                .iter()
                .all(|p| p.source == ParticipantSource::WebResponse)
        );
    }

    #[rstest]
    fn confirming_a_date_filters_roster(mut session: EventSession) {
        session.sync_with_responses(responses());
        session.confirm_date(jst(16, 19)).unwrap();

        let names: Vec<&str> = session.roster().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["鈴木"]);

        session.clear_confirmed_date();
        assert_eq!(session.schedule().confirmed_date(), None);
        assert_eq!(session.roster().len(), 1);
    }

    #[rstest]
    fn confirming_an_unknown_date_fails(mut session: EventSession) {
        session.sync_with_responses(responses());
        let result = session.confirm_date(jst(20, 19));

        assert_eq!(
            result,
            Err(SessionError::Domain(DomainError::UnknownCandidate(jst(20, 19))))
        );
        assert_eq!(session.roster().len(), 3);
    }

    #[rstest]
    fn most_voted_date_uses_held_responses(mut session: EventSession) {
        assert_eq!(session.most_voted_date(), Some(jst(15, 19)));
        session.sync_with_responses(vec![
            response("A", RsvpStatus::Attending, &[jst(16, 19)]),
        ]);
        assert_eq!(session.most_voted_date(), Some(jst(16, 19)));
    }

    #[rstest]
    fn refresh_loads_through_the_store(mut session: EventSession) {
        let event = EventId::new("evt-1");
        let mut store: FxHashMap<EventId, Vec<RsvpResponse>> = FxHashMap::default();
        store.insert(event.clone(), responses());

        assert_eq!(session.refresh_responses(&store, &event), Ok(3));
        assert_eq!(session.responses().len(), 3);

        let missing = EventId::new("evt-404");
        assert_eq!(
            session.refresh_responses(&store, &missing),
            Err(SessionError::Store(StoreError::EventNotFound(missing.clone())))
        );
        assert_eq!(session.roster().len(), 3);
    }
}
