use crate::format::format_date;
use kanjy_application::EventSession;
use kanjy_i18n as i18n;
use std::fmt::Write as _;

/// Candidate dates with their current vote counts.
pub struct InvitationPresenter;

impl InvitationPresenter {
    pub fn render(session: &EventSession) -> String {
        let schedule = session.schedule();
        let matcher = session.matcher();
        let tally = matcher.tally(schedule.candidate_dates(), session.responses());
        let leader = session
            .most_voted_date()
            .filter(|date| matcher.count_available(session.responses(), *date) > 0);

        let mut reply = String::with_capacity(128 + tally.len() * 48);
        let _ = writeln!(reply, "{}", i18n::INVITATION_HEADER);
        let _ = writeln!(reply, "{}", schedule.title);
        if let Some(location) = &schedule.location {
            let _ = writeln!(reply, "{}: {location}", i18n::LOCATION);
        }
        reply.push('\n');

        for entry in &tally {
            let mark = if Some(entry.date) == leader {
                i18n::MOST_VOTED
            } else {
                " "
            };
            let _ = writeln!(
                reply,
                "{mark} {}  {}{} {}{}",
                format_date(entry.date, matcher.offset()),
                i18n::AVAILABLE,
                entry.available,
                i18n::MAYBE,
                entry.maybe
            );
        }

        if let Some(memo) = &schedule.memo {
            reply.push('\n');
            let _ = writeln!(reply, "{}: {memo}", i18n::MEMO);
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use kanjy_application::KanjyConfig;
    use kanjy_domain::{CandidateSchedule, RsvpResponse, RsvpStatus};

    fn jst(day: u32, hour: u32) -> DateTime<Utc> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, day, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn response(available: &[DateTime<Utc>], maybe: &[DateTime<Utc>]) -> RsvpResponse {
        RsvpResponse {
            participant_name: "guest".to_string(),
            status: RsvpStatus::Attending,
            available_dates: available.to_vec(),
            maybe_dates: maybe.to_vec(),
            responded_at: jst(1, 12),
            comment: None,
        }
    }

    fn session() -> EventSession {
        let mut schedule = CandidateSchedule::new("歓迎会", [jst(16, 19), jst(15, 19)]);
        schedule.memo = Some("飲み放題あり".to_string());
        EventSession::new(schedule, &KanjyConfig::default())
    }

    fn line_for(text: &str, date: DateTime<Utc>) -> String {
        let formatted = format_date(date, FixedOffset::east_opt(9 * 3600).unwrap());
        text.lines()
            .find(|line| line.contains(&formatted))
            .map(str::to_string)
            .unwrap_or_default()
    }

    #[test]
    fn lists_candidates_in_order_with_counts() {
        let mut session = session();
        session.sync_with_responses(vec![
            response(&[jst(16, 19)], &[jst(15, 19)]),
            response(&[jst(16, 12)], &[]),
        ]);

        let text = InvitationPresenter::render(&session);
        let first = line_for(&text, jst(15, 19));
        let second = line_for(&text, jst(16, 19));

        assert!(text.find(&first) < text.find(&second));
        assert!(first.ends_with(&format!("{}0 {}1", i18n::AVAILABLE, i18n::MAYBE)));
        assert!(second.starts_with(i18n::MOST_VOTED));
        assert!(second.ends_with(&format!("{}2 {}0", i18n::AVAILABLE, i18n::MAYBE)));
        assert!(text.contains(&format!("{}: 飲み放題あり", i18n::MEMO)));
    }

    #[test]
    fn no_mark_without_votes() {
        let text = InvitationPresenter::render(&session());
        assert!(!text.contains(i18n::MOST_VOTED));
    }
}
