use crate::format::{format_amount, format_date, role_label};
use kanjy_application::EventSession;
use kanjy_i18n as i18n;
use std::fmt::Write as _;

/// Text the organizer pastes into a chat to ask everyone to pay.
pub struct PaymentRequestPresenter;

impl PaymentRequestPresenter {
    pub fn render(session: &EventSession) -> String {
        Self::render_with_organizer(session, None)
    }

    pub fn render_with_organizer(session: &EventSession, organizer: Option<&str>) -> String {
        let schedule = session.schedule();
        let offset = session.matcher().offset();
        let mut reply = String::with_capacity(256);

        let _ = writeln!(reply, "{}", i18n::PAYMENT_REQUEST_HEADER);
        let _ = writeln!(reply, "{}", schedule.title);
        let date = schedule
            .confirmed_date()
            .map(|date| format_date(date, offset))
            .unwrap_or_else(|| i18n::DATE_UNDECIDED.to_string());
        let _ = writeln!(reply, "{}: {date}", i18n::DATE);
        if let Some(location) = &schedule.location {
            let _ = writeln!(reply, "{}: {location}", i18n::LOCATION);
        }
        let _ = writeln!(reply, "{}: {}", i18n::TOTAL, format_amount(session.total()));
        reply.push('\n');

        if session.roster().is_empty() {
            let _ = writeln!(reply, "{}", i18n::NO_PARTICIPANTS);
        }
        for (participant, share) in session.roster().iter().zip(session.shares()) {
            let label = if participant.is_fixed() {
                i18n::FIXED
            } else {
                role_label(&participant.role)
            };
            let state = if participant.collected {
                i18n::COLLECTED
            } else {
                i18n::NOT_COLLECTED
            };
            let _ = writeln!(
                reply,
                "・{} ({label}): {} [{state}]",
                participant.name,
                format_amount(share.amount)
            );
        }

        let summary = session.split_summary();
        if summary.rounding_residue != 0 && !session.roster().is_empty() {
            // Without a base unit nothing was rounded; the gap is just unassigned.
            let line = match summary.base_unit {
                Some(_) => i18n::rounding_residue(summary.rounding_residue),
                None => i18n::unallocated(summary.rounding_residue),
            };
            let _ = writeln!(reply, "{line}");
        }
        if let Some(memo) = &schedule.memo {
            let _ = writeln!(reply, "{}: {memo}", i18n::MEMO);
        }
        if let Some(name) = organizer {
            reply.push('\n');
            reply.push_str(&i18n::please_pay_by(name));
            reply.push('\n');
        }

        reply
    }
}
