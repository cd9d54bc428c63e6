use chrono::{DateTime, Datelike, FixedOffset, Utc};
use kanjy_domain::{Money, RoleAssignment, StandardRole};
use kanjy_i18n as i18n;

/// `12345` -> `12,345円`
pub fn format_amount(amount: Money) -> String {
    let digits = amount.amount().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(i18n::CURRENCY_SUFFIX);
    grouped
}

/// `2024/01/15(月) 19:00` in the organizer's time zone.
pub fn format_date(date: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = date.with_timezone(&offset);
    let weekday = i18n::WEEKDAYS[local.weekday().num_days_from_monday() as usize];
    format!("{}({weekday}) {}", local.format("%Y/%m/%d"), local.format("%H:%M"))
}

pub fn role_label(role: &RoleAssignment) -> &str {
    match role {
        RoleAssignment::Standard { role } => standard_role_label(*role),
        RoleAssignment::Custom { name, .. } => name,
    }
}

pub fn standard_role_label(role: StandardRole) -> &'static str {
    match role {
        StandardRole::Director => i18n::DIRECTOR,
        StandardRole::Manager => i18n::MANAGER,
        StandardRole::Staff => i18n::STAFF,
        StandardRole::Newcomer => i18n::NEWCOMER,
    }
}
