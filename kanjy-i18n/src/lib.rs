#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PAYMENT_REQUEST_HEADER: &str = "【集金のお願い】";
    pub const INVITATION_HEADER: &str = "【日程調整のお願い】";
    pub const DATE: &str = "日時";
    pub const DATE_UNDECIDED: &str = "未定";
    pub const LOCATION: &str = "場所";
    pub const MEMO: &str = "メモ";
    pub const TOTAL: &str = "合計";
    pub const COLLECTED: &str = "集金済";
    pub const NOT_COLLECTED: &str = "未集金";
    pub const FIXED: &str = "固定";
    pub const AVAILABLE: &str = "○";
    pub const MAYBE: &str = "△";
    pub const MOST_VOTED: &str = "★";
    pub const CURRENCY_SUFFIX: &str = "円";
    pub const NO_PARTICIPANTS: &str = "参加者がいません";
    pub const DIRECTOR: &str = "部長";
    pub const MANAGER: &str = "課長";
    pub const STAFF: &str = "一般";
    pub const NEWCOMER: &str = "新人";
    pub const WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];
}

#[cfg(feature = "en")]
pub mod strings {
    pub const PAYMENT_REQUEST_HEADER: &str = "[Payment request]";
    pub const INVITATION_HEADER: &str = "[Schedule poll]";
    pub const DATE: &str = "Date";
    pub const DATE_UNDECIDED: &str = "TBD";
    pub const LOCATION: &str = "Place";
    pub const MEMO: &str = "Memo";
    pub const TOTAL: &str = "Total";
    pub const COLLECTED: &str = "paid";
    pub const NOT_COLLECTED: &str = "unpaid";
    pub const FIXED: &str = "fixed";
    pub const AVAILABLE: &str = "OK";
    pub const MAYBE: &str = "Maybe";
    pub const MOST_VOTED: &str = "*";
    pub const CURRENCY_SUFFIX: &str = " JPY";
    pub const NO_PARTICIPANTS: &str = "No participants";
    pub const DIRECTOR: &str = "Director";
    pub const MANAGER: &str = "Manager";
    pub const STAFF: &str = "Staff";
    pub const NEWCOMER: &str = "Newcomer";
    pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const PAYMENT_REQUEST_HEADER: &str = "[Payment request]";
    pub const INVITATION_HEADER: &str = "[Schedule poll]";
    pub const DATE: &str = "Date";
    pub const DATE_UNDECIDED: &str = "TBD";
    pub const LOCATION: &str = "Place";
    pub const MEMO: &str = "Memo";
    pub const TOTAL: &str = "Total";
    pub const COLLECTED: &str = "paid";
    pub const NOT_COLLECTED: &str = "unpaid";
    pub const FIXED: &str = "fixed";
    pub const AVAILABLE: &str = "OK";
    pub const MAYBE: &str = "Maybe";
    pub const MOST_VOTED: &str = "*";
    pub const CURRENCY_SUFFIX: &str = " JPY";
    pub const NO_PARTICIPANTS: &str = "No participants";
    pub const DIRECTOR: &str = "Director";
    pub const MANAGER: &str = "Manager";
    pub const STAFF: &str = "Staff";
    pub const NEWCOMER: &str = "Newcomer";
    pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn collection_progress(collected: usize, total: usize) -> String {
    format!("集金状況: {collected}/{total}人")
}

#[cfg(feature = "ja")]
pub fn rounding_residue(residue: i128) -> String {
    if residue >= 0 {
        format!("端数: {residue}円不足")
    } else {
        format!("端数: {}円超過", residue.unsigned_abs())
    }
}

#[cfg(feature = "ja")]
pub fn unallocated(amount: i128) -> String {
    if amount >= 0 {
        format!("未割当: {amount}円")
    } else {
        format!("固定額が合計を{}円超過", amount.unsigned_abs())
    }
}

#[cfg(feature = "ja")]
pub fn please_pay_by(name: impl std::fmt::Display) -> String {
    format!("{name}さんまでお支払いをお願いします。")
}

#[cfg(feature = "en")]
pub fn collection_progress(collected: usize, total: usize) -> String {
    format!("Collected: {collected}/{total}")
}

#[cfg(feature = "en")]
pub fn rounding_residue(residue: i128) -> String {
    if residue >= 0 {
        format!("Rounding: {residue} short")
    } else {
        format!("Rounding: {} over", residue.unsigned_abs())
    }
}

#[cfg(feature = "en")]
pub fn unallocated(amount: i128) -> String {
    if amount >= 0 {
        format!("Unallocated: {amount}")
    } else {
        format!("Fixed amounts exceed the total by {}", amount.unsigned_abs())
    }
}

#[cfg(feature = "en")]
pub fn please_pay_by(name: impl std::fmt::Display) -> String {
    format!("Please pay {name}.")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn collection_progress(collected: usize, total: usize) -> String {
    format!("Collected: {collected}/{total}")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn rounding_residue(residue: i128) -> String {
    if residue >= 0 {
        format!("Rounding: {residue} short")
    } else {
        format!("Rounding: {} over", residue.unsigned_abs())
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn unallocated(amount: i128) -> String {
    if amount >= 0 {
        format!("Unallocated: {amount}")
    } else {
        format!("Fixed amounts exceed the total by {}", amount.unsigned_abs())
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn please_pay_by(name: impl std::fmt::Display) -> String {
    format!("Please pay {name}.")
}
