pub mod attendance;
pub mod response_reconciler;
pub mod split_calculator;

pub use attendance::{AttendanceMatcher, DateTally};
pub use response_reconciler::ResponseReconciler;
pub use split_calculator::{Share, SplitCalculator, SplitSummary};
