use crate::format::format_amount;
use kanjy_application::CollectionStatus;
use kanjy_i18n as i18n;

pub struct CollectionPresenter;

impl CollectionPresenter {
    /// `集金状況: 1/3人 (3,000円 / 9,000円)`
    pub fn render(status: &CollectionStatus) -> String {
        let expected = status.collected_amount + status.outstanding_amount;
        format!(
            "{} ({} / {})",
            i18n::collection_progress(status.collected_count, status.participant_count),
            format_amount(status.collected_amount),
            format_amount(expected)
        )
    }
}
