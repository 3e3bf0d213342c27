use crate::config::FormConfig;
use crate::domain::model::SubmitDecision;
use crate::domain::ports::{Checkbox, HintElement, Notifier};
use std::sync::Arc;

pub const ERROR_BORDER: &str = "2px solid #dc3545";
pub const NO_BORDER: &str = "none";

/// 送出前至少要勾選一種貢獻方式（志工或捐款）
pub struct SubmissionGuard {
    volunteer: Arc<dyn Checkbox>,
    donor: Arc<dyn Checkbox>,
    hint: Arc<dyn HintElement>,
    notifier: Arc<dyn Notifier>,
    message: String,
}

impl SubmissionGuard {
    pub fn new(
        volunteer: Arc<dyn Checkbox>,
        donor: Arc<dyn Checkbox>,
        hint: Arc<dyn HintElement>,
        notifier: Arc<dyn Notifier>,
        config: &FormConfig,
    ) -> Self {
        Self {
            volunteer,
            donor,
            hint,
            notifier,
            message: config.messages.missing_contribution.clone(),
        }
    }

    pub fn on_submit(&self) -> SubmitDecision {
        if !self.volunteer.is_checked() && !self.donor.is_checked() {
            tracing::debug!("Submission blocked: no contribution selected");
            self.notifier.notify(&self.message);
            self.hint.set_border(ERROR_BORDER);
            return SubmitDecision::Cancel;
        }

        self.hint.set_border(NO_BORDER);
        SubmitDecision::Proceed
    }
}
