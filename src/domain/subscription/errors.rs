//! Subscription-specific error types.
//!
//! Display strings are the user-facing Hebrew messages; machine detail from
//! collaborator failures is logged at the call site and deliberately not
//! carried into the user-visible surface.

use thiserror::Error;

use crate::domain::foundation::PlanId;

/// Errors surfaced by the subscription decision and execution flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// Requested plan is not in the catalog.
    #[error("המסלול המבוקש לא נמצא")]
    PlanNotFound(PlanId),

    /// Business-rule denial pre-computed in the decision. The message is the
    /// decision's own.
    #[error("{message}")]
    CannotProceed { message: String },

    /// Cancelling the existing pending transaction failed; the whole
    /// operation was aborted.
    #[error("אירעה שגיאה בביטול המנוי הממתין. אנא נסה שוב")]
    PendingCancellationFailed,

    /// Payment-process creation against the gateway failed.
    #[error("אירעה שגיאה ביצירת תהליך התשלום. אנא נסה שוב")]
    PaymentProcessFailed,

    /// Direct plan change against the backend failed.
    #[error("אירעה שגיאה בעדכון המסלול. אנא נסה שוב")]
    PlanChangeFailed,

    /// Server response did not match the expected contract.
    #[error("התקבלה תגובה לא תקינה מהשרת")]
    MalformedResponse,

    /// Fetching the reconciliation inputs failed.
    #[error("אירעה שגיאה בטעינת נתוני המנוי. אנא נסה שוב")]
    FetchFailed,
}

impl SubscriptionError {
    pub fn cannot_proceed(message: impl Into<String>) -> Self {
        SubscriptionError::CannotProceed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_proceed_surfaces_decision_message() {
        let err = SubscriptionError::cannot_proceed("זהו המסלול הנוכחי שלך");
        assert_eq!(format!("{}", err), "זהו המסלול הנוכחי שלך");
    }

    #[test]
    fn collaborator_errors_have_hebrew_messages() {
        assert!(format!("{}", SubscriptionError::PlanChangeFailed).contains("המסלול"));
        assert!(format!("{}", SubscriptionError::PendingCancellationFailed).contains("ביטול"));
    }
}
