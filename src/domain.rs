pub use email_address::EmailAddress;
pub use errors::MalformedInput;
pub use interview_brief::{
    InterviewBrief,
    InterviewSetting,
};
pub use lead_submission::LeadSubmission;
pub use notification_recipient::NotificationRecipient;
pub use question_set::{
    QuestionCategory,
    QuestionSet,
    QUESTIONS_PER_CATEGORY,
};
#[cfg(test)]
pub(crate) use question_set::tests::question_set_json;

mod email_address;
mod errors;
mod interview_brief;
mod lead_submission;
mod notification_recipient;
mod question_set;
