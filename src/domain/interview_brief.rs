use std::fmt;

use crate::domain::MalformedInput;

const INFORMAL_SETTINGS: [&str; 2] = ["casual", "conference"];

/// Social context of a customer-discovery conversation, e.g. `casual`,
/// `conference` or `formal`. The set of labels is open.
#[derive(Clone, Debug)]
pub struct InterviewSetting(String);

impl InterviewSetting {
    pub fn is_informal(&self) -> bool {
        let label = self.0.trim().to_lowercase();
        INFORMAL_SETTINGS.contains(&label.as_str())
    }
}

impl AsRef<str> for InterviewSetting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterviewSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the generated interview material is tailored to.
#[derive(Clone, Debug)]
pub struct InterviewBrief {
    pub business_idea: String,
    pub setting: InterviewSetting,
}

impl InterviewBrief {
    pub fn parse(
        business_idea: Option<String>,
        interview_setting: Option<String>,
    ) -> Result<Self, MalformedInput> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        match (present(business_idea), present(interview_setting)) {
            (Some(business_idea), Some(setting)) => Ok(Self {
                business_idea,
                setting: InterviewSetting(setting),
            }),
            _ => Err(MalformedInput::MissingInterviewDetails),
        }
    }
}
