use crate::domain::MalformedInput;

const MISSING_BUSINESS_IDEA: &str = "Not provided";

/// A prospective user's email plus the optional description of what they
/// are building.
#[derive(Clone, Debug)]
pub struct LeadSubmission {
    email: String,
    business_idea: Option<String>,
}

impl LeadSubmission {
    /// Only the presence of the email is checked: its format is left to the
    /// subscription provider.
    pub fn parse(
        email: Option<String>,
        business_idea: Option<String>,
    ) -> Result<Self, MalformedInput> {
        let email = email
            .filter(|email| !email.trim().is_empty())
            .ok_or(MalformedInput::MissingEmail)?;
        let business_idea = business_idea.filter(|idea| !idea.is_empty());
        Ok(Self {
            email,
            business_idea,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn business_idea(&self) -> &str {
        self.business_idea
            .as_deref()
            .unwrap_or(MISSING_BUSINESS_IDEA)
    }
}
