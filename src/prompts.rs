//! Prompts sent to the language model.

use crate::domain::{
    InterviewBrief,
    QuestionSet,
    QUESTIONS_PER_CATEGORY,
};

/// Asks for the five question categories as a single JSON object.
pub fn questions_prompt(brief: &InterviewBrief) -> String {
    let categories = [
        ("Problem Discovery", "whether the problem exists and how painful it is"),
        ("Current Solution", "how they solve the problem today and what it costs them"),
        ("Urgency & Budget", "how urgent a fix is and what they would spend on it"),
        ("Jobs To Be Done", "the outcome they are really trying to achieve"),
        ("Decision Process", "who decides, who pays and how they buy"),
    ];
    let category_list = QuestionSet::CATEGORY_KEYS
        .iter()
        .zip(categories.iter())
        .map(|(key, (title, focus))| format!("- \"{}\" ({}): {}", key, title, focus))
        .collect::<Vec<_>>()
        .join("\n");
    let shape = QuestionSet::CATEGORY_KEYS
        .iter()
        .map(|key| {
            format!(
                "  \"{}\": {{\"title\": \"...\", \"description\": \"...\", \"questions\": [\"...\"]}}",
                key
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "You are an expert in customer discovery and The Mom Test interviewing method.\n\
         \n\
         Write customer discovery interview questions for this business idea:\n\
         \"{idea}\"\n\
         \n\
         The interviews take place in a {setting} setting: adapt the wording to it.\n\
         \n\
         Produce exactly 5 categories:\n\
         {category_list}\n\
         \n\
         Each category has a short title, a one sentence description and exactly \
         {count} questions. Questions must be open-ended, ask about past behaviour \
         rather than hypothetical opinions, and never pitch the idea.\n\
         \n\
         Respond with a single JSON object and nothing else, with exactly this shape:\n\
         {{\n{shape}\n}}",
        idea = brief.business_idea,
        setting = brief.setting,
        category_list = category_list,
        count = QUESTIONS_PER_CATEGORY,
        shape = shape,
    )
}

/// Asks for a 10 to 15 seconds spoken opener, in a tone matching the setting.
pub fn starter_prompt(brief: &InterviewBrief) -> String {
    let tone = if brief.setting.is_informal() {
        "relaxed and friendly, like talking to someone you just met over coffee"
    } else {
        "polite and professional"
    };

    format!(
        "Write a conversation starter for a customer discovery interview in a {setting} \
         setting about this business idea:\n\
         \"{idea}\"\n\
         \n\
         The tone is {tone}. It must take 10 to 15 seconds to say out loud, explain why \
         you want to talk without pitching the idea, and use bracketed placeholders such \
         as [Name] or [Company] for details to personalize.\n\
         \n\
         Respond with the conversation starter only, without quotes.",
        setting = brief.setting,
        idea = brief.business_idea,
        tone = tone,
    )
}
