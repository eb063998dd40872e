use serde::{
    Deserialize,
    Serialize,
};

pub const QUESTIONS_PER_CATEGORY: usize = 6;

/// The interview questions returned by the language model, grouped in the
/// five discovery themes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionSet {
    pub problem_discovery: QuestionCategory,
    pub current_solution: QuestionCategory,
    pub urgency_budget: QuestionCategory,
    pub jobs_to_be_done: QuestionCategory,
    pub decision_process: QuestionCategory,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuestionCategory {
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
}

impl QuestionSet {
    pub const CATEGORY_KEYS: [&'static str; 5] = [
        "problemDiscovery",
        "currentSolution",
        "urgencyBudget",
        "jobsToBeDone",
        "decisionProcess",
    ];

    fn categories(&self) -> [(&'static str, &QuestionCategory); 5] {
        let keys = Self::CATEGORY_KEYS;
        [
            (keys[0], &self.problem_discovery),
            (keys[1], &self.current_solution),
            (keys[2], &self.urgency_budget),
            (keys[3], &self.jobs_to_be_done),
            (keys[4], &self.decision_process),
        ]
    }

    /// Checks the question count of every category.
    pub fn validate(&self) -> Result<(), String> {
        for (key, category) in self.categories().iter() {
            if category.questions.len() != QUESTIONS_PER_CATEGORY {
                return Err(format!(
                    "`{}` has {} questions instead of {}",
                    key,
                    category.questions.len(),
                    QUESTIONS_PER_CATEGORY
                ));
            }
        }
        Ok(())
    }
}
