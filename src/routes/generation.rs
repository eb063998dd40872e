use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;
use serde_json::{
    json,
    Value,
};

use crate::app::GenerationSettings;
use crate::domain::{
    InterviewBrief,
    QuestionSet,
};
use crate::llm_client::{
    strip_code_fences,
    strip_wrapping_quotes,
    LlmClient,
};
use crate::prompts::{
    questions_prompt,
    starter_prompt,
};
use crate::routes::{
    ApiError,
    ErrorReporting,
    RouteError,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewForm {
    business_idea: Option<String>,
    interview_setting: Option<String>,
}

impl InterviewForm {
    fn into_brief(self) -> Result<InterviewBrief, RouteError> {
        Ok(InterviewBrief::parse(
            self.business_idea,
            self.interview_setting,
        )?)
    }
}

#[tracing::instrument(
    name = "generating interview questions",
    skip(form, llm_client, settings, reporting),
    fields(interview_setting = ?form.interview_setting)
)]
pub async fn generate_questions(
    form: web::Json<InterviewForm>,
    llm_client: web::Data<LlmClient>,
    settings: web::Data<GenerationSettings>,
    reporting: web::Data<ErrorReporting>,
) -> Result<HttpResponse, ApiError> {
    let questions = questions(form.into_inner(), &llm_client, &settings)
        .await
        .map_err(|e| reporting.report("Failed to generate questions", e))?;
    Ok(HttpResponse::Ok().json(questions))
}

async fn questions(
    form: InterviewForm,
    llm_client: &LlmClient,
    settings: &GenerationSettings,
) -> Result<Value, RouteError> {
    let brief = form.into_brief()?;
    let completion = llm_client
        .complete(&questions_prompt(&brief), settings.questions_max_tokens)
        .await?;
    let questions = parse_questions(&completion, settings.strict_question_schema)?;
    tracing::info!("interview questions generated");
    Ok(questions)
}

/// The parsed object is returned as is: `strict` only adds a check of the
/// category keys and question counts.
fn parse_questions(completion: &str, strict: bool) -> Result<Value, RouteError> {
    let questions: Value = serde_json::from_str(strip_code_fences(completion))?;
    if strict {
        serde_json::from_value::<QuestionSet>(questions.clone())
            .map_err(|e| e.to_string())
            .and_then(|question_set| question_set.validate())
            .map_err(|message| RouteError::UnexpectedQuestionShape { message })?;
    }
    Ok(questions)
}

#[tracing::instrument(
    name = "generating conversation starter",
    skip(form, llm_client, settings, reporting),
    fields(interview_setting = ?form.interview_setting)
)]
pub async fn generate_starter(
    form: web::Json<InterviewForm>,
    llm_client: web::Data<LlmClient>,
    settings: web::Data<GenerationSettings>,
    reporting: web::Data<ErrorReporting>,
) -> Result<HttpResponse, ApiError> {
    let starter = starter(form.into_inner(), &llm_client, &settings)
        .await
        .map_err(|e| reporting.report("Failed to generate conversation starter", e))?;
    Ok(HttpResponse::Ok().json(json!({ "starter": starter })))
}

async fn starter(
    form: InterviewForm,
    llm_client: &LlmClient,
    settings: &GenerationSettings,
) -> Result<String, RouteError> {
    let brief = form.into_brief()?;
    let completion = llm_client
        .complete(&starter_prompt(&brief), settings.starter_max_tokens)
        .await?;
    Ok(strip_wrapping_quotes(&completion).to_string())
}
