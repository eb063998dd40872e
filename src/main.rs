use question_generator::app::{
    load_configuration,
    setup_tracing,
    QuestionGeneratorApp,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("question-generator".into(), "info".into());

    let configuration = load_configuration()?;
    configuration.log_credential_status();

    let app = QuestionGeneratorApp::from(configuration).await?;
    tracing::info!("Server running on port {}", app.port);
    app.server.await?;
    Ok(())
}
