//! Contact lead submission command.

use clap::Args;
use ramz::contact::{ContactLead, ContactSubmissionPipeline, Notice};
use ramz::i18n::Language;

use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Visitor name
    #[arg(long)]
    pub name: String,

    /// Visitor email address
    #[arg(long)]
    pub email: String,

    /// Visitor phone number
    #[arg(long)]
    pub phone: String,

    /// Requested service: design, video, animation or other
    #[arg(long)]
    pub service: String,

    /// Message body
    #[arg(long)]
    pub message: String,

    /// Language of the printed notice (ar or en, default from config)
    #[arg(long)]
    pub lang: Option<Language>,
}

impl ContactArgs {
    fn lead(&self) -> ContactLead {
        ContactLead::new(
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            &self.service,
            self.message.as_str(),
        )
    }
}

/// Validate and submit a lead, printing the visitor-facing notice.
pub async fn run(args: ContactArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    let i18n = runner.language(args.lang);
    let pipeline =
        ContactSubmissionPipeline::from_settings(runner.http_client()?, &runner.config().management);

    let result = pipeline.submit(&args.lead()).await;
    println!("{}", Notice::from_result(&result, &i18n));

    result.map(|_| ()).map_err(CliError::from)
}
