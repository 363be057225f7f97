//! Wiring of the command line front end to the report pipeline.

mod args;

use clients::api::Client;
use clients::api::Error;
use clients::api::Result;
use github_client::GithubClient;
use github_client::GithubClientBuilder;
use merge_count::ReportGenerator;
use merge_count::UserSummary;

pub use args::Args;

pub async fn generate_report(args: Args) -> Result<Vec<UserSummary>> {
    let location = match args.location {
        Some(ref location) => location.clone(),
        None => return Err(Error::Error("location is required")),
    };
    let generator = ReportGenerator::new(build_client(&args)?);
    generator.generate(&location, args.user_count).await
}

pub async fn remaining_calls(args: &Args) -> Result<u32> {
    build_client(args)?.remaining_calls().await
}

fn build_client(args: &Args) -> Result<GithubClient> {
    let mut builder = GithubClientBuilder::default()
        .with_api_url(&args.api_url)
        .with_approach_limit(args.approach_limit);
    if let Some(ref token) = args.api_token {
        builder = builder.try_with_token(token.clone())?;
    }
    builder.build()
}
