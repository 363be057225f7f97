use clap::Parser;
use clients::api::Error;
use dotenv::dotenv;
use merge_count_app::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    if args.remaining {
        let remaining = merge_count_app::remaining_calls(&args).await?;
        println!("Remaining calls to github: {}", remaining);
        return Ok(());
    }

    let report = merge_count_app::generate_report(args).await?;
    println!("user, repos, merged pull requests");
    for summary in report {
        println!("{}", summary);
    }

    Ok(())
}
