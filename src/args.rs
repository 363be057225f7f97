use clap::Parser;
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Location to search users at
    #[clap(short, long, env, required_unless_present = "remaining")]
    pub location: Option<String>,

    /// Number of users to report on (capped at 20)
    #[clap(short, long, env, default_value_t = 20)]
    pub user_count: u32,

    /// API OAuth access token
    #[clap(short, long, env)]
    pub api_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Stop issuing calls once this few are left in the shared quota
    #[clap(long, env, default_value_t = 2000)]
    pub approach_limit: u32,

    /// Only print the number of API calls left and exit
    #[clap(short, long)]
    pub remaining: bool,
}
