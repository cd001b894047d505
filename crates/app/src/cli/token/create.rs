use clap::Args;
use urbanaura_app::auth::{
    AuthConfig, AuthService, DEFAULT_TOKEN_TTL_DAYS, JwtAuthService,
};

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// Email the token is issued to
    #[arg(long)]
    email: String,

    /// Shared secret used to sign access tokens
    #[arg(long, env = "ACCESS_TOKEN_SECRET", hide_env_values = true)]
    access_token_secret: String,

    /// Token lifetime in days
    #[arg(long, env = "ACCESS_TOKEN_TTL_DAYS", default_value_t = DEFAULT_TOKEN_TTL_DAYS)]
    ttl_days: u32,
}

pub(crate) fn run(args: CreateTokenArgs) -> Result<(), String> {
    if args.access_token_secret.trim().is_empty() {
        return Err("access token secret cannot be empty".to_string());
    }

    let service = JwtAuthService::new(AuthConfig {
        secret: args.access_token_secret,
        ttl_days: args.ttl_days,
        admin_emails: Vec::new(),
    });

    let issued = service
        .issue_token(&args.email)
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("email: {}", args.email.trim());
    println!("expires_at: {}", issued.expires_at);
    println!("access_token: {}", issued.token);

    Ok(())
}
