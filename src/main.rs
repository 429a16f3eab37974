use std::path::PathBuf;
use std::sync::Arc;

use authkit::form::Form;
use authkit::form::presets::{
    FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, login_form, signup_form,
};
use authkit::form::strength::password_strength;
use authkit::services::clock::SystemClock;
use authkit::services::storage::FileStore;
use authkit::{AuthConfig, AuthContext, AuthError, ErrorCode, SessionService, User, UserDirectory};
use clap::{Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("invalid form input")]
    InvalidForm,
    #[error("not signed in")]
    NotSignedIn,
}

#[derive(Parser, Debug)]
#[command(name = "authkit", about = "Mock login/signup against a local session file")]
struct Cli {
    /// File holding the current session token.
    #[arg(long, env = "AUTH_STORE_PATH", default_value = ".authkit-session.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Show the user behind the stored session.
    Whoami,
    Logout,
    /// Print the stored session token.
    Token,
    /// Rate a password.
    Strength { password: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = AuthConfig::from_env();
    tracing::debug!(store = %cli.store.display(), "using session file");

    let service = Arc::new(SessionService::new(
        UserDirectory::seeded(),
        Arc::new(FileStore::new(&cli.store)),
        Arc::new(SystemClock),
        config,
    ));
    let mut ctx = AuthContext::new(service);
    ctx.init();

    match cli.command {
        Command::Login { email, password } => {
            let mut form = login_form();
            form.set_value(FIELD_EMAIL, email);
            form.set_value(FIELD_PASSWORD, password);
            check_form(&mut form)?;
            let user = ctx.submit_login(&mut form).await.map_err(report)?;
            print_user(user);
        }
        Command::Signup { name, email, password, confirm_password } => {
            let mut form = signup_form();
            form.set_value(FIELD_NAME, name);
            form.set_value(FIELD_EMAIL, email);
            form.set_value(FIELD_PASSWORD, password);
            form.set_value(FIELD_CONFIRM_PASSWORD, confirm_password);
            check_form(&mut form)?;
            let user = ctx.submit_signup(&mut form).await.map_err(report)?;
            print_user(user);
        }
        Command::Whoami => {
            let user = ctx.user().ok_or(CliError::NotSignedIn)?;
            print_user(user);
        }
        Command::Logout => {
            ctx.logout();
            println!("signed out");
        }
        Command::Token => {
            let token = ctx.service().stored_token().ok_or(CliError::NotSignedIn)?;
            println!("{token}");
        }
        Command::Strength { password } => {
            let strength = password_strength(&password);
            let label = strength.level.map_or("-", |l| l.label());
            println!("{label} ({}/{})", strength.score, authkit::form::strength::MAX_SCORE);
        }
    }
    Ok(())
}

/// Print every field error so the user sees them all at once.
fn check_form(form: &mut Form) -> Result<(), CliError> {
    if form.validate_all() {
        return Ok(());
    }
    for field in form.fields() {
        let message = form.error(field);
        if !message.is_empty() {
            eprintln!("{field}: {message}");
        }
    }
    Err(CliError::InvalidForm)
}

fn report(err: AuthError) -> CliError {
    tracing::debug!(code = err.error_code(), "request failed");
    CliError::Auth(err)
}

fn print_user(user: &User) {
    match serde_json::to_string_pretty(user) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{} <{}> ({})", user.name, user.email, user.id),
    }
}
