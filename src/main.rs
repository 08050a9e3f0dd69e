use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use career_advisor_client::domain::auth::{AuthService, SignupRequest};
use career_advisor_client::domain::chat::ChatService;
use career_advisor_client::domain::recommendation::RecommendationService;
use career_advisor_client::domain::skill::SkillService;
use career_advisor_client::infrastructure::config::{Config, LogFormat};
use career_advisor_client::{ApiClient, ClientError, FileSessionStore};

#[derive(Parser)]
#[command(
    name = "career-advisor",
    about = "Command-line client for the Career Advisor platform"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session
    Login { username: String, password: String },
    /// Create an account, then log in
    Signup {
        username: String,
        email: String,
        password: String,
        #[arg(long, default_value = "student")]
        role: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List the platform's skill catalog
    Skills,
    /// List your tracked skills
    MySkills,
    /// Track a skill at a level (0-100)
    AddSkill { skill_id: i64, level: u32 },
    /// Show your career recommendations
    Recommendations,
    /// Ask the career chatbot a question
    Chat { message: Vec<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()
        .map_err(|error| anyhow::anyhow!("invalid configuration: {}", error))?;

    init_logging(&config);

    let session_path = match &config.session_file {
        Some(path) => path.clone(),
        None => FileSessionStore::default_path()?,
    };
    let store = Arc::new(FileSessionStore::open(session_path)?);
    let client = ApiClient::with_timeout(
        config.base_url.clone(),
        store,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    match run(cli.command, client).await {
        Ok(()) => Ok(()),
        Err(ClientError::Unauthenticated(_)) => {
            eprintln!("Not logged in or session expired. Run `career-advisor login` first.");
            std::process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}

async fn run(command: Command, client: ApiClient) -> Result<(), ClientError> {
    match command {
        Command::Login { username, password } => {
            let auth = AuthService::new(client);
            auth.login(&username, &password).await?;
            println!("Logged in as {}.", username);
        }
        Command::Signup {
            username,
            email,
            password,
            role,
        } => {
            let auth = AuthService::new(client);
            auth.signup(SignupRequest {
                username: username.clone(),
                email,
                password,
                role,
            })
            .await?;
            println!("Account created, logged in as {}.", username);
        }
        Command::Logout => {
            AuthService::new(client).logout();
            println!("Logged out.");
        }
        Command::Whoami => {
            let auth = AuthService::new(client);
            if !auth.is_authenticated().await {
                println!("Not logged in.");
                return Ok(());
            }
            match auth.current_user() {
                Some(user) => {
                    let username = user
                        .get("username")
                        .and_then(|v| v.as_str())
                        .unwrap_or("<unknown>")
                        .to_string();
                    println!("Logged in as {}.", username);
                }
                None => println!("Logged in."),
            }
        }
        Command::Skills => {
            let skills = SkillService::new(client).list_skills().await?;
            for skill in skills {
                println!("{:>4}  {:<30} {}", skill.id, skill.name, skill.category);
            }
        }
        Command::MySkills => {
            let mine = SkillService::new(client).my_skills().await?;
            if mine.is_empty() {
                println!("No skills tracked yet.");
            }
            for entry in mine {
                println!("{:<30} {:>3}/100", entry.skill.name, entry.level);
            }
        }
        Command::AddSkill { skill_id, level } => {
            let entry = SkillService::new(client).add_skill(skill_id, level).await?;
            println!("Tracking {} at {}/100.", entry.skill.name, entry.level);
        }
        Command::Recommendations => {
            let recommendations = RecommendationService::new(client).list().await?;
            if recommendations.is_empty() {
                println!("No recommendations yet. Track some skills first.");
            }
            for rec in recommendations {
                println!("{:<30} {:>5.1}%", rec.career_path.title, rec.score);
            }
        }
        Command::Chat { message } => {
            let reply = ChatService::new(client).send(&message.join(" ")).await;
            println!("{}", reply);
        }
    }
    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "career_advisor_client=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "career_advisor_client=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
