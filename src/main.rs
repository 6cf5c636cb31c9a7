use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use workperk::auth::{SessionStore, INVALID_CREDENTIALS_MESSAGE};
use workperk::config::Config;
use workperk::dispatch::{self, Screen};
use workperk::identity::{demo_accounts, Registration, UserType};
use workperk::logging;

/// WorkPerk - career intelligence platform demo session
#[derive(Parser, Debug)]
#[command(name = "workperk", version, about, long_about = None)]
struct Cli {
    /// Configuration file path (default: ~/.workperk/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in as a demo identity by email (the password is not checked)
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Register a new identity and log in as it
    Register {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        /// candidate, employer, admin or lab-owner
        #[arg(long, value_parser = parse_role)]
        role: Option<UserType>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// End the current session
    Logout,
    /// Print the current identity as JSON
    Whoami,
    /// Show the screen the current session lands on
    Dashboard,
    /// List the quick-login demo accounts
    Accounts,
    /// Show which view a raw role tag dispatches to
    Dispatch { tag: String },
}

fn parse_role(s: &str) -> Result<UserType, String> {
    UserType::parse(s.trim())
        .ok_or_else(|| format!("unknown role '{s}' (expected candidate, employer, admin or lab-owner)"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_default(&config_path)?;
    config.apply_env_overrides();
    logging::init_logging(&config.logging)?;

    let store = SessionStore::from_config(&config.slot)
        .with_context(|| format!("Failed to open session slot '{}'", config.slot.kind))?;

    run(cli.command, &store)
}

fn run(command: Command, store: &SessionStore) -> Result<ExitCode> {
    match command {
        Command::Login { email, password } => match store.login(&email, &password) {
            Ok(Some(identity)) => {
                println!("{}", dispatch::header(&identity));
                Ok(ExitCode::SUCCESS)
            }
            Ok(None) => {
                eprintln!("{INVALID_CREDENTIALS_MESSAGE}");
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        Command::Register {
            email,
            first_name,
            last_name,
            role,
            avatar,
            password,
        } => {
            let registration = Registration {
                email,
                password,
                first_name,
                last_name,
                user_type: role,
                profile_image_url: avatar,
            };
            match store.register(&registration) {
                Ok(identity) => {
                    println!("{}", dispatch::header(&identity));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    tracing::debug!("Registration failed: {e}");
                    eprintln!("{}", e.user_message());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Logout => {
            store.logout()?;
            println!("Logged out");
            Ok(ExitCode::SUCCESS)
        }
        Command::Whoami => match store.current_user() {
            Some(identity) => {
                println!("{}", serde_json::to_string_pretty(&identity)?);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                println!("not logged in");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Dashboard => {
            match dispatch::route(store) {
                Screen::Login => println!("Login required"),
                Screen::Dashboard { identity, view } => {
                    if let Some(identity) = identity {
                        println!("{}", dispatch::header(&identity));
                    }
                    println!("{}", view.title());
                    if view.is_fallback() {
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Accounts => {
            for (role, email) in demo_accounts() {
                println!("{:<10} {email}", role.label());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Dispatch { tag } => {
            println!("{}", dispatch::dispatch_tag(&tag).title());
            Ok(ExitCode::SUCCESS)
        }
    }
}
