use std::{error::Error, io::Write};

use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use engine::{Engine, EngineError};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "holonet_admin")]
#[command(about = "Admin utilities for Holonet (seed users, people and planets)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    ///
    /// Defaults to the same temp-dir sqlite file the server falls back to.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    User(User),
    Person(Person),
    Planet(Planet),
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    email: String,
    /// Store the user as inactive.
    #[arg(long)]
    inactive: bool,
}

#[derive(Args, Debug)]
struct Person {
    #[command(subcommand)]
    command: PersonCommand,
}

#[derive(Subcommand, Debug)]
enum PersonCommand {
    Create(PersonCreateArgs),
}

#[derive(Args, Debug)]
struct PersonCreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    eye_color: Option<String>,
    #[arg(long)]
    hair_color: Option<String>,
}

#[derive(Args, Debug)]
struct Planet {
    #[command(subcommand)]
    command: PlanetCommand,
}

#[derive(Subcommand, Debug)]
enum PlanetCommand {
    Create(PlanetCreateArgs),
}

#[derive(Args, Debug)]
struct PlanetCreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    climate: Option<String>,
    #[arg(long)]
    terrain: Option<String>,
}

const PASSWORD_ATTEMPTS: usize = 3;

/// Keeps the terminal in raw mode while alive.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Replaces the current terminal line with `text`.
fn rewrite_line(out: &mut impl Write, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(text)
    )?;
    out.flush()?;
    Ok(())
}

/// Reads a line from the terminal echoing `*` for every character.
fn read_secret(label: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let _raw = RawTerminal::enter()?;
    let mut out = std::io::stderr();
    rewrite_line(&mut out, label)?;

    let mut secret = String::new();
    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Enter => break,
            KeyCode::Char('c') if ctrl => {
                execute!(out, Print("\r\n"))?;
                return Err("interrupted".into());
            }
            KeyCode::Char(ch) if !ctrl => {
                secret.push(ch);
                execute!(out, Print("*"))?;
            }
            KeyCode::Backspace if secret.pop().is_some() => {
                execute!(out, cursor::MoveLeft(1), Print(" "), cursor::MoveLeft(1))?;
            }
            _ => {}
        }
        out.flush()?;
    }

    execute!(out, Print("\r\n"))?;
    out.flush()?;
    Ok(secret)
}

fn read_new_password() -> Result<String, Box<dyn Error + Send + Sync>> {
    let mut out = std::io::stderr();
    for _ in 0..PASSWORD_ATTEMPTS {
        let password = read_secret("Password: ")?;
        if password.is_empty() {
            rewrite_line(&mut out, "Password must not be empty.\r\n")?;
            continue;
        }

        if read_secret("Confirm password: ")? == password {
            return Ok(password);
        }
        rewrite_line(&mut out, "Passwords do not match. Try again.\r\n")?;
    }

    Err("too many attempts".into())
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .unwrap_or_else(migration::default_database_url);
    let db = connect_db(&database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::User(User {
            command: UserCommand::Create(args),
        }) => {
            let password = read_new_password()?;

            let user = match engine
                .create_user(&args.email, &password, !args.inactive)
                .await
            {
                Ok(user) => user,
                Err(EngineError::ExistingKey(email)) => {
                    eprintln!("user already exists: {email}");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            };

            println!("created user: {} ({})", user.email, user.id);
        }
        Command::Person(Person {
            command: PersonCommand::Create(args),
        }) => {
            let person = engine
                .create_person(
                    &args.name,
                    args.eye_color.as_deref(),
                    args.hair_color.as_deref(),
                )
                .await?;
            println!("created person: {} ({})", person.name, person.id);
        }
        Command::Planet(Planet {
            command: PlanetCommand::Create(args),
        }) => {
            let planet = engine
                .create_planet(&args.name, args.climate.as_deref(), args.terrain.as_deref())
                .await?;
            println!("created planet: {} ({})", planet.name, planet.id);
        }
    }

    Ok(())
}
