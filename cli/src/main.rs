//! Workout Tracker CLI
//!
//! Command-line client for the Workout Tracker API: registration and
//! login, workout logging, and leaderboard views. The session token is
//! kept in a durable file and loaded at startup.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use uuid::Uuid;
use workout_tracker_cli::api::ApiClient;
use workout_tracker_cli::session::{Session, SessionStore};
use workout_tracker_cli::table;
use workout_tracker_shared::types::{
    CreateWorkoutRequest, ExerciseEntryInput, LoginRequest, RegisterRequest,
};
use workout_tracker_shared::validation::{
    validate_email, validate_exercise_entry, validate_password, validate_username,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Track workouts and climb the leaderboards"
)]
struct Cli {
    /// Base URL of the API server
    #[arg(
        long,
        global = true,
        default_value = "http://localhost:5000",
        env = "WORKOUT_TRACKER_URL"
    )]
    server: String,

    /// Session file path (defaults to the user config directory)
    #[arg(long, global = true, env = "WORKOUT_TRACKER_SESSION")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Register(RegisterArgs),
    /// Log in and store the session
    Login(LoginArgs),
    /// Remove the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Manage workouts
    #[command(subcommand)]
    Workout(WorkoutCommand),
    /// Show a leaderboard
    Leaderboard {
        /// Exercise name; omit for the overall board
        exercise: Option<String>,
    },
    /// List exercise names with entry counts
    Exercises,
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
struct LoginArgs {
    /// Username or email
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// List your workouts
    List,
    /// Log a new workout
    Add(AddWorkoutArgs),
    /// Delete a workout
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct AddWorkoutArgs {
    /// Workout date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// Free-text notes
    #[arg(long)]
    notes: Option<String>,
    /// Exercise entry as NAME:WEIGHT:REPS:SETS (repeatable)
    #[arg(long = "exercise", short = 'e', required = true)]
    exercises: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = session_store(cli.session_file.clone())?;

    match cli.command {
        Command::Register(args) => register(&cli.server, args).await,
        Command::Login(args) => login(&cli.server, &store, args).await,
        Command::Logout => logout(&store),
        Command::Whoami => whoami(&cli.server, &store).await,
        Command::Workout(WorkoutCommand::List) => list_workouts(&cli.server, &store).await,
        Command::Workout(WorkoutCommand::Add(args)) => add_workout(&cli.server, &store, args).await,
        Command::Workout(WorkoutCommand::Delete { id, yes }) => {
            delete_workout(&cli.server, &store, id, yes).await
        }
        Command::Leaderboard { exercise } => leaderboard(&cli.server, exercise).await,
        Command::Exercises => exercises(&cli.server).await,
    }
}

fn session_store(override_path: Option<PathBuf>) -> Result<SessionStore> {
    let path = override_path
        .or_else(SessionStore::default_path)
        .ok_or_else(|| anyhow!("could not determine a config directory; pass --session-file"))?;
    Ok(SessionStore::new(path))
}

/// Client with the stored session token attached
fn authed_client(server: &str, store: &SessionStore) -> Result<ApiClient> {
    let session = store
        .load()
        .ok_or_else(|| anyhow!("not logged in; run `workout-tracker login` first"))?;
    Ok(ApiClient::new(server).with_token(session.token))
}

async fn register(server: &str, args: RegisterArgs) -> Result<()> {
    // Pre-flight checks mirror the server's rules so obvious mistakes
    // fail without a round trip
    validate_username(&args.username).map_err(|e| anyhow!(e))?;
    validate_email(&args.email).map_err(|e| anyhow!(e))?;
    validate_password(&args.password).map_err(|e| anyhow!(e))?;

    let client = ApiClient::new(server);
    let response = client
        .register(&RegisterRequest {
            username: args.username.clone(),
            email: args.email,
            password: args.password,
        })
        .await?;

    println!("Registered {} ({})", args.username, response.user_id);
    println!("Log in with: workout-tracker login --username {}", args.username);
    Ok(())
}

async fn login(server: &str, store: &SessionStore, args: LoginArgs) -> Result<()> {
    let client = ApiClient::new(server);
    let response = client
        .login(&LoginRequest {
            username: args.username,
            password: args.password,
        })
        .await?;

    let session = Session {
        token: response.token,
        user: response.user,
    };
    store.save(&session)?;

    println!("Logged in as {}", session.user.username);
    Ok(())
}

fn logout(store: &SessionStore) -> Result<()> {
    store.clear()?;
    println!("Logged out");
    Ok(())
}

async fn whoami(server: &str, store: &SessionStore) -> Result<()> {
    let client = authed_client(server, store)?;
    let profile = client.me().await?;

    println!("{} <{}>", profile.username, profile.email);
    println!("member since {}", profile.created_at.date_naive());
    Ok(())
}

async fn list_workouts(server: &str, store: &SessionStore) -> Result<()> {
    let client = authed_client(server, store)?;
    let workouts = client.list_workouts().await?;

    if workouts.is_empty() {
        println!("No workouts logged yet");
        return Ok(());
    }

    for workout in workouts {
        match &workout.notes {
            Some(notes) => println!("{}  {}  {}", workout.date, workout.id, notes),
            None => println!("{}  {}", workout.date, workout.id),
        }
        for entry in &workout.exercises {
            println!(
                "    {}  {} x {} x {}",
                entry.exercise_name,
                format_number(entry.weight),
                entry.reps,
                entry.sets
            );
        }
        println!();
    }
    Ok(())
}

async fn add_workout(server: &str, store: &SessionStore, args: AddWorkoutArgs) -> Result<()> {
    let mut entries = Vec::with_capacity(args.exercises.len());
    for spec in &args.exercises {
        let entry = parse_exercise_spec(spec).map_err(|e| anyhow!("{}: {}", spec, e))?;
        validate_exercise_entry(&entry).map_err(|e| anyhow!("{}: {}", spec, e))?;
        entries.push(entry);
    }

    let client = authed_client(server, store)?;
    let count = entries.len();
    let response = client
        .create_workout(&CreateWorkoutRequest {
            date: args.date,
            notes: args.notes,
            exercises: entries,
        })
        .await?;

    println!(
        "Workout {} created with {} exercise{}",
        response.workout_id,
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}

async fn delete_workout(server: &str, store: &SessionStore, id: Uuid, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete workout {}?", id))? {
        println!("Aborted");
        return Ok(());
    }

    let client = authed_client(server, store)?;
    let response = client.delete_workout(id).await?;
    println!("{}", response.message);
    Ok(())
}

async fn leaderboard(server: &str, exercise: Option<String>) -> Result<()> {
    let client = ApiClient::new(server);

    match exercise {
        None => {
            let entries = client.leaderboard().await?;
            let rows: Vec<Vec<String>> = entries
                .iter()
                .enumerate()
                .map(|(i, e)| {
                    vec![
                        format!("{}", i + 1),
                        e.username.clone(),
                        e.total_workouts.to_string(),
                        e.total_exercises.to_string(),
                        e.total_volume
                            .map(format_number)
                            .unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect();
            print!(
                "{}",
                table::render(&["#", "USER", "WORKOUTS", "EXERCISES", "VOLUME"], &rows)
            );
        }
        Some(name) => {
            let entries = client.leaderboard_for(&name).await?;
            if entries.is_empty() {
                println!("No entries for {}", name);
                return Ok(());
            }
            let rows: Vec<Vec<String>> = entries
                .iter()
                .enumerate()
                .map(|(i, e)| {
                    vec![
                        format!("{}", i + 1),
                        e.username.clone(),
                        format_number(e.max_weight),
                        e.max_reps.to_string(),
                        format_number(e.max_volume),
                    ]
                })
                .collect();
            print!(
                "{}",
                table::render(&["#", "USER", "MAX WEIGHT", "MAX REPS", "MAX VOLUME"], &rows)
            );
        }
    }
    Ok(())
}

async fn exercises(server: &str) -> Result<()> {
    let client = ApiClient::new(server);
    let entries = client.exercise_names().await?;

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.exercise_name.clone(), e.count.to_string()])
        .collect();
    print!("{}", table::render(&["EXERCISE", "ENTRIES"], &rows));
    Ok(())
}

/// Parse an exercise spec of the form NAME:WEIGHT:REPS:SETS
///
/// The name may itself contain colons; the three numeric fields are
/// taken from the right.
fn parse_exercise_spec(spec: &str) -> Result<ExerciseEntryInput, String> {
    let mut parts = spec.rsplitn(4, ':');
    let sets = parts.next().ok_or("expected NAME:WEIGHT:REPS:SETS")?;
    let reps = parts.next().ok_or("expected NAME:WEIGHT:REPS:SETS")?;
    let weight = parts.next().ok_or("expected NAME:WEIGHT:REPS:SETS")?;
    let name = parts.next().ok_or("expected NAME:WEIGHT:REPS:SETS")?;

    Ok(ExerciseEntryInput {
        exercise_name: name.to_string(),
        weight: weight
            .trim()
            .parse()
            .map_err(|_| format!("invalid weight '{}'", weight))?,
        reps: reps
            .trim()
            .parse()
            .map_err(|_| format!("invalid reps '{}'", reps))?,
        sets: sets
            .trim()
            .parse()
            .map_err(|_| format!("invalid sets '{}'", sets))?,
    })
}

/// Ask for confirmation on the terminal; defaults to no
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

/// Format a numeric value without a trailing .0 for whole numbers
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
