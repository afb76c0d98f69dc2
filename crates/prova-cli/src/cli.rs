//! Command-line surface of the prova client.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prova", about = "Browse and publish academic tests", version)]
pub struct Cli {
    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log debug detail.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account and session management
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse and publish tests
    Tests {
        #[command(subcommand)]
        action: TestsCommands,
    },
    /// List test categories
    Categories,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    SignUp(CredentialArgs),
    /// Sign in and store the bearer token
    Login(CredentialArgs),
    /// Clear the stored session
    Logout,
    /// Show session status
    Status,
}

#[derive(Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand)]
pub enum TestsCommands {
    /// List tests grouped by term and discipline
    ByDiscipline,
    /// List tests grouped by instructor
    ByTeacher,
    /// Publish a new test
    Add(AddTestArgs),
    /// Record a view of a test
    View {
        /// Id of the test that was opened
        test_id: i32,
    },
}

#[derive(Args)]
pub struct AddTestArgs {
    /// Test title
    #[arg(long)]
    pub name: String,

    /// URL of the test PDF
    #[arg(long)]
    pub pdf_url: String,

    /// Category id (see `prova categories`)
    #[arg(long)]
    pub category: i32,

    /// Discipline id (see `prova tests by-discipline`)
    #[arg(long)]
    pub discipline: i32,

    /// Teacher-discipline assignment id (see `prova tests by-teacher`)
    #[arg(long)]
    pub instructor: i32,
}
