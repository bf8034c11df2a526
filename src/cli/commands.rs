use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("todos v", env!("CARGO_PKG_VERSION"), " - what needs to be done?"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List todos under the saved route, or under --route
    List(ListArgs),
    /// Add a todo
    Add(AddArgs),
    /// Mark a todo completed
    Check(IdArgs),
    /// Mark a todo not completed
    Uncheck(IdArgs),
    /// Mark every todo completed (or not, with --off)
    ToggleAll(ToggleAllArgs),
    /// Change a todo's title (a blank title deletes it)
    Title(TitleArgs),
    /// Delete a todo
    Rm(IdArgs),
    /// Delete every completed todo
    ClearCompleted,
    /// Show or set the saved route (#/all, #/active, #/completed)
    Route(RouteArgs),
    /// Show how many todos are left
    Count,
}

#[derive(Args)]
pub struct ListArgs {
    /// Route to list, e.g. "#/active" (default: the saved route)
    #[arg(long)]
    pub route: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo title (words are joined with spaces)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub title: Vec<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Todo id
    pub id: i64,
}

#[derive(Args)]
pub struct ToggleAllArgs {
    /// Mark every todo not completed instead
    #[arg(long)]
    pub off: bool,
}

#[derive(Args)]
pub struct TitleArgs {
    /// Todo id
    pub id: i64,
    /// New title (words are joined with spaces)
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    pub title: Vec<String>,
}

#[derive(Args)]
pub struct RouteArgs {
    /// New route; omit to show the current one
    pub fragment: Option<String>,
}
