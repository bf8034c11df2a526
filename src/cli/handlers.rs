use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::data_dir::resolve_data_dir;
use crate::io::persist::open_store;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::storage::FileStorage;
use crate::model::{Filter, Location};
use crate::ops::route::{Router, resolve};
use crate::ops::store::TodoStore;

/// Error type for CLI-level lookups
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("todo not found: {0}")]
    NotFound(i64),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %data_dir.display(), "resolved data dir");

    match cli.command {
        // No subcommand → launch TUI
        None => crate::tui::run(&data_dir),
        Some(cmd) => match cmd {
            // Read commands
            Commands::List(args) => cmd_list(&data_dir, args, json),
            Commands::Count => cmd_count(&data_dir, json),
            Commands::Route(args) => cmd_route(&data_dir, args, json),

            // Write commands
            Commands::Add(args) => cmd_add(&data_dir, args, json),
            Commands::Check(args) => cmd_set_completed(&data_dir, args.id, true, json),
            Commands::Uncheck(args) => cmd_set_completed(&data_dir, args.id, false, json),
            Commands::ToggleAll(args) => cmd_toggle_all(&data_dir, args, json),
            Commands::Title(args) => cmd_title(&data_dir, args, json),
            Commands::Rm(args) => cmd_rm(&data_dir, args, json),
            Commands::ClearCompleted => cmd_clear_completed(&data_dir, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_store(data_dir: &Path) -> TodoStore {
    open_store(FileStorage::open(data_dir))
}

fn require_todo(store: &TodoStore, id: i64) -> Result<(), CliError> {
    store.find(id).map(|_| ()).ok_or(CliError::NotFound(id))
}

/// The route saved by the last session (TUI or `todo route`)
fn saved_location(data_dir: &Path) -> Location {
    Location::new(read_ui_state(data_dir).map(|s| s.hash).unwrap_or_default())
}

/// Print the whole list as JSON after a write
fn print_list_json(store: &TodoStore) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        serde_json::to_string_pretty(&list_json(store.todos(), Filter::All))?
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(data_dir);
    let filter = match args.route {
        Some(fragment) => {
            let resolution = resolve(&fragment);
            if !resolution.valid {
                eprintln!("unknown route '{}', showing all", fragment);
            }
            resolution.filter()
        }
        None => {
            let mut location = saved_location(data_dir);
            Router::default().on_hash_change(&mut location)
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&list_json(store.todos(), filter))?
        );
    } else {
        for line in format_listing(store.todos(), filter) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_count(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(data_dir);
    if json {
        println!("{}", serde_json::to_string_pretty(&count_json(store.todos()))?);
    } else {
        let remaining = crate::ops::todo_ops::remaining(store.todos());
        println!("{}", crate::ops::todo_ops::items_left_label(remaining));
    }
    Ok(())
}

fn cmd_route(
    data_dir: &Path,
    args: RouteArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut location = saved_location(data_dir);
    let mut router = Router::default();
    router.on_hash_change(&mut location);

    let mut reset = false;
    if let Some(fragment) = args.fragment {
        reset = !resolve(&fragment).valid;
        location.set_hash(fragment.as_str());
        router.sync(&mut location);
        write_ui_state(
            data_dir,
            &UiState {
                hash: location.hash().to_string(),
            },
        )?;
        if reset {
            eprintln!("unknown route '{}', reset to all", fragment);
        }
    }

    if json {
        let out = RouteJson {
            hash: location.hash().to_string(),
            filter: router.filter(),
            reset,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", router.filter().hash());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir);
    let title = args.title.join(" ");
    let id = store.add(&title)?;
    if json {
        return print_list_json(&store);
    }
    match id {
        Some(id) => println!("{}", id),
        None => eprintln!("nothing to add: title is blank"),
    }
    Ok(())
}

fn cmd_set_completed(
    data_dir: &Path,
    id: i64,
    completed: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir);
    require_todo(&store, id)?;
    store.set_completed(id, completed)?;
    if json {
        return print_list_json(&store);
    }
    if let Some(todo) = store.find(id) {
        println!("{}", format_todo_line(todo));
    }
    Ok(())
}

fn cmd_toggle_all(
    data_dir: &Path,
    args: ToggleAllArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir);
    store.toggle_all(!args.off)?;
    if json {
        return print_list_json(&store);
    }
    let remaining = crate::ops::todo_ops::remaining(store.todos());
    println!("{}", crate::ops::todo_ops::items_left_label(remaining));
    Ok(())
}

/// Change a title the way an inline edit does: open, type, commit
fn cmd_title(
    data_dir: &Path,
    args: TitleArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir);
    require_todo(&store, args.id)?;
    store.edit_todo(args.id);
    store.set_title(args.id, &args.title.join(" "))?;
    store.commit_edit(args.id)?;
    if json {
        return print_list_json(&store);
    }
    match store.find(args.id) {
        Some(todo) => println!("{}", format_todo_line(todo)),
        None => println!("removed {}", args.id),
    }
    Ok(())
}

fn cmd_rm(data_dir: &Path, args: IdArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir);
    require_todo(&store, args.id)?;
    store.remove(args.id)?;
    if json {
        return print_list_json(&store);
    }
    println!("removed {}", args.id);
    Ok(())
}

fn cmd_clear_completed(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir);
    let before = store.todos().len();
    store.remove_completed()?;
    if json {
        return print_list_json(&store);
    }
    println!("cleared {}", before - store.todos().len());
    Ok(())
}
