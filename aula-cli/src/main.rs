//! Interactive shell for the aula classroom booking system.
//!
//! Presents a numbered menu on stdin/stdout and dispatches to the core
//! library. The registry is loaded from the booking file at startup, held
//! in memory for the whole session, and written back by the exit command;
//! no other command touches the disk.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aula::{AulaError, BookingError, RoomFilter, RoomRegistry, search, store};

/// aula — Interactive classroom booking shell.
///
/// The booking file name is fixed and resolved in the working directory,
/// so the only arguments are the clap-provided `--help` and `--version`.
#[derive(Parser)]
#[command(name = "aula", version, about)]
struct Cli {}

/// Session state threaded through the command handlers.
struct App {
    /// The in-memory room registry for this session.
    registry: RoomRegistry,
    /// Booking file the registry was loaded from and saves back to.
    data_path: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let data_path = PathBuf::from(store::DATA_FILE);
    let registry = load_session(&data_path);

    let mut app = App { registry, data_path };
    run_menu_loop(&mut app, &mut io::stdin().lock());
}

/// Builds the log filter: `RUST_LOG` when set, warnings otherwise.
///
/// Warnings are part of the user interface here (the per-room
/// invalid-hour-filter report), so the default must not filter them out.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
}

/// Loads the session registry from the booking file, reporting the
/// outcome to the user.
///
/// A file that exists but fails to load is discarded as a whole: the
/// failure is printed and the session starts with an empty registry.
fn load_session(data_path: &Path) -> RoomRegistry {
    if !data_path.exists() {
        println!(
            "Welcome! No existing '{}' file found. Starting fresh.",
            data_path.display()
        );
        return RoomRegistry::new();
    }

    println!("Loading data from '{}'...", data_path.display());
    match store::try_load(data_path) {
        Ok(registry) => {
            println!("Successfully loaded {} rooms.", registry.len());
            registry
        }
        Err(e) => {
            println!("Error loading file: {e}. Starting with an empty system.");
            RoomRegistry::new()
        }
    }
}

/// Runs the interactive menu until the exit command or end of input.
///
/// Domain errors are rendered and the loop continues; only the exit
/// command (or end of input) leaves the loop. Input is taken as a
/// parameter so tests can drive the shell with a scripted reader.
fn run_menu_loop<R: BufRead>(app: &mut App, input: &mut R) {
    loop {
        print_menu();
        let choice = match prompt(input, "Enter your choice (1-5): ") {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                println!("\nInput closed. Exiting without saving.");
                return;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return;
            }
        };

        let result = match choice.as_str() {
            "1" => cmd_create_room(app, input),
            "2" => cmd_book_room(app, input),
            "3" => cmd_find_rooms(app, input),
            "4" => cmd_view_schedule(app, input),
            "5" => {
                cmd_exit(app);
                return;
            }
            _ => {
                println!("Invalid choice. Please enter a number from 1 to 5.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("\nError: {e}");
        }
    }
}

/// Prints the top-level menu.
fn print_menu() {
    println!("\n- Classroom Booking System");
    println!("What would you like to do?");
    println!("  1. Create a new room");
    println!("  2. Book a room");
    println!("  3. Find available rooms");
    println!("  4. View a room's schedule");
    println!("  5. Exit");
}

/// Prints `label` without a newline and reads one trimmed input line.
///
/// Returns `Ok(None)` when the input has reached its end.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but treats end of input as an error.
///
/// Used inside command handlers, where losing the input stream aborts
/// the command; the menu loop then sees the end of input itself and
/// exits cleanly.
fn prompt_required<R: BufRead>(
    input: &mut R,
    label: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match prompt(input, label)? {
        Some(line) => Ok(line),
        None => Err("input closed".into()),
    }
}

/// Implements menu choice 1: create a new room.
fn cmd_create_room<R: BufRead>(
    app: &mut App,
    input: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n- Create a New Room -");
    let room_id = prompt_required(input, "Enter Room No. (e.g., '6101'): ")?;

    // Reject a taken id before prompting for the remaining fields.
    if app.registry.find(&room_id).is_some() {
        return Err(AulaError::from(BookingError::RoomAlreadyExists { room_id }).into());
    }

    let building = prompt_required(input, "Enter Building Name (e.g., 'NAB'): ")?;

    let capacity_raw = prompt_required(input, "Enter Capacity (e.g., 50): ")?;
    let Ok(capacity) = capacity_raw.parse::<u32>() else {
        println!("Error: Capacity must be a number.");
        return Ok(());
    };

    let room = app.registry.create(&room_id, &building, capacity)?;
    println!(
        "Success: Room '{}' created in {}.",
        room.room_id(),
        room.building()
    );
    Ok(())
}

/// Implements menu choice 2: book a room for an hour.
fn cmd_book_room<R: BufRead>(
    app: &mut App,
    input: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n- Book a Room -");
    let room_id = prompt_required(input, "Enter Room No. to book: ")?;

    if app.registry.find(&room_id).is_none() {
        return Err(AulaError::from(BookingError::RoomNotFound { room_id }).into());
    }

    let hour_raw = prompt_required(input, "Enter hour to book (0-23): ")?;
    let Ok(hour) = hour_raw.parse::<i64>() else {
        println!("Error: Hour must be a number.");
        return Ok(());
    };
    let Some(hour) = u8::try_from(hour).ok().filter(|hour| *hour <= 23) else {
        println!("Error: Hour must be between 0 and 23.");
        return Ok(());
    };

    app.registry.book(&room_id, hour)?;
    println!("Success: Room '{room_id}' has been booked for {hour}:00.");
    Ok(())
}

/// Implements menu choice 3: filtered room search.
fn cmd_find_rooms<R: BufRead>(
    app: &App,
    input: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n- Find Available Rooms -");
    println!("Enter search criteria (leave blank to skip a filter):");

    let building = prompt_required(input, "Filter by building: ")?;
    let capacity_raw = prompt_required(input, "Filter by minimum capacity: ")?;
    let hour_raw = prompt_required(input, "Filter by hour available (0-23): ")?;

    let mut filter = RoomFilter::any();
    if !building.is_empty() {
        filter.building = Some(building);
    }
    if !capacity_raw.is_empty() {
        let Ok(min_capacity) = capacity_raw.parse::<u32>() else {
            println!("Error: Minimum capacity must be a number.");
            return Ok(());
        };
        filter.min_capacity = Some(min_capacity);
    }
    if !hour_raw.is_empty() {
        // Out-of-range hours, negative ones included, are passed through
        // on purpose; the search reports them per room and skips the
        // filter there. Only non-numeric input aborts the command.
        let Ok(hour) = hour_raw.parse::<i64>() else {
            println!("Error: Hour must be a number.");
            return Ok(());
        };
        filter.hour = Some(hour);
    }

    let results = search(&app.registry, &filter);
    if results.is_empty() {
        println!("\nNo rooms found.");
    } else {
        println!("\nFound {} matching rooms:", results.len());
        for room in results {
            println!("{room}");
        }
    }
    Ok(())
}

/// Implements menu choice 4: view one room's schedule.
fn cmd_view_schedule<R: BufRead>(
    app: &App,
    input: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n- View Room Schedule -");
    let room_id = prompt_required(input, "Enter Room No. to view: ")?;

    let Some(room) = app.registry.find(&room_id) else {
        return Err(AulaError::from(BookingError::RoomNotFound { room_id }).into());
    };
    println!("{room}");
    Ok(())
}

/// Implements menu choice 5: save the registry and say goodbye.
fn cmd_exit(app: &App) {
    println!("Saving data to '{}'...", app.data_path.display());
    match store::save(&app.data_path, &app.registry) {
        Ok(()) => println!("Data saved successfully."),
        Err(e) => println!("Error saving data: {e}"),
    }
    println!("Goodbye!");
}
