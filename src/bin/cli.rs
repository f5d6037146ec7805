//! Bookshelf CLI
//!
//! One-shot subcommands for scripting, and the interactive menu.

use std::io;
use std::process::ExitCode;

use bookshelf::config::{DEFAULT_DATA_FILE, DEFAULT_INDENT};
use bookshelf::{Book, BookStore, Config, SearchField, Session};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf CLI
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Personal library manager")]
#[command(version)]
struct Args {
    /// Library file
    #[arg(short, long, env = "BOOKSHELF_FILE", default_value = DEFAULT_DATA_FILE)]
    file: String,

    /// Indentation width of the saved file
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        author: String,

        /// Publication year
        #[arg(short, long)]
        year: u32,

        #[arg(short, long)]
        genre: String,

        /// Mark the book as read
        #[arg(short, long)]
        read: bool,
    },

    /// Remove every book with this exact title
    Remove {
        title: String,
    },

    /// Search by title or author (case-insensitive)
    Search {
        /// title or author
        field: SearchField,

        query: String,
    },

    /// Display all books
    List,

    /// Display statistics
    Stats,

    /// Interactive menu (default)
    Menu,
}

fn main() -> ExitCode {
    // Logs go to stderr so menu output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookshelf=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Bookshelf v{}", bookshelf::VERSION);

    let config = Config::builder()
        .data_file(&args.file)
        .indent(args.indent)
        .build();

    let mut store = match BookStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open library {}: {}", args.file, e);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut store, args.command.unwrap_or(Commands::Menu)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_informational() => {
            println!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(store: &mut BookStore, command: Commands) -> bookshelf::Result<()> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            store.add(Book::new(title, author, year, genre, read))?;
            println!("Book added successfully!");
        }
        Commands::Remove { title } => match store.remove(&title)? {
            0 => println!("No book titled '{}'.", title),
            n => println!("Removed {} book(s).", n),
        },
        Commands::Search { field, query } => {
            let results = store.search(field, &query);
            if results.is_empty() {
                println!("No matching books found.");
            }
            for book in results {
                println!("{}", BookStore::format(book));
            }
        }
        Commands::List => {
            if store.is_empty() {
                println!("Your library is empty.");
            }
            for (n, book) in store.list_all() {
                println!("{}. {}", n, book);
            }
        }
        Commands::Stats => {
            let stats = store.statistics();
            if stats.is_empty() {
                println!("No books to show statistics.");
            } else {
                println!("{}", stats);
            }
        }
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(store, stdin.lock(), stdout.lock()).run()?;
        }
    }

    Ok(())
}
