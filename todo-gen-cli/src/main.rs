use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use todo_gen::todo::{generate_todos, generate_todos_with_rng, DEFAULT_TODO_COUNT};
use todo_gen::writer::{write_todos, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The user the todos belong to; prompted for when omitted
    #[clap(long)]
    pub(crate) user_id: Option<String>,
    /// How many todos to generate
    #[clap(long, default_value_t = DEFAULT_TODO_COUNT)]
    pub(crate) count: usize,
    /// Directory the CSV file is written into; it must already exist
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub(crate) output_dir: String,
    /// Seed for reproducible descriptions, flags and ids
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

/// Reads one line, dropping only its line ending.
fn read_user_id(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
}

fn prompt_user_id() -> io::Result<String> {
    print!("Enter the user ID: ");
    io::stdout().flush()?;

    read_user_id(io::stdin().lock())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let user_id = match cli.user_id {
        Some(user_id) => user_id,
        None => prompt_user_id()?,
    };

    info!("Generating {} todos into {}", cli.count, cli.output_dir);
    let todos = match cli.seed {
        Some(seed) => {
            generate_todos_with_rng(&mut StdRng::seed_from_u64(seed), &user_id, cli.count)
        }
        None => generate_todos(&user_id, cli.count),
    };
    let path = write_todos(&cli.output_dir, &todos)?;

    println!("{} todos have been written to {}", todos.len(), path.display());

    Ok(())
}
