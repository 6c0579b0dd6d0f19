use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::display::{format_error, format_user, supports_color};
use crate::error::Result;
use crate::storage::JsonStorage;
use crate::user::NewUser;

mod cli;
mod config;
mod display;
mod error;
mod storage;
mod user;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: config::Config = confy::load("verdict", None)?;
    let mut users_file_path = PathBuf::from(&cfg.data_directory);
    users_file_path.push(&cfg.users_filename);

    let storage = JsonStorage::new(&users_file_path);
    let mut directory = storage.load()?;

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            username,
            password,
        } => {
            let use_color = supports_color();
            let (user, error) = directory
                .create_user(NewUser {
                    first_name,
                    last_name,
                    username,
                    password,
                })
                .into_parts();

            // Expected failure: report it and exit nonzero, nothing to save.
            if let Some(error) = error {
                eprintln!("{}", format_error(&error, use_color));
                std::process::exit(1);
            }

            if let Some(user) = user {
                storage.save(&directory)?;
                println!("Registered {}", format_user(&user, use_color));
            }
        }
        Commands::List { search, no_color } => {
            let use_color = !no_color && supports_color();
            let users = directory.list_all();

            let term = search.map(|s| s.to_lowercase());
            let mut shown = 0;
            for user in users {
                if let Some(term) = &term {
                    let haystack = format!(
                        "{} {} {}",
                        user.first_name, user.last_name, user.username
                    )
                    .to_lowercase();
                    if !haystack.contains(term.as_str()) {
                        continue;
                    }
                }
                println!("{}", format_user(user, use_color));
                shown += 1;
            }

            if shown == 0 {
                println!("No users found.");
            }
        }
        Commands::Remove { username } => {
            // Not handled at this layer; escalate and abort.
            if let Some(error) = directory.remove_user(&username).into_error() {
                return Err(error.into_fatal_failure().into());
            }

            storage.save(&directory)?;
            println!("Removed user: {}", username);
        }
        Commands::Recover { force } => {
            if !force && !confirm("Replace the current registry with the backup?")? {
                println!("Aborted.");
                return Ok(());
            }

            let recovered = storage.recover()?;
            storage.save(&recovered)?;
            println!("Recovered {} user(s) from backup.", recovered.len());
        }
    }

    Ok(())
}

/// Ask a yes/no question on stdin
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
