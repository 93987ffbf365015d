use cadastro::api::CadastroApi;
use cadastro::config::CadastroConfig;
use cadastro::error::{CadastroError, Result};
use cadastro::model::RecordDraft;
use cadastro::persist::fs::FileGateway;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{field_label, print_count, print_messages, print_records};

fn main() {
    if let Err(e) = run() {
        if let CadastroError::Validation(v) = &e {
            eprintln!("{} {}", "Error:".red(), v);
            eprintln!("Check the {} field.", field_label(v.field()));
        } else {
            eprintln!("{} {}", "Error:".red(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = data_dir()?;
    let config = CadastroConfig::load(&data_dir).unwrap_or_default();
    let gateway = FileGateway::new(data_dir.join(&config.data_file));

    let (mut api, load_warning) = CadastroApi::open(gateway);
    if let Some(warning) = load_warning {
        print_messages(&[warning]);
    }

    match cli.command {
        Some(Commands::Add {
            name,
            id_number,
            age,
            email,
            postal_code,
        }) => {
            let draft = RecordDraft::new(name, id_number, age, email, postal_code);
            let result = api.submit(&draft, None)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Edit {
            position,
            name,
            id_number,
            age,
            email,
            postal_code,
        }) => {
            let index = to_index(position)?;
            // Pre-fill from the stored record, then apply overrides, the
            // way an edit form starts from the selected row.
            let mut draft = RecordDraft::from(api.get(index)?);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(id_number) = id_number {
                draft.id_number = id_number;
            }
            if let Some(age) = age {
                draft.age = age;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            if let Some(postal_code) = postal_code {
                draft.postal_code = postal_code;
            }
            let result = api.submit(&draft, Some(index))?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { position, yes }) => {
            let index = to_index(position)?;
            let result = api.delete(index, yes)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Count) => {
            print_count(api.count());
            Ok(())
        }
        Some(Commands::List) | None => {
            let result = api.list()?;
            print_records(&result.listed);
            print_count(api.count());
            Ok(())
        }
    }
}

/// Positions are 1-based on the CLI surface, 0-based inside the core.
fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or(CadastroError::IndexOutOfRange { index: 0, count: 0 })
}

fn data_dir() -> Result<PathBuf> {
    // CADASTRO_HOME lets tests (and scripts) pin the data dir.
    if let Ok(home) = std::env::var("CADASTRO_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "cadastro", "cadastro")
        .ok_or_else(|| CadastroError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
