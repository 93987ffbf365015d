use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cadastro")]
#[command(about = "Personal-record registry with masked input and strict validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new record
    #[command(alias = "a")]
    Add {
        /// Full name
        name: String,
        /// National ID number (11 digits, punctuation optional)
        id_number: String,
        /// Age in years
        age: String,
        /// E-mail address
        email: String,
        /// Postal code (8 digits, punctuation optional)
        postal_code: String,
    },

    /// Edit the record at a position; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        /// Position as shown by `list` (1-based)
        position: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        id_number: Option<String>,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,
    },

    /// Remove the record at a position
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `list` (1-based)
        position: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Print how many records are registered
    Count,
}
