use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Garage and showroom assistant for car shoppers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a content item to the garage
    Save {
        /// Content entity id
        id: String,

        /// Card type (photo, video, newCar, usedCar, article)
        #[arg(short = 't', long)]
        card_type: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Display image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Ownership category (owned, testDriven, interested)
        #[arg(long)]
        ownership: Option<String>,
    },

    /// Remove an item from the garage
    Remove {
        /// Content entity id
        id: String,

        /// Card type of the saved entry
        #[arg(short = 't', long)]
        card_type: String,
    },

    /// Set the ownership category on a saved item
    Mark {
        /// Content entity id
        id: String,

        /// Ownership category (owned, testDriven, interested)
        #[arg(long)]
        ownership: String,
    },

    /// List the garage
    Garage {
        /// Only show one ownership bucket
        #[arg(long)]
        ownership: Option<String>,
    },

    /// Show garage totals and achievements
    Stats,

    /// Ask the showroom assistant a question
    Ask {
        /// The question, as free text
        query: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Save {
            id,
            card_type,
            title,
            image,
            ownership,
        } => commands::save::execute(id, card_type, title, image, ownership),
        Commands::Remove { id, card_type } => commands::remove::execute(id, card_type),
        Commands::Mark { id, ownership } => commands::mark::execute(id, ownership),
        Commands::Garage { ownership } => commands::garage::execute(ownership),
        Commands::Stats => commands::stats::execute(),
        Commands::Ask { query } => commands::ask::execute(query.join(" ")),
    }
}
