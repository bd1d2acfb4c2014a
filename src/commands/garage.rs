use anyhow::Result;
use colored::Colorize;
use paddock::config::Config;
use paddock::garage::{Ownership, SavedItem};

pub fn execute(ownership: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let garage = super::open_garage(&config)?;

    let filter = ownership.map(|o| o.parse::<Ownership>()).transpose()?;

    let items: Vec<&SavedItem> = match filter {
        Some(ownership) => garage.by_ownership(ownership),
        None => garage.items().iter().collect(),
    };

    if items.is_empty() {
        match filter {
            Some(ownership) => println!("No {ownership} items in the garage yet."),
            None => println!("The garage is empty. Save something with 'paddock save'."),
        }
        return Ok(());
    }

    match filter {
        Some(ownership) => println!("{}", format!("Garage - {ownership}:").bold()),
        None => println!("{}", "Garage:".bold()),
    }

    for item in items {
        let tag = match item.metadata.ownership {
            Some(Ownership::Owned) => "owned".green(),
            Some(Ownership::TestDriven) => "testDriven".yellow(),
            Some(Ownership::Interested) => "interested".cyan(),
            None => "-".normal(),
        };
        println!(
            "  {} [{}] {} ({})",
            item.id.bold(),
            item.card_type,
            item.title,
            tag
        );
    }

    Ok(())
}
