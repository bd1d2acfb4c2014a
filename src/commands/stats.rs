use anyhow::Result;
use colored::Colorize;
use paddock::config::Config;
use paddock::garage::DefaultScoring;

pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let garage = super::open_garage(&config)?;

    let tally = garage.tally();
    let achievements = garage.achievements(&DefaultScoring);

    println!("{}", "Garage stats:".bold());
    println!("  Saved items:  {}", tally.total);
    println!("  Owned:        {}", tally.owned);
    println!("  Test driven:  {}", tally.test_driven);
    println!("  Interested:   {}", tally.interested);
    println!();
    println!(
        "  {} points - level {} ({})",
        achievements.points.to_string().bold(),
        achievements.level,
        achievements.title.green()
    );

    Ok(())
}
