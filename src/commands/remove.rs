use anyhow::Result;
use paddock::config::Config;
use paddock::garage::CardType;

pub fn execute(id: String, card_type: String) -> Result<()> {
    let card_type: CardType = card_type.parse()?;

    let config = Config::load()?;
    let mut garage = super::open_garage(&config)?;

    // Removing an absent key is a defined no-op; just tell the user which
    // case they hit
    if !garage.is_saved(&id, card_type) {
        println!("Nothing to remove: {card_type} '{id}' is not in the garage");
        return Ok(());
    }

    garage.remove(&id, card_type);
    println!("✓ Removed {card_type} '{id}' from the garage");
    println!("  Items in garage: {}", garage.len());

    Ok(())
}
