use anyhow::Result;
use paddock::config::Config;
use paddock::garage::{CardType, ItemMetadata, Ownership, SavedItem};

pub fn execute(
    id: String,
    card_type: String,
    title: String,
    image: String,
    ownership: Option<String>,
) -> Result<()> {
    let card_type: CardType = card_type.parse()?;

    let config = Config::load()?;
    let mut garage = super::open_garage(&config)?;

    let mut item = SavedItem::new(id.clone(), card_type, title, image);
    if let Some(ownership) = ownership {
        let ownership: Ownership = ownership.parse()?;
        item.metadata = ItemMetadata::with_ownership(ownership);
    }

    let overwrote = garage.is_saved(&id, card_type);
    garage.add(item);

    if overwrote {
        println!("✓ Updated {card_type} '{id}' in the garage");
    } else {
        println!("✓ Saved {card_type} '{id}' to the garage");
    }
    println!("  Items in garage: {}", garage.len());

    Ok(())
}
