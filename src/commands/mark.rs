use anyhow::Result;
use paddock::config::Config;
use paddock::garage::{ItemMetadata, Ownership};

pub fn execute(id: String, ownership: String) -> Result<()> {
    let ownership: Ownership = ownership.parse()?;

    let config = Config::load()?;
    let mut garage = super::open_garage(&config)?;

    if garage.find_by_id(&id).is_none() {
        println!("Nothing to mark: '{id}' is not in the garage");
        return Ok(());
    }

    garage.update(&id, ItemMetadata::with_ownership(ownership));
    println!("✓ Marked '{id}' as {ownership}");

    Ok(())
}
