use anyhow::Result;
use colored::Colorize;
use paddock::assistant::{self, match_query};
use paddock::config::Config;

pub fn execute(query: String) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("Ask needs a question, e.g. 'paddock ask what is the best suv'");
    }

    let config = Config::load()?;
    let table = match &config.answers_path {
        Some(path) => assistant::load_from_file(path)?,
        None => assistant::builtin(),
    };

    match match_query(&query, &table) {
        Some(result) => {
            println!("{}", result.answer);
            if !result.related_links.is_empty() {
                println!();
                println!("{}", "Related:".bold());
                for link in &result.related_links {
                    println!("  [{}] {} - {}", link.kind.as_str(), link.title, link.url);
                }
            }
            println!();
            println!("{}", format!("confidence {:.2}", result.confidence).dimmed());
        }
        None => {
            println!("I don't have a good answer for that one.");
            println!("Try asking about SUVs, EV range, financing, oil changes, or winter tires.");
        }
    }

    Ok(())
}
