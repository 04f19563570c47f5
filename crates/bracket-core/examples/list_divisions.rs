use bracket_core::parser::{extract_row, parse_event_id};
use bracket_core::BracketScraper;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let event = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://bracketteam.com/event/6489/2025_Fall_Tip_Off/schedules".to_string());
    let token = std::env::var("BRACKETTEAM_TOKEN")?;

    let tournament_id = parse_event_id(&event)?;
    let scraper = BracketScraper::new(&token)?;

    let divisions = scraper.list_divisions(tournament_id).await;
    println!("Tournament {tournament_id}: {} divisions\n", divisions.len());
    for division in &divisions {
        println!("  {} (ID: {})", division.name, division.id);
    }

    // First page worth of games from the first division
    if let Some(first) = divisions.first() {
        println!("\nGames in '{}':\n", first.name);
        let mut matches = scraper.matches(tournament_id, first.id);
        let mut shown = 0;
        while let Some(m) = matches.next_match().await {
            let row = extract_row(&m, first);
            println!(
                "  {} | {} / {} | {} vs {}",
                row.game_start_time, row.location, row.court, row.home_team, row.away_team
            );
            shown += 1;
            if shown == 20 {
                break;
            }
        }
    }

    Ok(())
}
