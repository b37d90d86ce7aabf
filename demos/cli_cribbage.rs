//! CLI cribbage example: you against a random opponent.
//!
//! Set `RUST_LOG=cribbage=debug` to follow every card of the play.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribbage::{
    Game, GameOptions, GameState, HandSummary, InteractiveSelector, Player, Progress,
    RandomSelector, Seat,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cribbage=info")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Cribbage CLI example (Ctrl-D to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let you = Player::new("You").with_selector(InteractiveSelector::new(prompt_line));
    let bot = Player::new("Bot").with_selector(RandomSelector::new(seed.rotate_left(17)));
    let mut game = Game::with_players(GameOptions::default(), seed, you, bot);

    match game.draw_for_crib() {
        Ok(seat) => println!("{} won the cut and has the first crib.", game.player(seat).name()),
        Err(err) => println!("Cut error: {err}"),
    }

    loop {
        match play_hand(&mut game) {
            Ok(Progress::Continue) => {}
            Ok(Progress::GameOver(over)) => {
                println!("\n{game}");
                println!("\n{over}");
                break;
            }
            Err(err) => {
                println!("Game error: {err}");
                break;
            }
        }
    }
}

fn play_hand(game: &mut Game) -> Result<Progress, cribbage::GameError> {
    game.deal()?;
    println!("\n{game}");

    game.form_crib()?;
    if let over @ Progress::GameOver(_) = game.cut()? {
        return Ok(over);
    }
    if let Some(cut) = game.cut_card() {
        println!("\nCut card: {cut}");
    }

    if let over @ Progress::GameOver(_) = game.play_phase()? {
        return Ok(over);
    }
    println!("\nPlay: {}", format_cards(game));

    if let over @ Progress::GameOver(_) = game.show()? {
        return Ok(over);
    }
    let crib_seat = game.crib_seat();
    let summary = game.end_hand()?;
    print_summary(game, &summary, crib_seat);

    debug_assert_eq!(game.state(), GameState::Ready);
    Ok(Progress::Continue)
}

fn format_cards(game: &Game) -> String {
    game.round()
        .all_cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_summary(game: &Game, summary: &HandSummary, crib_seat: Seat) {
    for seat in Seat::ALL {
        let index = seat.index();
        let crib = if seat == crib_seat {
            format!(", crib {}", summary.crib)
        } else {
            String::new()
        };
        println!(
            "{}: pegged {}, hand {}{} -> {}",
            game.player(seat).name(),
            summary.pegging[index],
            summary.hand[index],
            crib,
            game.player(seat).score()
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("\n{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => input.trim().to_string(),
    }
}
