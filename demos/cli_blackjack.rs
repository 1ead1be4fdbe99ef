//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use vingtun::{Card, Game, GameResult, Hand, Suit};

fn main() {
    println!("Blackjack CLI example (h = hit, s = stand, ? = advice, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        while !game.is_round_over() {
            print_table(&game, false);

            match prompt_line("Action ([h]it [s]tand [?]advice [q]uit): ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = game.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => {
                    if let Err(err) = game.stand() {
                        println!("Action error: {err}");
                    }
                }
                "?" | "advice" => println!("Advice: {}", game.suggestion()),
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&game, true);
        println!("Round result: {}", describe_result(game.result()));

        let again = prompt_line("Next round? (n to quit): ");
        if matches!(again.as_str(), "n" | "no" | "q" | "quit") {
            println!("Goodbye.");
            return;
        }
        game.reset();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, reveal_dealer: bool) {
    let state = game.state();
    println!("\nDeck: {} cards remaining", state.deck().len());

    let dealer = state.dealer_hand();
    if reveal_dealer {
        println!("Dealer: {} (score {})", format_hand(dealer), dealer.score());
    } else {
        println!("Dealer: {} ??", format_card(state.dealer_up_card()));
    }

    let player = state.player_hand();
    println!(
        "You:    {} (score {}, {})",
        format_hand(player),
        player.score(),
        player.status()
    );
    println!();
}

fn describe_result(result: GameResult) -> &'static str {
    match result {
        GameResult::PlayerWin => "you win",
        GameResult::DealerWin => "dealer wins",
        GameResult::Draw => "push",
        GameResult::NoResult => "still open",
    }
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
