//! CLI draw-poker example.
//!
//! A hot-seat round: every player gets seven cards, may redraw any of them
//! once, and the highest-scoring hand wins.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use chicago_poker::{Card, Game, GameOptions, HandCategory, Rank, Suit};

fn main() {
    println!("Draw poker CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(players) = prompt_usize("Number of players (1-7): ") else {
        return;
    };
    if players == 0 || players > 7 {
        println!("Player count must be between 1 and 7.");
        return;
    }

    let options = GameOptions::default().with_players(players);
    let mut game = Game::new(options, seed);

    game.shuffle();
    if let Err(err) = game.initial_deal() {
        println!("Deal error: {err}");
        return;
    }

    while let Some(player_id) = game.current_player() {
        print_table(&game, player_id);

        let input = prompt_line("Cards to redraw (e.g. '10c as', empty to stand pat): ");
        if input == "q" || input == "quit" {
            return;
        }

        if !input.is_empty() {
            match parse_cards(&input) {
                Ok(cards) => match game.redraw(player_id, &cards) {
                    Ok(dealt) => {
                        let labels: Vec<String> = dealt.iter().map(format_card).collect();
                        println!("Drew {}", labels.join(" "));
                    }
                    Err(err) => println!("Redraw error: {err}"),
                },
                Err(token) => println!("Unrecognized card '{token}'."),
            }
        }

        // The turn wraps to player 0 once the last player has acted.
        if game.advance_turn() == Some(0) {
            break;
        }
    }

    println!("\nShowdown:");
    let mut winner: Option<(usize, u32)> = None;

    for player_id in 0..game.player_count() {
        let Ok(score) = game.score_hand(player_id) else {
            continue;
        };

        if let Some(player) = game.player(player_id) {
            let category = HandCategory::classify(&player.hand.sorted_by_rank());
            println!(
                "Player {player_id}: {} | {category} (score {score})",
                format_cards(player.hand.cards())
            );
        }

        if winner.is_none_or(|(_, best)| score > best) {
            winner = Some((player_id, score));
        }
    }

    if let Some((player_id, _)) = winner {
        println!("\nPlayer {player_id} wins.");
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, current: usize) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    for player in &game.players {
        if player.id() == current {
            println!(
                "* Player {}: {}",
                player.id(),
                format_cards(player.hand.cards())
            );
        } else {
            println!("  Player {}: {} cards", player.id(), player.hand.len());
        }
    }
    println!();
}

fn parse_cards(input: &str) -> Result<Vec<Card>, String> {
    input
        .split_whitespace()
        .map(|token| parse_card(token).ok_or_else(|| token.to_string()))
        .collect()
}

fn parse_card(token: &str) -> Option<Card> {
    let mut chars = token.chars();
    let suit = parse_suit(chars.next_back()?)?;
    let rank = parse_rank(chars.as_str())?;
    Some(Card::new(rank, suit))
}

fn parse_rank(token: &str) -> Option<Rank> {
    let rank = match token {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" | "t" => Rank::Ten,
        "j" => Rank::Jack,
        "q" => Rank::Queen,
        "k" => Rank::King,
        "a" => Rank::Ace,
        _ => return None,
    };
    Some(rank)
}

fn parse_suit(ch: char) -> Option<Suit> {
    let suit = match ch {
        'c' => Suit::Clubs,
        's' => Suit::Spades,
        'h' => Suit::Hearts,
        'd' => Suit::Diamonds,
        _ => return None,
    };
    Some(suit)
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
