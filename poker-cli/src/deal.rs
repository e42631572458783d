use anyhow::{ensure, Result};
use clap::Args;
use rand::prelude::*;

use poker_core::prelude::{best_hand, deal_round, resolve, Contestant, Deck};

#[derive(Debug, Args)]
pub struct DealArgs {
    /// Number of players at the table
    #[arg(short = 'p', long = "players", default_value = "2")]
    players: usize,

    /// Private cards dealt to each player
    #[arg(long = "hole", default_value = "2")]
    hole: usize,

    /// Shared cards dealt to the table
    #[arg(long = "table", default_value = "5")]
    table: usize,

    /// Seed the shuffle, making the rounds reproducible
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of rounds to deal
    #[arg(short = 'r', long = "rounds", default_value = "1")]
    rounds: usize,
}

fn describe(player: &Contestant<usize>) -> String {
    best_hand(player.cards()).map_or_else(
        || "nothing the resolver ranks".to_owned(),
        |(category, combination)| format!("{category} ({combination})"),
    )
}

pub fn run(args: &DealArgs) -> Result<()> {
    ensure!(args.players > 0, "at least one player is needed");

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    for round in 1..=args.rounds {
        let mut deck = Deck::shuffled(&mut rng);
        let players = deal_round(&mut deck, 1..=args.players, args.hole, args.table)?;

        println!("Round {round}");
        if let Some(first) = players.first() {
            println!(" table: {}", first.table());
        }
        for player in &players {
            println!(
                " - player {}: {} -> {}",
                player.id(),
                player.private(),
                describe(player)
            );
        }
        println!("Winners: {}", resolve(&players));
    }

    Ok(())
}
