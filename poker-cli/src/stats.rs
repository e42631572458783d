use std::collections::HashMap;

use anyhow::{ensure, Context, Result};
use clap::Subcommand;
use itertools::Itertools;
use rayon::prelude::*;
use strum::IntoEnumIterator;

use poker_core::prelude::{deal_round, resolve, Category, Deck, Outcome};

const DECK_SIZE: usize = 52;
const HOLE_CARDS: usize = 2;
const TABLE_CARDS: usize = 5;

#[derive(Debug, Subcommand)]
pub enum CliCommands {
    /// How often each category decides a round of Texas hold'em
    WinnerStats {
        /// Run on a single thread (for profiling)
        #[arg(long = "single-threaded", default_value = "false")]
        single_threaded: bool,

        /// Perform this many iterations, in thousands
        #[arg(short = 'i', long = "iterations", default_value = "100")]
        iterations: usize,

        /// Number of players at the table
        #[arg(short = 'p', long = "players", default_value = "2")]
        players: usize,

        /// Seed the deals, making the statistics reproducible
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,
    },
}

/// Rounds decided by a category (`None` when nobody won) and the sum of their
/// winner set sizes.
type Tally = HashMap<Option<Category>, (usize, usize)>;

#[derive(Debug)]
struct WinnerStats {
    frequency: f32,
    average_winners: f32,
}

fn record(mut tally: Tally, outcome: &Outcome<usize>) -> Tally {
    let entry = tally.entry(outcome.category()).or_insert((0, 0));
    entry.0 += 1;
    entry.1 += outcome.winners().len();
    tally
}

fn merge(mut left: Tally, right: Tally) -> Tally {
    for (category, (rounds, winners)) in right {
        let entry = left.entry(category).or_insert((0, 0));
        entry.0 += rounds;
        entry.1 += winners;
    }
    left
}

fn generate_winner_stats<G>(
    single_threaded: bool,
    iterations: usize,
    play_round: G,
) -> Result<HashMap<Option<Category>, WinnerStats>>
where
    G: Fn(usize) -> poker_core::Result<Outcome<usize>> + std::marker::Sync,
{
    let tally = if single_threaded {
        (0..iterations).try_fold(Tally::new(), |tally, round| {
            play_round(round).map(|outcome| record(tally, &outcome))
        })?
    } else {
        (0..iterations)
            .into_par_iter()
            .try_fold(Tally::new, |tally, round| {
                play_round(round).map(|outcome| record(tally, &outcome))
            })
            .try_reduce(Tally::new, |left, right| Ok(merge(left, right)))?
    };

    Ok(summarize(tally))
}

#[allow(clippy::cast_precision_loss)]
fn summarize(tally: Tally) -> HashMap<Option<Category>, WinnerStats> {
    let total = tally.values().map(|(rounds, _)| rounds).sum::<usize>() as f32;

    tally
        .into_iter()
        .map(|(category, (rounds, winners))| {
            (
                category,
                WinnerStats {
                    frequency: (rounds as f32) / total,
                    average_winners: (winners as f32) / (rounds as f32),
                },
            )
        })
        .collect()
}

fn label(category: Option<Category>) -> String {
    category.map_or_else(|| "no winner determined".to_owned(), |c| c.to_string())
}

fn print_winner_stats(stats: HashMap<Option<Category>, WinnerStats>) {
    let label_columns = Category::iter()
        .map(|category| label(Some(category)).len())
        .chain(std::iter::once(label(None).len()))
        .max()
        .unwrap_or_default();
    for (
        category,
        WinnerStats {
            frequency,
            average_winners,
        },
    ) in stats
        .into_iter()
        .sorted_by_key(|(category, _)| std::cmp::Reverse(*category))
    {
        println!(
            " - {:label_width$} {:>7.3}% (avg. winners: {average_winners:>4.2})",
            label(category),
            frequency * 100.0,
            label_width = label_columns
        );
    }
}

fn winner_stats(
    single_threaded: bool,
    iterations: usize,
    players: usize,
    seed: Option<u64>,
) -> Result<()> {
    ensure!(players > 0, "at least one player is needed");
    ensure!(
        players
            .checked_mul(HOLE_CARDS)
            .is_some_and(|hole| hole + TABLE_CARDS <= DECK_SIZE),
        "{players} players cannot be dealt from a single deck"
    );

    let base_seed = seed.unwrap_or_else(rand::random);
    tracing::info!(base_seed, iterations, players, "generating winner statistics");

    let play_round = |round: usize| -> poker_core::Result<Outcome<usize>> {
        let mut deck = Deck::seeded(base_seed.wrapping_add(round as u64));
        let contestants = deal_round(&mut deck, 1..=players, HOLE_CARDS, TABLE_CARDS)?;
        Ok(resolve(&contestants))
    };

    let stats = generate_winner_stats(single_threaded, iterations, play_round)?;

    println!("When dealing {players} players two cards each and five to the table, the deciding categories are:");
    print_winner_stats(stats);

    Ok(())
}

pub fn run(command: &CliCommands) -> Result<()> {
    match command {
        CliCommands::WinnerStats {
            single_threaded,
            iterations,
            players,
            seed,
        } => {
            let rounds = iterations
                .checked_mul(1_000)
                .with_context(|| format!("{iterations} thousand iterations overflow a usize"))?;
            winner_stats(*single_threaded, rounds, *players, *seed)
        }
    }
}
