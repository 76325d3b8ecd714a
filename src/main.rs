use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};

use cardbase::catalog::assembler::CardAssembler;
use cardbase::catalog::batch::assemble_batch;
use cardbase::catalog::page_fetcher::{HttpPageSource, PageFetcher};
use cardbase::cards::collection::Collection;
use cardbase::shell::{describe, Command, Outcome, Session};
use cardbase::utilities::config::CONFIG;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data_file = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Please provide a valid database file as the first argument.");
            std::process::exit(1);
        }
    };

    info!("Using catalog at {}", CONFIG.catalog_url);
    let fetcher = PageFetcher::new(&CONFIG.catalog_url, HttpPageSource::new()?);
    let assembler = Arc::new(CardAssembler::new(fetcher));
    let runtime = tokio::runtime::Runtime::new()?;

    println!("Welcome to cardbase");
    println!("For a list of commands, type \"help\"");

    let collection = match Collection::load(&data_file) {
        Ok(collection) => collection,
        Err(e) => {
            error!("Failed to load {}: {}", data_file.display(), e);
            eprintln!("Error: the provided file is invalid.");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} card(s) from \"{}\"",
        collection.total(),
        data_file.display()
    );

    let stdin = io::stdin();
    let mut session = Session::with_collection(data_file, collection);

    loop {
        print!("{}", session.prompt());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let (next, outcome) = session.apply(Command::parse(&line));
        session = next;

        match outcome {
            Outcome::Message(message) => println!("{}", message),
            Outcome::Exit => break,
            Outcome::Save => match session.save() {
                Ok(saved) => {
                    session = saved;
                    println!("Cardbase was saved to \"{}\"", session.data_file().display());
                }
                Err(e) => {
                    error!("Failed to save to {}: {}", session.data_file().display(), e);
                    println!("Could not write to \"{}\"", session.data_file().display());
                }
            },
            Outcome::Fetch {
                set_code,
                card_numbers,
            } => {
                println!("Fetching {} card(s) from {}", card_numbers.len(), set_code);

                let results = if card_numbers.len() == 1 {
                    let card_number = card_numbers[0].clone();
                    let result = assembler.assemble(&set_code, &card_number);
                    vec![(card_number, result)]
                } else {
                    runtime.block_on(assemble_batch(
                        Arc::clone(&assembler),
                        &set_code,
                        card_numbers,
                        CONFIG.fetch_concurrency,
                    ))
                };

                for (card_number, result) in results {
                    match result {
                        Ok(card) => {
                            let (next, message) = session.add(card);
                            session = next;
                            println!("{} {}", card_number, message);
                        }
                        Err(e) => println!("{}", describe(&card_number, &Err(e))),
                    }
                }
            }
        }
    }

    Ok(())
}
