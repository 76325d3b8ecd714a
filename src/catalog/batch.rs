use std::sync::Arc;

use futures::future::join_all;
use log::info;
use tokio::sync::Semaphore;

use crate::cards::card::Card;
use crate::catalog::assembler::CardAssembler;
use crate::catalog::page_fetcher::PageSource;
use crate::error::CardError;

/// Assembles several cards of one set at once.
///
/// Every card is fetched on a blocking worker; at most `concurrency` of them
/// run at the same time. Results come back in the order of `card_numbers`.
pub async fn assemble_batch<S>(
    assembler: Arc<CardAssembler<S>>,
    set_code: &str,
    card_numbers: Vec<String>,
    concurrency: usize,
) -> Vec<(String, Result<Card, CardError>)>
where
    S: PageSource + 'static,
{
    let start_time = chrono::prelude::Local::now();
    let card_count = card_numbers.len();
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    let fetches = card_numbers.into_iter().map(|card_number| {
        let semaphore = Arc::clone(&semaphore);
        let assembler = Arc::clone(&assembler);
        let set_code = set_code.to_string();

        async move {
            let result = match semaphore.acquire().await {
                Ok(_permit) => {
                    let number = card_number.clone();
                    tokio::task::spawn_blocking(move || assembler.assemble(&set_code, &number))
                        .await
                        .unwrap_or_else(|e| Err(CardError::Interrupted(e.to_string())))
                }
                Err(e) => Err(CardError::Interrupted(e.to_string())),
            };
            (card_number, result)
        }
    });

    let results = join_all(fetches).await;

    let end_time = chrono::prelude::Local::now();
    info!(
        "Batch of {} cards from {} started at: {}. Finished at: {}. Took: {} seconds",
        card_count,
        set_code,
        start_time,
        end_time,
        (end_time - start_time).num_seconds()
    );
    results
}
