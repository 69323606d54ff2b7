//! Parallel derivation of many master keys.

use std::sync::mpsc;

use threadpool::ThreadPool;
use tracing::{info, warn};

use crate::{
    config::{BatchConfig, KeyRequest},
    errors::{BatchError, MnemonicError},
    master_key::{derive_master_key_from_mnemonic, MasterKey},
};

/// Result of deriving one [`KeyRequest`].
#[derive(Debug)]
pub struct BatchOutput {
    /// Label copied from the request.
    pub label: String,

    /// The derived key, or why the mnemonic was rejected.
    pub result: Result<MasterKey, MnemonicError>,
}

/// Derives every key in `config` on a thread pool.
///
/// Outputs are in the same order as `config.keys`. An invalid mnemonic only fails its own entry.
pub fn derive_batch(config: &BatchConfig) -> Result<Vec<BatchOutput>, BatchError> {
    let num_threads = config.num_threads();
    if num_threads == 0 {
        return Err(BatchError::NoWorkers);
    }

    let total = config.keys.len();
    info!(keys = total, num_threads, "starting batch derivation");

    let pool = ThreadPool::new(num_threads);
    let (tx, rx) = mpsc::channel();

    for (index, request) in config.keys.iter().cloned().enumerate() {
        let tx = tx.clone();
        pool.execute(move || {
            let output = derive_one(&request);
            // the receiver outlives the pool
            let _ = tx.send((index, output));
        });
    }
    drop(tx);
    pool.join();

    let mut slots: Vec<Option<BatchOutput>> = std::iter::repeat_with(|| None).take(total).collect();
    for (index, output) in rx {
        slots[index] = Some(output);
    }

    let outputs: Vec<BatchOutput> = slots
        .into_iter()
        .map(|slot| slot.expect("derivation worker panicked"))
        .collect();

    let failed = outputs.iter().filter(|out| out.result.is_err()).count();
    info!(derived = total - failed, failed, "finished batch derivation");

    Ok(outputs)
}

fn derive_one(request: &KeyRequest) -> BatchOutput {
    let result = derive_master_key_from_mnemonic(&request.mnemonic, request.passphrase.as_bytes());
    if let Err(err) = &result {
        warn!(label = %request.label, %err, "rejected mnemonic");
    }

    BatchOutput {
        label: request.label.clone(),
        result,
    }
}
