//! # Transaction Processor
//!
//! Submission, simulation, and lookup of transactions, routed by the
//! sender's shard.

use crate::domain::ProxyError;
use lp_03_dispatch::{Dispatcher, ObserverKind};
use shared_types::{
    decode_address, FullTransaction, SendTransactionPayload, Transaction, TransactionPayload,
    TransactionSimulationPayload, TransactionSimulationResults,
};
use std::sync::Arc;
use tracing::{debug, warn};

const SEND_PATH: &str = "/transaction/send";
const SIMULATE_PATH: &str = "/transaction/simulate";

/// Shard-routed transaction operations.
pub struct TransactionProcessor {
    dispatcher: Arc<Dispatcher>,
}

impl TransactionProcessor {
    /// Create a processor over the dispatch engine.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Submit a transaction on the sender's shard; the observer answers with
    /// the assigned transaction hash.
    pub async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProxyError> {
        let shard_id = self.sender_shard(tx)?;
        debug!(sender = %tx.sender, shard_id, "[lp-05] sending transaction");

        let dispatcher = self.dispatcher.as_ref();
        let payload: SendTransactionPayload = dispatcher
            .try_on_shard(shard_id, |observer| async move {
                dispatcher.observer_post(&observer, SEND_PATH, tx).await
            })
            .await?;

        Ok(payload.tx_hash)
    }

    /// Simulate a transaction on the sender's shard without committing it.
    pub async fn simulate_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<TransactionSimulationResults, ProxyError> {
        let shard_id = self.sender_shard(tx)?;
        debug!(sender = %tx.sender, shard_id, "[lp-05] simulating transaction");

        let dispatcher = self.dispatcher.as_ref();
        let payload: TransactionSimulationPayload = dispatcher
            .try_on_shard(shard_id, |observer| async move {
                dispatcher.observer_post(&observer, SIMULATE_PATH, tx).await
            })
            .await?;

        Ok(payload.result)
    }

    /// Look a transaction up by hash.
    ///
    /// With a known sender the sender's shard is asked first; when that
    /// yields nothing (or no sender is known) every shard is swept and the
    /// first definitive answer wins. A transaction the live observers no
    /// longer hold is finally asked of the full-history fleet.
    pub async fn get_transaction_by_hash(
        &self,
        hash: &str,
        sender: Option<&str>,
    ) -> Result<FullTransaction, ProxyError> {
        let dispatcher = self.dispatcher.as_ref();

        if let Some(sender) = sender {
            let sender_bytes = decode_address(sender)?;
            let shard_id = self.dispatcher.compute_shard_id(&sender_bytes)?;

            let path = format!("/transaction/{}?sender={}", hash, sender);
            let path = path.as_str();
            let result: Result<TransactionPayload, _> = dispatcher
                .try_on_shard(shard_id, |observer| async move {
                    dispatcher.observer_get(&observer, path).await
                })
                .await;

            match result {
                Ok(payload) => return Ok(payload.transaction),
                Err(err) => {
                    warn!(hash, shard_id, error = %err, "[lp-05] sender shard lookup missed, sweeping");
                }
            }
        }

        let path = format!("/transaction/{}", hash);
        let path = path.as_str();
        let live: Result<TransactionPayload, _> = dispatcher
            .try_on_all_shards(|observer| async move {
                dispatcher.observer_get(&observer, path).await
            })
            .await;

        let payload = match live {
            Ok(payload) => payload,
            Err(err) => {
                warn!(hash, error = %err, "[lp-05] live sweep missed, asking full-history fleet");
                dispatcher
                    .try_on_all_shards_nodes(ObserverKind::FullHistory, |observer| async move {
                        dispatcher.observer_get(&observer, path).await
                    })
                    .await?
            }
        };

        Ok(payload.transaction)
    }

    fn sender_shard(&self, tx: &Transaction) -> Result<u32, ProxyError> {
        let sender_bytes = decode_address(&tx.sender)?;
        Ok(self.dispatcher.compute_shard_id(&sender_bytes)?)
    }
}
