//! # Proxy Facade
//!
//! One object exposing every operation of the proxy, composed from the
//! processors and providers. The REST layer holds an `Arc<ProxyFacade>` and
//! nothing else.

use crate::account::AccountProcessor;
use crate::algorithms::compute_transaction_hash;
use crate::domain::ProxyError;
use crate::transaction::TransactionProcessor;
use lp_03_dispatch::Dispatcher;
use lp_04_blocks::{BlockProvider, HyperblockAggregator, NetworkStatusProvider};
use shared_types::{
    Account, Block, FullTransaction, Hyperblock, NetworkConfig, NetworkStatus, ShardId,
    Transaction, TransactionSimulationResults,
};
use std::sync::Arc;

/// The inbound surface the REST handlers consume.
pub struct ProxyFacade {
    accounts: AccountProcessor,
    transactions: TransactionProcessor,
    blocks: Arc<BlockProvider>,
    hyperblocks: HyperblockAggregator,
    status: NetworkStatusProvider,
}

impl ProxyFacade {
    /// Compose the facade over one dispatch engine.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        let blocks = Arc::new(BlockProvider::new(Arc::clone(&dispatcher)));

        Self {
            accounts: AccountProcessor::new(Arc::clone(&dispatcher)),
            transactions: TransactionProcessor::new(Arc::clone(&dispatcher)),
            hyperblocks: HyperblockAggregator::new(Arc::clone(&blocks)),
            status: NetworkStatusProvider::new(dispatcher),
            blocks,
        }
    }

    /// Account state from the shard owning the address.
    pub async fn get_account(&self, address: &str) -> Result<Account, ProxyError> {
        self.accounts.get_account(address).await
    }

    /// Submit a transaction; returns the assigned hash.
    pub async fn send_transaction(&self, tx: &Transaction) -> Result<String, ProxyError> {
        self.transactions.send_transaction(tx).await
    }

    /// Simulate a transaction without committing it.
    pub async fn simulate_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<TransactionSimulationResults, ProxyError> {
        self.transactions.simulate_transaction(tx).await
    }

    /// Look a transaction up by hash, with an optional sender hint.
    pub async fn get_transaction_by_hash(
        &self,
        hash: &str,
        sender: Option<&str>,
    ) -> Result<FullTransaction, ProxyError> {
        self.transactions.get_transaction_by_hash(hash, sender).await
    }

    /// The canonical transaction hash; never touches the network.
    pub fn compute_transaction_hash(&self, tx: &Transaction) -> Result<String, ProxyError> {
        compute_transaction_hash(tx)
    }

    /// Block at `nonce` on one shard.
    pub async fn get_block_by_nonce(
        &self,
        shard_id: ShardId,
        nonce: u64,
        with_txs: bool,
    ) -> Result<Block, ProxyError> {
        Ok(self.blocks.get_block_by_nonce(shard_id, nonce, with_txs).await?)
    }

    /// Block with `hash` on one shard.
    pub async fn get_block_by_hash(
        &self,
        shard_id: ShardId,
        hash: &str,
        with_txs: bool,
    ) -> Result<Block, ProxyError> {
        Ok(self.blocks.get_block_by_hash(shard_id, hash, with_txs).await?)
    }

    /// Hyperblock anchored at the metachain block with `nonce`.
    pub async fn get_hyperblock_by_nonce(&self, nonce: u64) -> Result<Hyperblock, ProxyError> {
        Ok(self.hyperblocks.get_hyperblock_by_nonce(nonce).await?)
    }

    /// Hyperblock anchored at the metachain block with `hash`.
    pub async fn get_hyperblock_by_hash(&self, hash: &str) -> Result<Hyperblock, ProxyError> {
        Ok(self.hyperblocks.get_hyperblock_by_hash(hash).await?)
    }

    /// Status metrics of one shard.
    pub async fn get_network_status(&self, shard_id: ShardId) -> Result<NetworkStatus, ProxyError> {
        Ok(self.status.get_network_status(shard_id).await?)
    }

    /// Chain-wide configuration constants.
    pub async fn get_network_config(&self) -> Result<NetworkConfig, ProxyError> {
        Ok(self.status.get_network_config().await?)
    }

    /// The highest hyperblock nonce guaranteed fully notarized everywhere.
    pub async fn get_latest_fully_synchronized_hyperblock_nonce(
        &self,
    ) -> Result<u64, ProxyError> {
        Ok(self
            .status
            .get_latest_fully_synchronized_hyperblock_nonce()
            .await?)
    }
}
