//! # Account Processor
//!
//! Routes account lookups to the shard owning the address.

use crate::domain::ProxyError;
use lp_03_dispatch::Dispatcher;
use shared_types::{decode_address, Account, AccountPayload};
use std::sync::Arc;
use tracing::debug;

/// Shard-routed account reads.
pub struct AccountProcessor {
    dispatcher: Arc<Dispatcher>,
}

impl AccountProcessor {
    /// Create a processor over the dispatch engine.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the account behind a hex address from its owning shard.
    pub async fn get_account(&self, address: &str) -> Result<Account, ProxyError> {
        let address_bytes = decode_address(address)?;
        let shard_id = self.dispatcher.compute_shard_id(&address_bytes)?;
        debug!(address, shard_id, "[lp-05] account lookup");

        let path = format!("/address/{}", address);
        let path = path.as_str();
        let dispatcher = self.dispatcher.as_ref();
        let payload: AccountPayload = dispatcher
            .try_on_shard(shard_id, |observer| async move {
                dispatcher.observer_get(&observer, path).await
            })
            .await?;

        Ok(payload.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dispatcher_with, shard_address, ScriptedRest};
    use shared_types::{AddressError, NodeData};

    #[tokio::test]
    async fn test_get_account_routes_to_owning_shard() {
        // Last byte 0x01 lands on shard 1 of 2.
        let address = shard_address(0x01);
        let account = Account {
            address: address.clone(),
            nonce: 5,
            balance: "1000".to_string(),
            ..Account::default()
        };
        let rest = ScriptedRest::new().on_ok(
            &format!("http://obs1/address/{}", address),
            AccountPayload { account },
        );

        let processor = AccountProcessor::new(dispatcher_with(
            2,
            vec![
                NodeData::new("http://obs0", 0),
                NodeData::new("http://obs1", 1),
            ],
            rest,
        ));

        let account = processor.get_account(&address).await.unwrap();
        assert_eq!(account.nonce, 5);
        assert_eq!(account.balance, "1000");
    }

    #[tokio::test]
    async fn test_get_account_rejects_malformed_address() {
        let processor = AccountProcessor::new(dispatcher_with(
            2,
            vec![NodeData::new("http://obs0", 0)],
            ScriptedRest::new(),
        ));

        let err = processor.get_account("not-hex").await.unwrap_err();
        assert!(matches!(err, ProxyError::Address(AddressError::InvalidEncoding(_))));
        assert_eq!(err.http_status(), 400);
    }

    #[tokio::test]
    async fn test_get_account_rejects_short_address() {
        let processor = AccountProcessor::new(dispatcher_with(
            2,
            vec![NodeData::new("http://obs0", 0)],
            ScriptedRest::new(),
        ));

        let err = processor.get_account("0102").await.unwrap_err();
        assert_eq!(
            err,
            ProxyError::Address(AddressError::InvalidLength { got: 2 })
        );
    }
}
