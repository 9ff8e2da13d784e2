use soroban_sdk::{Address, Env};

use crate::error::CrowdfundError;
use crate::storage_types::*;

/// Campaign and pledge records, scoped to the current contract instance.
pub struct CampaignStore<'a> {
    env: &'a Env,
}

impl<'a> CampaignStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn has_config(&self) -> bool {
        self.env.storage().instance().has(&DataKey::Config)
    }

    pub fn config(&self) -> Result<Config, CrowdfundError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(CrowdfundError::NotInitialized)
    }

    pub fn set_config(&self, config: &Config) {
        self.env.storage().instance().set(&DataKey::Config, config);
        self.env.storage().instance().set(&DataKey::CampaignCount, &0u64);
        self.extend_instance();
    }

    pub fn campaign_count(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0)
    }

    /// Reserves the next sequential id. Ids start at 1 and are never handed out twice.
    pub fn allocate_id(&self) -> Result<CampaignId, CrowdfundError> {
        let id = self
            .campaign_count()
            .checked_add(1)
            .ok_or(CrowdfundError::Overflow)?;
        self.env.storage().instance().set(&DataKey::CampaignCount, &id);
        self.extend_instance();
        Ok(id)
    }

    pub fn campaign(&self, id: CampaignId) -> Result<Campaign, CrowdfundError> {
        self.env
            .storage()
            .persistent()
            .get(&PersistentKey::Campaign(id))
            .ok_or(CrowdfundError::NotFound)
    }

    pub fn save_campaign(&self, campaign: &Campaign) {
        let key = PersistentKey::Campaign(campaign.id);
        self.env.storage().persistent().set(&key, campaign);
        self.extend_persistent(&key);
    }

    pub fn remove_campaign(&self, id: CampaignId) {
        self.env
            .storage()
            .persistent()
            .remove(&PersistentKey::Campaign(id));
    }

    pub fn pledge_of(&self, id: CampaignId, pledger: &Address) -> i128 {
        self.env
            .storage()
            .persistent()
            .get(&PersistentKey::Pledge(id, pledger.clone()))
            .unwrap_or(0)
    }

    pub fn set_pledge(&self, id: CampaignId, pledger: &Address, amount: i128) {
        let key = PersistentKey::Pledge(id, pledger.clone());
        if amount == 0 {
            self.env.storage().persistent().remove(&key);
            return;
        }
        self.env.storage().persistent().set(&key, &amount);
        self.extend_persistent(&key);
    }

    fn extend_instance(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
    }

    fn extend_persistent(&self, key: &PersistentKey) {
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
    }
}
