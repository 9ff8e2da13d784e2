#![no_std]

mod clock;
mod error;
mod events;
mod registry;
mod storage;
mod storage_types;
mod token_ledger;


use soroban_sdk::{contract, contractimpl, Address, Env};

pub use clock::{Clock, LedgerClock};
pub use error::CrowdfundError;
pub use registry::Registry;
pub use storage_types::{Campaign, CampaignId, Config, Phase};
pub use token_ledger::{TokenAdapter, TokenLedger};

use storage::CampaignStore;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Bind the contract to its token and the longest campaign window it accepts
    pub fn initialize(e: Env, token: Address, max_duration: u64) -> Result<(), CrowdfundError> {
        let store = CampaignStore::new(&e);
        if store.has_config() {
            return Err(CrowdfundError::AlreadyInitialized);
        }
        if max_duration == 0 {
            return Err(CrowdfundError::InvalidConfig);
        }

        store.set_config(&Config {
            token,
            max_duration,
        });
        Ok(())
    }

    /// Open a new campaign; returns its sequential id
    pub fn launch(
        e: Env,
        creator: Address,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        registry(&e)?.launch(&creator, goal, start_time, end_time)
    }

    /// Delete a campaign that has not started yet
    pub fn cancel(e: Env, creator: Address, campaign_id: CampaignId) -> Result<(), CrowdfundError> {
        creator.require_auth();
        registry(&e)?.cancel(&creator, campaign_id)
    }

    pub fn pledge(
        e: Env,
        pledger: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        pledger.require_auth();
        registry(&e)?.pledge(&pledger, campaign_id, amount)
    }

    pub fn unpledge(
        e: Env,
        pledger: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        pledger.require_auth();
        registry(&e)?.unpledge(&pledger, campaign_id, amount)
    }

    /// Send a successful campaign's funds to its creator
    pub fn claim(e: Env, campaign_id: CampaignId) -> Result<(), CrowdfundError> {
        registry(&e)?.claim(campaign_id)
    }

    /// Withdraw the caller's pledge from a campaign that missed its goal
    pub fn refund(e: Env, pledger: Address, campaign_id: CampaignId) -> Result<(), CrowdfundError> {
        pledger.require_auth();
        registry(&e)?.refund(&pledger, campaign_id)
    }

    pub fn get_pledge_amount(e: Env, campaign_id: CampaignId) -> Result<i128, CrowdfundError> {
        registry(&e)?.pledged_total(campaign_id)
    }

    pub fn get_pledge(e: Env, campaign_id: CampaignId, pledger: Address) -> Result<i128, CrowdfundError> {
        Ok(registry(&e)?.pledge_of(campaign_id, &pledger))
    }

    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
        registry(&e)?.campaign(campaign_id)
    }

    pub fn get_phase(e: Env, campaign_id: CampaignId) -> Result<Phase, CrowdfundError> {
        registry(&e)?.phase(campaign_id)
    }

    /// Number of ids handed out so far, cancelled campaigns included
    pub fn campaign_count(e: Env) -> u64 {
        CampaignStore::new(&e).campaign_count()
    }

    pub fn get_config(e: Env) -> Result<Config, CrowdfundError> {
        CampaignStore::new(&e).config()
    }

    /// Tokens currently held by the contract across all campaigns
    pub fn get_custody_balance(e: Env) -> Result<i128, CrowdfundError> {
        let config = CampaignStore::new(&e).config()?;
        let adapter = TokenAdapter::new(&e, &config.token);
        Ok(adapter.balance_of(adapter.custody()))
    }
}

fn registry(e: &Env) -> Result<Registry<'_, TokenAdapter<'_>, LedgerClock<'_>>, CrowdfundError> {
    let config = CampaignStore::new(e).config()?;
    Ok(Registry::new(
        e,
        TokenAdapter::new(e, &config.token),
        LedgerClock(e),
        config.max_duration,
    ))
}
