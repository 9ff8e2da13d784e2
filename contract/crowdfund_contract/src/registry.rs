//! Campaign lifecycle rules.
//!
//! A campaign's phase is derived from the clock on every call:
//!
//! ```text
//! Pending ──► Active ──► Succeeded (claim once)
//!    │                └► Failed    (refund per pledger)
//!    └──► cancelled (entry removed)
//! ```
//!
//! Every mutating operation runs validate, then token movement, then commit.
//! Nothing is written until the [`TokenLedger`] reports success.

use soroban_sdk::{Address, Env};

use crate::clock::Clock;
use crate::error::CrowdfundError;
use crate::events;
use crate::storage::CampaignStore;
use crate::storage_types::{Campaign, CampaignId, Phase};
use crate::token_ledger::TokenLedger;

pub struct Registry<'a, L: TokenLedger, C: Clock> {
    env: &'a Env,
    store: CampaignStore<'a>,
    ledger: L,
    clock: C,
    max_duration: u64,
}

impl<'a, L: TokenLedger, C: Clock> Registry<'a, L, C> {
    pub fn new(env: &'a Env, ledger: L, clock: C, max_duration: u64) -> Self {
        Self {
            env,
            store: CampaignStore::new(env),
            ledger,
            clock,
            max_duration,
        }
    }

    pub fn launch(
        &self,
        creator: &Address,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<CampaignId, CrowdfundError> {
        let now = self.clock.now();
        ensure_positive(goal)?;
        if start_time < now {
            return Err(CrowdfundError::InvalidStart);
        }
        if end_time <= start_time {
            return Err(CrowdfundError::InvalidWindow);
        }
        if end_time - start_time > self.max_duration {
            return Err(CrowdfundError::DurationExceeded);
        }

        let id = self.store.allocate_id()?;
        let campaign = Campaign {
            id,
            creator: creator.clone(),
            goal,
            pledged: 0,
            start_time,
            end_time,
            claimed: false,
        };
        self.store.save_campaign(&campaign);

        events::emit_launched(
            self.env,
            events::CampaignLaunchedEvent {
                campaign_id: id,
                creator: creator.clone(),
                goal,
                start_time,
                end_time,
            },
        );

        Ok(id)
    }

    pub fn cancel(&self, caller: &Address, id: CampaignId) -> Result<(), CrowdfundError> {
        let now = self.clock.now();
        let campaign = self.store.campaign(id)?;
        if campaign.creator != *caller {
            return Err(CrowdfundError::NotCreator);
        }
        if now >= campaign.start_time {
            return Err(CrowdfundError::AlreadyStarted);
        }

        self.store.remove_campaign(id);

        events::emit_cancelled(self.env, events::CampaignCancelledEvent { campaign_id: id });
        Ok(())
    }

    pub fn pledge(&self, pledger: &Address, id: CampaignId, amount: i128) -> Result<(), CrowdfundError> {
        let now = self.clock.now();
        let mut campaign = self.store.campaign(id)?;
        ensure_active(&campaign, now)?;
        ensure_positive(amount)?;

        let balance = self
            .store
            .pledge_of(id, pledger)
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;
        campaign.pledged = campaign
            .pledged
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;

        self.ledger.pull(pledger, amount)?;

        self.store.set_pledge(id, pledger, balance);
        self.store.save_campaign(&campaign);

        events::emit_pledged(
            self.env,
            events::PledgeMovedEvent {
                campaign_id: id,
                pledger: pledger.clone(),
                amount,
            },
        );
        Ok(())
    }

    pub fn unpledge(&self, pledger: &Address, id: CampaignId, amount: i128) -> Result<(), CrowdfundError> {
        let now = self.clock.now();
        let mut campaign = self.store.campaign(id)?;
        ensure_active(&campaign, now)?;
        ensure_positive(amount)?;

        let balance = self.store.pledge_of(id, pledger);
        if balance < amount {
            return Err(CrowdfundError::InsufficientPledge);
        }
        campaign.pledged = campaign
            .pledged
            .checked_sub(amount)
            .ok_or(CrowdfundError::Overflow)?;

        self.ledger.push(pledger, amount)?;

        self.store.set_pledge(id, pledger, balance - amount);
        self.store.save_campaign(&campaign);

        events::emit_unpledged(
            self.env,
            events::PledgeMovedEvent {
                campaign_id: id,
                pledger: pledger.clone(),
                amount,
            },
        );
        Ok(())
    }

    /// Pays the whole pledged total to the creator, whoever triggers it.
    pub fn claim(&self, id: CampaignId) -> Result<(), CrowdfundError> {
        let now = self.clock.now();
        let mut campaign = self.store.campaign(id)?;
        match campaign.phase(now) {
            Phase::Pending | Phase::Active => return Err(CrowdfundError::NotEnded),
            Phase::Failed => return Err(CrowdfundError::GoalNotMet),
            Phase::Succeeded => {}
        }
        if campaign.claimed {
            return Err(CrowdfundError::AlreadyClaimed);
        }

        self.ledger.push(&campaign.creator, campaign.pledged)?;

        campaign.claimed = true;
        self.store.save_campaign(&campaign);

        events::emit_claimed(
            self.env,
            events::CampaignClaimedEvent {
                campaign_id: id,
                creator: campaign.creator.clone(),
                amount: campaign.pledged,
            },
        );
        Ok(())
    }

    /// Returns the caller's whole balance from a campaign that missed its goal.
    pub fn refund(&self, pledger: &Address, id: CampaignId) -> Result<(), CrowdfundError> {
        let now = self.clock.now();
        let mut campaign = self.store.campaign(id)?;
        match campaign.phase(now) {
            Phase::Pending | Phase::Active => return Err(CrowdfundError::NotEnded),
            Phase::Succeeded => return Err(CrowdfundError::GoalMet),
            Phase::Failed => {}
        }

        let balance = self.store.pledge_of(id, pledger);
        if balance <= 0 {
            return Err(CrowdfundError::NothingToRefund);
        }
        campaign.pledged = campaign
            .pledged
            .checked_sub(balance)
            .ok_or(CrowdfundError::Overflow)?;

        self.ledger.push(pledger, balance)?;

        self.store.set_pledge(id, pledger, 0);
        self.store.save_campaign(&campaign);

        events::emit_refunded(
            self.env,
            events::PledgeMovedEvent {
                campaign_id: id,
                pledger: pledger.clone(),
                amount: balance,
            },
        );
        Ok(())
    }

    pub fn pledged_total(&self, id: CampaignId) -> Result<i128, CrowdfundError> {
        Ok(self.store.campaign(id)?.pledged)
    }

    pub fn pledge_of(&self, id: CampaignId, pledger: &Address) -> i128 {
        self.store.pledge_of(id, pledger)
    }

    pub fn campaign(&self, id: CampaignId) -> Result<Campaign, CrowdfundError> {
        self.store.campaign(id)
    }

    pub fn phase(&self, id: CampaignId) -> Result<Phase, CrowdfundError> {
        Ok(self.store.campaign(id)?.phase(self.clock.now()))
    }
}

fn ensure_positive(amount: i128) -> Result<(), CrowdfundError> {
    if amount <= 0 {
        return Err(CrowdfundError::InvalidAmount);
    }
    Ok(())
}

fn ensure_active(campaign: &Campaign, now: u64) -> Result<(), CrowdfundError> {
    match campaign.phase(now) {
        Phase::Pending => Err(CrowdfundError::NotStarted),
        Phase::Active => Ok(()),
        Phase::Succeeded | Phase::Failed => Err(CrowdfundError::AlreadyEnded),
    }
}
