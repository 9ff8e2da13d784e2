use soroban_sdk::{contracttype, Address};

pub type CampaignId = u64;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Pledge(CampaignId, Address), // (CampaignID, Pledger) -> amount
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub token: Address,
    pub max_duration: u64, // Longest allowed end_time - start_time, in seconds
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub pledged: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub claimed: bool,
}

/// Where a campaign sits in its lifecycle at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum Phase {
    Pending,
    Active,
    Succeeded,
    Failed,
}

impl Campaign {
    pub fn phase(&self, now: u64) -> Phase {
        if now < self.start_time {
            Phase::Pending
        } else if now < self.end_time {
            Phase::Active
        } else if self.pledged >= self.goal {
            Phase::Succeeded
        } else {
            Phase::Failed
        }
    }
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
