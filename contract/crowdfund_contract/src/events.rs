use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignLaunchedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCancelledEvent {
    pub campaign_id: CampaignId,
}

/// Shared payload for pledge, unpledge and refund movements.
#[contracttype]
#[derive(Clone)]
pub struct PledgeMovedEvent {
    pub campaign_id: CampaignId,
    pub pledger: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignClaimedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_launched(env: &Env, event: CampaignLaunchedEvent) {
    env.events().publish((Symbol::new(env, "launched"),), event);
}

pub fn emit_cancelled(env: &Env, event: CampaignCancelledEvent) {
    env.events().publish((Symbol::new(env, "cancelled"),), event);
}

pub fn emit_pledged(env: &Env, event: PledgeMovedEvent) {
    env.events().publish((Symbol::new(env, "pledged"),), event);
}

pub fn emit_unpledged(env: &Env, event: PledgeMovedEvent) {
    env.events().publish((Symbol::new(env, "unpledged"),), event);
}

pub fn emit_refunded(env: &Env, event: PledgeMovedEvent) {
    env.events().publish((Symbol::new(env, "refunded"),), event);
}

pub fn emit_claimed(env: &Env, event: CampaignClaimedEvent) {
    env.events().publish((Symbol::new(env, "claimed"),), event);
}
