use soroban_sdk::{log, token, Address, Env};

use crate::error::CrowdfundError;

/// Moves funds between participants and the custody pool.
///
/// Both movements are all-or-nothing: an `Err` means no balance changed.
pub trait TokenLedger {
    /// Moves `amount` from `from` into custody.
    fn pull(&self, from: &Address, amount: i128) -> Result<(), CrowdfundError>;

    /// Moves `amount` out of custody to `to`.
    fn push(&self, to: &Address, amount: i128) -> Result<(), CrowdfundError>;

    fn balance_of(&self, who: &Address) -> i128;
}

/// [`TokenLedger`] backed by a Soroban token contract, with this contract as custodian.
pub struct TokenAdapter<'a> {
    env: &'a Env,
    client: token::TokenClient<'a>,
    custody: Address,
}

impl<'a> TokenAdapter<'a> {
    pub fn new(env: &'a Env, token_address: &Address) -> Self {
        Self {
            env,
            client: token::TokenClient::new(env, token_address),
            custody: env.current_contract_address(),
        }
    }

    pub fn custody(&self) -> &Address {
        &self.custody
    }

    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
        match self.client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "token transfer rejected", from.clone(), to.clone(), amount);
                Err(CrowdfundError::TransferFailed)
            }
        }
    }
}

impl TokenLedger for TokenAdapter<'_> {
    fn pull(&self, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
        self.transfer(from, &self.custody, amount)
    }

    fn push(&self, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
        self.transfer(&self.custody, to, amount)
    }

    fn balance_of(&self, who: &Address) -> i128 {
        self.client.balance(who)
    }
}
