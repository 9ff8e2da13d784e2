use soroban_sdk::Env;

/// Source of the current time, in seconds.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Reads the ledger close timestamp.
pub struct LedgerClock<'a>(pub &'a Env);

impl Clock for LedgerClock<'_> {
    fn now(&self) -> u64 {
        self.0.ledger().timestamp()
    }
}
