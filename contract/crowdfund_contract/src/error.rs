use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidAmount = 4,
    InvalidStart = 5,
    InvalidWindow = 6,
    DurationExceeded = 7,
    NotFound = 8,
    NotStarted = 9,
    AlreadyEnded = 10,
    NotEnded = 11,
    GoalNotMet = 12,
    GoalMet = 13,
    InsufficientPledge = 14,
    NothingToRefund = 15,
    AlreadyClaimed = 16,
    NotCreator = 17,
    AlreadyStarted = 18,
    TransferFailed = 19,
    Overflow = 20,
}
