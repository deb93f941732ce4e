use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,               // instance: the campaign aggregate
    Contribution(Address),  // persistent: amount held for a contributor
}

// Lifecycle of a campaign. Discriminants are part of the public interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignState {
    Ongoing = 0,
    Failed = 1,
    Succeeded = 2,
    PaidOut = 3,
}

/// The single campaign held by a contract instance.
///
/// Everything except `state` and `total_collected` is fixed at
/// initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub name: String,
    pub target_amount: i128,           // Base units of `token`
    pub deadline: u64,                 // created_at + duration
    pub beneficiary: Address,
    pub token: Address,                // Native asset contract in production
    pub created_at: u64,
    pub state: CampaignState,
    pub total_collected: i128,
}

impl Campaign {
    pub fn is_beneficiary(&self, caller: &Address) -> bool {
        &self.beneficiary == caller
    }

    pub fn goal_reached(&self) -> bool {
        self.total_collected >= self.target_amount
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidAmount = 4,
    DeadlinePassed = 5,
    TooEarly = 6,
    AlreadyResolved = 7,
    NotAuthorized = 8,
    InvalidState = 9,
    NothingToWithdraw = 10,
    TransferFailed = 11,
    ArithmeticOverflow = 12,
}

impl CrowdfundingError {
    pub fn reason(&self) -> &'static str {
        match self {
            CrowdfundingError::AlreadyInitialized => "Campaign is already initialized",
            CrowdfundingError::NotInitialized => "Campaign is not initialized",
            CrowdfundingError::InvalidConfig => "Target amount and duration must be positive",
            CrowdfundingError::InvalidAmount => "Contribution must be positive",
            CrowdfundingError::DeadlinePassed => "Cannot contribute after a deadline",
            CrowdfundingError::TooEarly => "Cannot finish campaign before a deadline",
            CrowdfundingError::AlreadyResolved => "Campaign is already finished",
            CrowdfundingError::NotAuthorized => "Only the owner can cancel the campaign or collect funds",
            CrowdfundingError::InvalidState => "Operation is not allowed in the current campaign state",
            CrowdfundingError::NothingToWithdraw => "Nothing to withdraw",
            CrowdfundingError::TransferFailed => "Recipient rejected the transfer",
            CrowdfundingError::ArithmeticOverflow => "Amount overflow",
        }
    }
}

// Constants
pub const STROOPS_PER_XLM: i128 = 10_000_000;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
