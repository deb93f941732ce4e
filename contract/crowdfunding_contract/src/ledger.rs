use soroban_sdk::{log, token, Address, Env};

use crate::storage_types::*;

pub fn has_campaign(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

pub fn load_campaign(env: &Env) -> Result<Campaign, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or_else(|| reject(env, CrowdfundingError::NotInitialized))
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(env);
}

/// Amount currently held on behalf of `contributor`
pub fn contribution_of(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Move `amount` of the campaign token. A rejected transfer surfaces as
/// `TransferFailed` so the caller's invocation is rolled back as a whole.
pub fn transfer(
    env: &Env,
    token_address: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CrowdfundingError> {
    let token_client = token::Client::new(env, token_address);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(reject(env, CrowdfundingError::TransferFailed)),
    }
}

/// Log a rejected call and hand the error back for returning
pub fn reject(env: &Env, error: CrowdfundingError) -> CrowdfundingError {
    log!(env, "crowdfunding call rejected", error as u32);
    error
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}
