#![no_std]

mod events;
mod ledger;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use events::{
    CampaignCancelledEvent, CampaignFinishedEvent, CollectedEvent, ContributedEvent, WithdrawnEvent,
};
pub use storage_types::{Campaign, CampaignState, CrowdfundingError};
pub use utils::*;

use ledger::reject;

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Set up the campaign. The deadline is fixed at `now + duration_seconds`.
    pub fn initialize(
        env: Env,
        name: String,
        target_amount: i128,
        duration_seconds: u64,
        beneficiary: Address,
        token: Address,
    ) -> Result<(), CrowdfundingError> {
        if ledger::has_campaign(&env) {
            return Err(reject(&env, CrowdfundingError::AlreadyInitialized));
        }

        if target_amount <= 0 || duration_seconds == 0 {
            return Err(reject(&env, CrowdfundingError::InvalidConfig));
        }

        let now = env.ledger().timestamp();
        let deadline = deadline_from(now, duration_seconds)
            .ok_or_else(|| reject(&env, CrowdfundingError::InvalidConfig))?;

        let campaign = Campaign {
            name,
            target_amount,
            deadline,
            beneficiary,
            token,
            created_at: now,
            state: CampaignState::Ongoing,
            total_collected: 0,
        };

        ledger::save_campaign(&env, &campaign);
        log!(&env, "campaign created", target_amount, deadline);

        Ok(())
    }

    /// Pledge `amount` to the campaign while it is open
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), CrowdfundingError> {
        contributor.require_auth();

        let mut campaign = ledger::load_campaign(&env)?;
        let now = env.ledger().timestamp();

        if campaign.state != CampaignState::Ongoing || has_passed(now, campaign.deadline) {
            return Err(reject(&env, CrowdfundingError::DeadlinePassed));
        }

        if amount <= 0 {
            return Err(reject(&env, CrowdfundingError::InvalidAmount));
        }

        let held = add_amount(ledger::contribution_of(&env, &contributor), amount)
            .ok_or_else(|| reject(&env, CrowdfundingError::ArithmeticOverflow))?;
        campaign.total_collected = add_amount(campaign.total_collected, amount)
            .ok_or_else(|| reject(&env, CrowdfundingError::ArithmeticOverflow))?;

        ledger::transfer(
            &env,
            &campaign.token,
            &contributor,
            &env.current_contract_address(),
            amount,
        )?;

        ledger::set_contribution(&env, &contributor, held);
        ledger::save_campaign(&env, &campaign);

        events::emit_contributed(
            &env,
            ContributedEvent {
                contributor,
                amount,
                total_collected: campaign.total_collected,
            },
        );

        Ok(())
    }

    /// Resolve the campaign once the deadline has been reached. Anyone may call.
    pub fn finish_campaign(env: Env) -> Result<CampaignFinishedEvent, CrowdfundingError> {
        let mut campaign = ledger::load_campaign(&env)?;

        if campaign.state != CampaignState::Ongoing {
            return Err(reject(&env, CrowdfundingError::AlreadyResolved));
        }

        if !has_passed(env.ledger().timestamp(), campaign.deadline) {
            return Err(reject(&env, CrowdfundingError::TooEarly));
        }

        let succeeded = campaign.goal_reached();
        campaign.state = if succeeded {
            CampaignState::Succeeded
        } else {
            CampaignState::Failed
        };
        ledger::save_campaign(&env, &campaign);

        log!(&env, "campaign finished", succeeded, campaign.total_collected);

        let event = CampaignFinishedEvent {
            succeeded,
            total_collected: campaign.total_collected,
        };
        events::emit_campaign_finished(&env, event.clone());

        Ok(event)
    }

    /// Pay the collected total out to the beneficiary
    pub fn collect(env: Env, caller: Address) -> Result<i128, CrowdfundingError> {
        caller.require_auth();

        let mut campaign = ledger::load_campaign(&env)?;

        if !campaign.is_beneficiary(&caller) {
            return Err(reject(&env, CrowdfundingError::NotAuthorized));
        }

        if campaign.state != CampaignState::Succeeded {
            return Err(reject(&env, CrowdfundingError::InvalidState));
        }

        // Flip to PaidOut before funds leave the contract.
        let amount = campaign.total_collected;
        campaign.state = CampaignState::PaidOut;
        campaign.total_collected = 0;
        ledger::save_campaign(&env, &campaign);

        ledger::transfer(
            &env,
            &campaign.token,
            &env.current_contract_address(),
            &campaign.beneficiary,
            amount,
        )?;

        log!(&env, "campaign paid out", amount);

        events::emit_collected(
            &env,
            CollectedEvent {
                beneficiary: campaign.beneficiary,
                amount,
            },
        );

        Ok(amount)
    }

    /// Refund the caller's whole contribution from a failed campaign
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, CrowdfundingError> {
        caller.require_auth();

        let mut campaign = ledger::load_campaign(&env)?;

        if campaign.state != CampaignState::Failed {
            return Err(reject(&env, CrowdfundingError::InvalidState));
        }

        let amount = ledger::contribution_of(&env, &caller);
        if amount <= 0 {
            return Err(reject(&env, CrowdfundingError::NothingToWithdraw));
        }

        // Clear the balance before funds leave the contract.
        campaign.total_collected = sub_amount(campaign.total_collected, amount)
            .ok_or_else(|| reject(&env, CrowdfundingError::ArithmeticOverflow))?;
        ledger::set_contribution(&env, &caller, 0);
        ledger::save_campaign(&env, &campaign);

        ledger::transfer(
            &env,
            &campaign.token,
            &env.current_contract_address(),
            &caller,
            amount,
        )?;

        log!(&env, "contribution refunded", amount);

        events::emit_withdrawn(
            &env,
            WithdrawnEvent {
                contributor: caller,
                amount,
            },
        );

        Ok(amount)
    }

    /// Fail the campaign early, opening the refund path
    pub fn cancel(env: Env, caller: Address) -> Result<(), CrowdfundingError> {
        caller.require_auth();

        let mut campaign = ledger::load_campaign(&env)?;

        if !campaign.is_beneficiary(&caller) {
            return Err(reject(&env, CrowdfundingError::NotAuthorized));
        }

        if campaign.state != CampaignState::Ongoing {
            return Err(reject(&env, CrowdfundingError::InvalidState));
        }

        campaign.state = CampaignState::Failed;
        ledger::save_campaign(&env, &campaign);

        log!(&env, "campaign cancelled", campaign.total_collected);

        events::emit_campaign_cancelled(
            &env,
            CampaignCancelledEvent {
                total_collected: campaign.total_collected,
            },
        );

        Ok(())
    }

    /// View functions
    pub fn get_campaign(env: Env) -> Result<Campaign, CrowdfundingError> {
        ledger::load_campaign(&env)
    }

    pub fn name(env: Env) -> Result<String, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.name)
    }

    pub fn target_amount(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.target_amount)
    }

    pub fn deadline(env: Env) -> Result<u64, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.deadline)
    }

    pub fn beneficiary(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.beneficiary)
    }

    pub fn token(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.token)
    }

    pub fn state(env: Env) -> Result<CampaignState, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.state)
    }

    pub fn total_collected(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(ledger::load_campaign(&env)?.total_collected)
    }

    /// Amount currently held for `contributor`, zero if they never contributed
    pub fn amounts(env: Env, contributor: Address) -> i128 {
        ledger::contribution_of(&env, &contributor)
    }

    /// Seconds left before contributions close
    pub fn time_left(env: Env) -> Result<u64, CrowdfundingError> {
        let campaign = ledger::load_campaign(&env)?;
        Ok(seconds_until(env.ledger().timestamp(), campaign.deadline))
    }
}
