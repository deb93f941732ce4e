use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub total_collected: i128,
}

/// Published once, when the deadline resolves the campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinishedEvent {
    pub succeeded: bool,
    pub total_collected: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectedEvent {
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCancelledEvent {
    pub total_collected: i128,
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events().publish(
        (Symbol::new(env, "contributed"),),
        event,
    );
}

pub fn emit_campaign_finished(env: &Env, event: CampaignFinishedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_finished"),),
        event,
    );
}

pub fn emit_collected(env: &Env, event: CollectedEvent) {
    env.events().publish(
        (Symbol::new(env, "collected"),),
        event,
    );
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "withdrawn"),),
        event,
    );
}

pub fn emit_campaign_cancelled(env: &Env, event: CampaignCancelledEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_cancelled"),),
        event,
    );
}
