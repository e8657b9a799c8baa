use anchor_lang::prelude::*;

/// Event emitted when the host registry is bootstrapped
#[event]
pub struct HostInitialized {
    /// Authority that bootstrapped the host
    pub authority: Pubkey,
    /// Resolver address supplied by the deployment environment
    pub resolver: Pubkey,
}

/// Event emitted when a wrapped token pair is registered
#[event]
pub struct SuperTokenInitialized {
    /// Underlying mint
    pub underlying_mint: Pubkey,
    /// Wrapped mint
    pub wrapped_mint: Pubkey,
    /// Underlying vault
    pub vault: Pubkey,
}

/// Event emitted on each upgrade of underlying into wrapped
#[event]
pub struct TokensUpgraded {
    /// Depositor
    pub account: Pubkey,
    /// Amount wrapped
    pub amount: u64,
    /// Wrapped supply after the upgrade
    pub total_wrapped: u64,
}

/// Event emitted on each downgrade of wrapped into underlying
#[event]
pub struct TokensDowngraded {
    /// Redeemer
    pub account: Pubkey,
    /// Amount unwrapped
    pub amount: u64,
    /// Wrapped supply after the downgrade
    pub total_wrapped: u64,
}

/// Event emitted when the canvas application is deployed
#[event]
pub struct CanvasInitialized {
    /// Canvas config address
    pub canvas: Pubkey,
    /// Canvas owner
    pub owner: Pubkey,
    /// Wrapped mint the canvas streams in
    pub super_token: Pubkey,
    /// Redirect recipient recorded at deployment
    pub recipient: Pubkey,
    /// Lowest claimable tile id
    pub genesis_tile: u64,
    /// Floor price for first claims
    pub base_price: u64,
}

/// Event emitted when the redirect contract is deployed
#[event]
pub struct RedirectInitialized {
    /// Redirect config address
    pub redirect: Pubkey,
    /// Canvas the redirect forwards for
    pub canvas: Pubkey,
    /// Receiver of the outbound flow
    pub flow_recipient: Pubkey,
}

/// Event emitted when an inbound stream is opened
#[event]
pub struct FlowCreated {
    /// Wrapped mint
    pub super_token: Pubkey,
    /// Stream sender
    pub sender: Pubkey,
    /// Stream receiver
    pub receiver: Pubkey,
    /// Token base units per second
    pub flow_rate: i64,
    /// Timestamp of creation
    pub timestamp: i64,
}

/// Event emitted when an inbound stream changes rate
#[event]
pub struct FlowUpdated {
    /// Wrapped mint
    pub super_token: Pubkey,
    /// Stream sender
    pub sender: Pubkey,
    /// Stream receiver
    pub receiver: Pubkey,
    /// Rate before the update
    pub old_rate: i64,
    /// Rate after the update
    pub new_rate: i64,
    /// Timestamp of the update
    pub timestamp: i64,
}

/// Event emitted when an inbound stream is terminated
#[event]
pub struct FlowTerminated {
    /// Wrapped mint
    pub super_token: Pubkey,
    /// Stream sender
    pub sender: Pubkey,
    /// Stream receiver
    pub receiver: Pubkey,
    /// Rate at termination
    pub flow_rate: i64,
    /// Timestamp of termination
    pub timestamp: i64,
}

/// Event emitted each time the outbound flow absorbs an inbound change
#[event]
pub struct FlowRedirected {
    /// Wrapped mint
    pub super_token: Pubkey,
    /// Sender of the inbound stream that triggered the redirect
    pub inbound_sender: Pubkey,
    /// Receiver of the outbound flow
    pub flow_recipient: Pubkey,
    /// Rate delta forwarded by this redirect
    pub redirected_rate: i64,
    /// Aggregated outbound rate after the redirect
    pub outbound_rate: i64,
    /// Timestamp of the redirect
    pub timestamp: i64,
}

/// Event emitted when a tile changes hands
#[event]
pub struct TileClaimed {
    /// Tile identifier
    pub tile_id: u64,
    /// New tile owner
    pub owner: Pubkey,
    /// Price paid
    pub price: u64,
    /// Timestamp of the claim
    pub timestamp: i64,
}

/// Event emitted when a tile owner re-prices it
#[event]
pub struct TilePriceSet {
    /// Tile identifier
    pub tile_id: u64,
    /// Tile owner
    pub owner: Pubkey,
    /// New asking price
    pub price: u64,
}
