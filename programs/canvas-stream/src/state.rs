use anchor_lang::prelude::*;

use crate::errors::CanvasError;

/// Upper bound for tile metadata URIs
pub const MAX_TILE_URI_LEN: usize = 256;

/// Host registry for the streaming layer
#[account]
pub struct HostConfig {
    /// Authority that bootstrapped the host
    pub authority: Pubkey,
    /// Resolver address handed in from the deployment environment
    pub resolver: Pubkey,
    /// Bump seed for the host config PDA
    pub bump: u8,
}

impl HostConfig {
    pub const LEN: usize = 8 + 32 + 32 + 1; // discriminator + fields + bump
}

/// Registered wrapped token pair (underlying mint, wrapped mint, vault)
#[account]
pub struct SuperTokenConfig {
    /// Mint of the underlying token
    pub underlying_mint: Pubkey,
    /// Mint of the 1:1 wrapped counterpart
    pub wrapped_mint: Pubkey,
    /// Vault holding the underlying backing, owned by the wrap authority PDA
    pub vault: Pubkey,
    /// Total wrapped supply issued through upgrade
    pub total_wrapped: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl SuperTokenConfig {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 1;
}

/// Canvas application config, the deployment argument tuple
#[account]
pub struct CanvasConfig {
    /// Administrative owner of the canvas, receives tile purchase payments
    pub owner: Pubkey,
    /// Host config this canvas is bound to
    pub host: Pubkey,
    /// Wrapped mint streams into this canvas are denominated in
    pub super_token: Pubkey,
    /// Address inbound streams are redirected to
    pub recipient: Pubkey,
    /// Lowest claimable tile id
    pub genesis_tile: u64,
    /// Floor price for a first claim of any tile
    pub base_price: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl CanvasConfig {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 32 + 8 + 8 + 1;
}

/// Stream-redirecting contract config
#[account]
pub struct RedirectConfig {
    /// Host config this redirect is bound to
    pub host: Pubkey,
    /// Wrapped mint redirected streams are denominated in
    pub super_token: Pubkey,
    /// Receiver of the aggregated outbound flow
    pub flow_recipient: Pubkey,
    /// Canvas application this redirect forwards for
    pub canvas: Pubkey,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl RedirectConfig {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 32 + 1;
}

/// One open stream between a sender and a receiver
#[account]
pub struct FlowState {
    /// Wrapped mint this flow is denominated in
    pub super_token: Pubkey,
    /// Stream sender
    pub sender: Pubkey,
    /// Stream receiver
    pub receiver: Pubkey,
    /// Token base units per second
    pub flow_rate: i64,
    /// Unix timestamp the flow was opened at
    pub opened_at: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl FlowState {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 8 + 1;
}

/// Net flow ledger entry for one (super token, address) pair
#[account]
pub struct NetFlowState {
    /// The account whose flows are netted here
    pub account: Pubkey,
    /// Wrapped mint this entry is denominated in
    pub super_token: Pubkey,
    /// Net rate in token base units per second, inflows minus outflows
    pub flow_rate: i64,
    /// Streamed units accrued up to `last_settled_ts`
    pub settled_amount: i64,
    /// Unix timestamp of the last settlement
    pub last_settled_ts: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl NetFlowState {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// Folds the accrual since the last settlement into `settled_amount`.
    pub fn settle(&mut self, now: i64) -> Result<()> {
        let elapsed = now.checked_sub(self.last_settled_ts).ok_or(CanvasError::ArithmeticOverflow)?;
        let accrued = self.flow_rate.checked_mul(elapsed).ok_or(CanvasError::ArithmeticOverflow)?;
        self.settled_amount = self.settled_amount.checked_add(accrued).ok_or(CanvasError::ArithmeticOverflow)?;
        self.last_settled_ts = now;
        Ok(())
    }

    /// Settles, then shifts the net rate by `delta` (positive for a new inflow).
    pub fn apply_rate_change(&mut self, delta: i64, now: i64) -> Result<()> {
        self.settle(now)?;
        self.flow_rate = self.flow_rate.checked_add(delta).ok_or(CanvasError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Wrapped balance as of `now`: SPL holdings plus streamed accrual.
    pub fn realtime_balance(&self, spl_amount: u64, now: i64) -> Result<i128> {
        let elapsed = now.checked_sub(self.last_settled_ts).ok_or(CanvasError::ArithmeticOverflow)?;
        let pending = (self.flow_rate as i128).checked_mul(elapsed as i128).ok_or(CanvasError::ArithmeticOverflow)?;
        let settled =
            (spl_amount as i128).checked_add(self.settled_amount as i128).ok_or(CanvasError::ArithmeticOverflow)?;
        let total = settled.checked_add(pending).ok_or(CanvasError::ArithmeticOverflow)?;
        Ok(total)
    }
}

/// One claimable tile of the canvas
#[account]
pub struct Tile {
    /// Tile identifier
    pub tile_id: u64,
    /// Current owner, the sender of the stream that claimed it
    pub owner: Pubkey,
    /// Metadata URI recorded at claim time
    pub uri: String,
    /// Asking price in underlying base units
    pub price: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Tile {
    pub const LEN: usize = 8 + 8 + 32 + (4 + MAX_TILE_URI_LEN) + 8 + 1;
}

/// Purchase order attached to an inbound stream as opaque call data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct TilePurchase {
    /// Tile being claimed
    pub tile_id: u64,
    /// Metadata URI for the claimed tile
    pub uri: String,
    /// Price offered, pulled from the sender's underlying account
    pub price: u64,
}

impl TilePurchase {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let purchase = Self::try_from_slice(data).map_err(|_| CanvasError::InvalidPurchaseData)?;
        if purchase.uri.len() > MAX_TILE_URI_LEN {
            return err!(CanvasError::UriTooLong);
        }
        Ok(purchase)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(8 + 4 + self.uri.len() + 8);
        self.serialize(&mut data).map_err(|_| CanvasError::InvalidPurchaseData)?;
        Ok(data)
    }
}

/// Seeds for PDAs
pub const HOST_CONFIG_SEED: &[u8] = b"host_config";
pub const SUPER_TOKEN_SEED: &[u8] = b"super_token";
pub const WRAP_AUTHORITY_SEED: &[u8] = b"wrap_authority";
pub const CANVAS_CONFIG_SEED: &[u8] = b"canvas_config";
pub const REDIRECT_CONFIG_SEED: &[u8] = b"redirect_config";
pub const REDIRECT_AUTHORITY_SEED: &[u8] = b"redirect_authority";
pub const FLOW_SEED: &[u8] = b"flow";
pub const NET_FLOW_SEED: &[u8] = b"net_flow";
pub const TILE_SEED: &[u8] = b"tile";
