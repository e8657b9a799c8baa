use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer},
};

declare_id!("3f6if1tQ6sCpJTyvHVFu1emmp7Vd9mx2sj8KPXsCA8fs");

pub mod errors;
pub mod events;
pub mod state;

pub use errors::*;
pub use events::*;
pub use state::*;


#[program]
pub mod canvas_stream {
    use super::*;

    /// @notice Bootstrap the host registry for the streaming layer
    /// @dev Idempotent: setup scripts may call this repeatedly, only the first call writes
    /// @param resolver Resolver address supplied by the deployment environment
    pub fn initialize_host(ctx: Context<InitializeHost>, resolver: Pubkey) -> Result<()> {
        let host = &mut ctx.accounts.host_config;

        if host.authority != Pubkey::default() {
            msg!("Host already bootstrapped by {}", host.authority);
            return Ok(());
        }

        host.authority = ctx.accounts.authority.key();
        host.resolver = resolver;
        host.bump = ctx.bumps.host_config;

        emit!(HostInitialized { authority: host.authority, resolver });

        Ok(())
    }

    /// @notice Register a wrapped token pair and create its underlying vault
    /// @dev The wrapped mint must already exist with the wrap authority PDA as its mint
    ///      authority and the same decimals as the underlying; idempotent like the host call
    pub fn initialize_super_token(ctx: Context<InitializeSuperToken>) -> Result<()> {
        let config = &mut ctx.accounts.super_token;

        if config.underlying_mint != Pubkey::default() {
            msg!("Super token already registered for {}", config.underlying_mint);
            return Ok(());
        }

        require!(
            ctx.accounts.wrapped_mint.mint_authority == COption::Some(ctx.accounts.wrap_authority.key()),
            CanvasError::InvalidSuperToken
        );
        require!(
            ctx.accounts.wrapped_mint.decimals == ctx.accounts.underlying_mint.decimals,
            CanvasError::InvalidSuperToken
        );

        config.underlying_mint = ctx.accounts.underlying_mint.key();
        config.wrapped_mint = ctx.accounts.wrapped_mint.key();
        config.vault = ctx.accounts.vault.key();
        config.total_wrapped = 0;
        config.bump = ctx.bumps.super_token;

        emit!(SuperTokenInitialized {
            underlying_mint: config.underlying_mint,
            wrapped_mint: config.wrapped_mint,
            vault: config.vault,
        });

        Ok(())
    }

    /// @notice Deposit underlying token and mint an equal amount of its wrapped counterpart
    /// @dev Pulls the deposit through the wrap authority delegate the depositor approved
    ///      beforehand; the 1:1 backing invariant holds because the mint happens with the
    ///      same `amount` that just entered the vault, inside one instruction
    /// @param amount Underlying base units to wrap, must be non-zero
    pub fn upgrade(ctx: Context<Upgrade>, amount: u64) -> Result<()> {
        require!(amount > 0, CanvasError::ZeroAmount);

        let underlying_key = ctx.accounts.underlying_mint.key();
        let seeds = &[WRAP_AUTHORITY_SEED, underlying_key.as_ref(), &[ctx.bumps.wrap_authority]];
        let signer_seeds = &[&seeds[..]];

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.depositor_underlying.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.wrap_authority.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            amount,
        )?;

        token::mint_to(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.wrapped_mint.to_account_info(),
                    to: ctx.accounts.depositor_wrapped.to_account_info(),
                    authority: ctx.accounts.wrap_authority.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            amount,
        )?;

        let config = &mut ctx.accounts.super_token;
        config.total_wrapped = config.total_wrapped.checked_add(amount).ok_or(CanvasError::ArithmeticOverflow)?;

        msg!("Upgraded {} underlying units, wrapped supply now {}", amount, config.total_wrapped);

        emit!(TokensUpgraded {
            account: ctx.accounts.depositor.key(),
            amount,
            total_wrapped: config.total_wrapped,
        });

        Ok(())
    }

    /// @notice Burn wrapped token and release the equal amount of underlying from the vault
    /// @param amount Wrapped base units to unwrap, must be non-zero
    pub fn downgrade(ctx: Context<Downgrade>, amount: u64) -> Result<()> {
        require!(amount > 0, CanvasError::ZeroAmount);

        token::burn(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.wrapped_mint.to_account_info(),
                    from: ctx.accounts.depositor_wrapped.to_account_info(),
                    authority: ctx.accounts.depositor.to_account_info(),
                },
            ),
            amount,
        )?;

        let underlying_key = ctx.accounts.underlying_mint.key();
        let seeds = &[WRAP_AUTHORITY_SEED, underlying_key.as_ref(), &[ctx.bumps.wrap_authority]];
        let signer_seeds = &[&seeds[..]];

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.depositor_underlying.to_account_info(),
                    authority: ctx.accounts.wrap_authority.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            amount,
        )?;

        let config = &mut ctx.accounts.super_token;
        config.total_wrapped = config.total_wrapped.checked_sub(amount).ok_or(CanvasError::InsufficientWrappedSupply)?;

        emit!(TokensDowngraded {
            account: ctx.accounts.depositor.key(),
            amount,
            total_wrapped: config.total_wrapped,
        });

        Ok(())
    }

    /// @notice Deploy the canvas application with its fixed constructor argument tuple
    /// @dev The tuple is stored verbatim after cross-checking the host and super token
    ///      arguments against the live registry accounts
    /// @param owner Administrative owner of the canvas
    /// @param host Host config address, must match the registered host PDA
    /// @param super_token Wrapped mint, must match the registered super token
    /// @param recipient Address inbound streams are redirected to
    /// @param genesis_tile Lowest claimable tile id
    /// @param base_price Floor price for a first claim of any tile
    pub fn initialize_canvas(
        ctx: Context<InitializeCanvas>,
        owner: Pubkey,
        host: Pubkey,
        super_token: Pubkey,
        recipient: Pubkey,
        genesis_tile: u64,
        base_price: u64,
    ) -> Result<()> {
        require_keys_eq!(host, ctx.accounts.host_config.key(), CanvasError::HostMismatch);
        require_keys_eq!(super_token, ctx.accounts.super_token.wrapped_mint, CanvasError::SuperTokenMismatch);

        let canvas = &mut ctx.accounts.canvas_config;
        canvas.owner = owner;
        canvas.host = host;
        canvas.super_token = super_token;
        canvas.recipient = recipient;
        canvas.genesis_tile = genesis_tile;
        canvas.base_price = base_price;
        canvas.bump = ctx.bumps.canvas_config;

        msg!("Canvas deployed at {} for owner {}", canvas.key(), owner);

        emit!(CanvasInitialized {
            canvas: canvas.key(),
            owner,
            super_token,
            recipient,
            genesis_tile,
            base_price,
        });

        Ok(())
    }

    /// @notice Deploy the stream-redirecting contract bound to the canvas
    /// @param flow_recipient Receiver of the aggregated outbound flow
    pub fn initialize_redirect(ctx: Context<InitializeRedirect>, flow_recipient: Pubkey) -> Result<()> {
        let redirect = &mut ctx.accounts.redirect_config;
        redirect.host = ctx.accounts.host_config.key();
        redirect.super_token = ctx.accounts.canvas_config.super_token;
        redirect.flow_recipient = flow_recipient;
        redirect.canvas = ctx.accounts.canvas_config.key();
        redirect.bump = ctx.bumps.redirect_config;

        emit!(RedirectInitialized {
            redirect: redirect.key(),
            canvas: redirect.canvas,
            flow_recipient,
        });

        Ok(())
    }

    /// @notice Open a payment stream into the redirect contract and claim the named tile
    /// @dev Books the inbound flow, pulls the tile price through the pre-approved redirect
    ///      authority delegate, then mirrors the full rate onto the outbound flow so the
    ///      redirect identity keeps a zero net flow. The mirroring happens in the same
    ///      instruction because the runtime does not allow a host-to-app callback to
    ///      re-enter the streaming layer.
    /// @param tile_id Tile being claimed, must match the id inside `user_data`
    /// @param flow_rate Token base units per second, must be strictly positive
    /// @param user_data Opaque call data decoding to a TilePurchase
    pub fn create_flow(ctx: Context<CreateFlow>, tile_id: u64, flow_rate: i64, user_data: Vec<u8>) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        require!(flow_rate > 0, CanvasError::InvalidFlowRate);

        let purchase = TilePurchase::decode(&user_data)?;
        require!(purchase.tile_id == tile_id, CanvasError::InvalidPurchaseData);
        require!(tile_id >= ctx.accounts.canvas_config.genesis_tile, CanvasError::TileBelowGenesis);

        let wrapped = ctx.accounts.canvas_config.super_token;
        let sender_key = ctx.accounts.sender.key();
        let redirect_key = ctx.accounts.redirect_authority.key();
        let recipient_key = ctx.accounts.redirect_config.flow_recipient;
        let neg_rate = flow_rate.checked_neg().ok_or(CanvasError::ArithmeticOverflow)?;

        // Tile purchase: pull the offered price from the sender through the delegate
        // approved to the redirect authority ahead of this call.
        if purchase.price > 0 {
            let seeds = &[REDIRECT_AUTHORITY_SEED, &[ctx.bumps.redirect_authority]];
            let signer_seeds = &[&seeds[..]];

            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.sender_underlying.to_account_info(),
                        to: ctx.accounts.owner_underlying.to_account_info(),
                        authority: ctx.accounts.redirect_authority.to_account_info(),
                    },
                )
                .with_signer(signer_seeds),
                purchase.price,
            )?;
        }

        let tile = &mut ctx.accounts.tile;
        if tile.owner == Pubkey::default() {
            require!(purchase.price >= ctx.accounts.canvas_config.base_price, CanvasError::PriceTooLow);
            tile.tile_id = tile_id;
            tile.bump = ctx.bumps.tile;
        } else {
            require!(purchase.price >= tile.price, CanvasError::PriceTooLow);
        }
        tile.owner = sender_key;
        tile.uri = purchase.uri.clone();
        tile.price = purchase.price;

        // Inbound flow: sender -> redirect identity
        let inbound = &mut ctx.accounts.inbound_flow;
        inbound.super_token = wrapped;
        inbound.sender = sender_key;
        inbound.receiver = redirect_key;
        inbound.flow_rate = flow_rate;
        inbound.opened_at = now;
        inbound.bump = ctx.bumps.inbound_flow;

        ensure_net_flow(&mut ctx.accounts.sender_net, sender_key, wrapped, now, ctx.bumps.sender_net);
        ensure_net_flow(&mut ctx.accounts.redirect_net, redirect_key, wrapped, now, ctx.bumps.redirect_net);
        ensure_net_flow(&mut ctx.accounts.recipient_net, recipient_key, wrapped, now, ctx.bumps.recipient_net);

        ctx.accounts.sender_net.apply_rate_change(neg_rate, now)?;
        ctx.accounts.redirect_net.apply_rate_change(flow_rate, now)?;

        // Redirect: the single outbound flow absorbs the full inbound rate
        let outbound = &mut ctx.accounts.outbound_flow;
        if outbound.receiver == Pubkey::default() {
            outbound.super_token = wrapped;
            outbound.sender = redirect_key;
            outbound.receiver = recipient_key;
            outbound.flow_rate = 0;
            outbound.opened_at = now;
            outbound.bump = ctx.bumps.outbound_flow;
        }
        outbound.flow_rate = outbound.flow_rate.checked_add(flow_rate).ok_or(CanvasError::ArithmeticOverflow)?;
        let outbound_rate = outbound.flow_rate;

        ctx.accounts.redirect_net.apply_rate_change(neg_rate, now)?;
        ctx.accounts.recipient_net.apply_rate_change(flow_rate, now)?;

        msg!("Flow of {} units/s from {} redirected in full to {}", flow_rate, sender_key, recipient_key);

        emit!(FlowCreated {
            super_token: wrapped,
            sender: sender_key,
            receiver: redirect_key,
            flow_rate,
            timestamp: now,
        });
        emit!(FlowRedirected {
            super_token: wrapped,
            inbound_sender: sender_key,
            flow_recipient: recipient_key,
            redirected_rate: flow_rate,
            outbound_rate,
            timestamp: now,
        });
        emit!(TileClaimed { tile_id, owner: sender_key, price: purchase.price, timestamp: now });

        Ok(())
    }

    /// @notice Change the rate of an open inbound stream
    /// @dev The outbound flow moves by the same delta, keeping the redirect net flow at zero
    /// @param new_rate Replacement rate, must be strictly positive (terminate with delete_flow)
    pub fn update_flow(ctx: Context<UpdateFlow>, new_rate: i64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        require!(new_rate > 0, CanvasError::InvalidFlowRate);

        let inbound = &mut ctx.accounts.inbound_flow;
        let old_rate = inbound.flow_rate;
        let delta = new_rate.checked_sub(old_rate).ok_or(CanvasError::ArithmeticOverflow)?;
        let neg_delta = delta.checked_neg().ok_or(CanvasError::ArithmeticOverflow)?;
        inbound.flow_rate = new_rate;

        ctx.accounts.sender_net.apply_rate_change(neg_delta, now)?;
        ctx.accounts.redirect_net.apply_rate_change(delta, now)?;

        let outbound = &mut ctx.accounts.outbound_flow;
        outbound.flow_rate = outbound.flow_rate.checked_add(delta).ok_or(CanvasError::ArithmeticOverflow)?;
        let outbound_rate = outbound.flow_rate;

        ctx.accounts.redirect_net.apply_rate_change(neg_delta, now)?;
        ctx.accounts.recipient_net.apply_rate_change(delta, now)?;

        let wrapped = ctx.accounts.canvas_config.super_token;
        let sender_key = ctx.accounts.sender.key();

        emit!(FlowUpdated {
            super_token: wrapped,
            sender: sender_key,
            receiver: ctx.accounts.redirect_authority.key(),
            old_rate,
            new_rate,
            timestamp: now,
        });
        emit!(FlowRedirected {
            super_token: wrapped,
            inbound_sender: sender_key,
            flow_recipient: ctx.accounts.redirect_config.flow_recipient,
            redirected_rate: delta,
            outbound_rate,
            timestamp: now,
        });

        Ok(())
    }

    /// @notice Terminate an open inbound stream
    /// @dev Closes the flow account back to the sender and lowers the outbound flow by the
    ///      terminated rate
    pub fn delete_flow(ctx: Context<DeleteFlow>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let rate = ctx.accounts.inbound_flow.flow_rate;
        let neg_rate = rate.checked_neg().ok_or(CanvasError::ArithmeticOverflow)?;

        ctx.accounts.sender_net.apply_rate_change(rate, now)?;
        ctx.accounts.redirect_net.apply_rate_change(neg_rate, now)?;

        let outbound = &mut ctx.accounts.outbound_flow;
        outbound.flow_rate = outbound.flow_rate.checked_add(neg_rate).ok_or(CanvasError::ArithmeticOverflow)?;
        let outbound_rate = outbound.flow_rate;

        ctx.accounts.redirect_net.apply_rate_change(rate, now)?;
        ctx.accounts.recipient_net.apply_rate_change(neg_rate, now)?;

        let wrapped = ctx.accounts.canvas_config.super_token;
        let sender_key = ctx.accounts.sender.key();

        emit!(FlowTerminated {
            super_token: wrapped,
            sender: sender_key,
            receiver: ctx.accounts.redirect_authority.key(),
            flow_rate: rate,
            timestamp: now,
        });
        emit!(FlowRedirected {
            super_token: wrapped,
            inbound_sender: sender_key,
            flow_recipient: ctx.accounts.redirect_config.flow_recipient,
            redirected_rate: neg_rate,
            outbound_rate,
            timestamp: now,
        });

        Ok(())
    }

    /// @notice Re-price a tile, callable by its current owner only
    pub fn set_tile_price(ctx: Context<SetTilePrice>, tile_id: u64, new_price: u64) -> Result<()> {
        let tile = &mut ctx.accounts.tile;
        require!(tile.owner == ctx.accounts.owner.key(), CanvasError::NotTileOwner);

        tile.price = new_price;

        emit!(TilePriceSet { tile_id, owner: tile.owner, price: new_price });

        Ok(())
    }
}

/// Writes the fixed fields of a fresh net-flow ledger entry; a no-op for entries that
/// already track an account.
fn ensure_net_flow<'info>(
    net: &mut Account<'info, NetFlowState>,
    account: Pubkey,
    super_token: Pubkey,
    now: i64,
    bump: u8,
) {
    if net.account == Pubkey::default() {
        net.account = account;
        net.super_token = super_token;
        net.flow_rate = 0;
        net.settled_amount = 0;
        net.last_settled_ts = now;
        net.bump = bump;
    }
}

/// @notice Account structure for bootstrapping the host registry
#[derive(Accounts)]
pub struct InitializeHost<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = HostConfig::LEN,
        seeds = [HOST_CONFIG_SEED],
        bump
    )]
    pub host_config: Account<'info, HostConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// @notice Account structure for registering a wrapped token pair
/// @dev The vault is an associated token account of the underlying mint owned by the wrap
///      authority PDA, created here if missing
#[derive(Accounts)]
pub struct InitializeSuperToken<'info> {
    #[account(seeds = [HOST_CONFIG_SEED], bump = host_config.bump)]
    pub host_config: Account<'info, HostConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = SuperTokenConfig::LEN,
        seeds = [SUPER_TOKEN_SEED, underlying_mint.key().as_ref()],
        bump
    )]
    pub super_token: Account<'info, SuperTokenConfig>,

    pub underlying_mint: Account<'info, Mint>,

    pub wrapped_mint: Account<'info, Mint>,

    /// PDA controlling the wrapped mint and the underlying vault
    /// CHECK: validated by the seeds constraint
    #[account(
        seeds = [WRAP_AUTHORITY_SEED, underlying_mint.key().as_ref()],
        bump
    )]
    pub wrap_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = underlying_mint,
        associated_token::authority = wrap_authority
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

/// @notice Account structure for wrapping underlying token
#[derive(Accounts)]
pub struct Upgrade<'info> {
    #[account(
        mut,
        seeds = [SUPER_TOKEN_SEED, underlying_mint.key().as_ref()],
        bump = super_token.bump,
        has_one = underlying_mint @ CanvasError::SuperTokenMismatch,
        has_one = wrapped_mint @ CanvasError::SuperTokenMismatch,
        has_one = vault @ CanvasError::SuperTokenMismatch
    )]
    pub super_token: Account<'info, SuperTokenConfig>,

    pub underlying_mint: Account<'info, Mint>,

    #[account(mut)]
    pub wrapped_mint: Account<'info, Mint>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// PDA controlling the wrapped mint and the underlying vault
    /// CHECK: validated by the seeds constraint
    #[account(seeds = [WRAP_AUTHORITY_SEED, underlying_mint.key().as_ref()], bump)]
    pub wrap_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        constraint = depositor_underlying.mint == super_token.underlying_mint @ CanvasError::SuperTokenMismatch,
        constraint = depositor_underlying.owner == depositor.key() @ CanvasError::TokenAccountOwnerMismatch
    )]
    pub depositor_underlying: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = wrapped_mint,
        associated_token::authority = depositor
    )]
    pub depositor_wrapped: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// @notice Account structure for unwrapping back into underlying token
#[derive(Accounts)]
pub struct Downgrade<'info> {
    #[account(
        mut,
        seeds = [SUPER_TOKEN_SEED, underlying_mint.key().as_ref()],
        bump = super_token.bump,
        has_one = underlying_mint @ CanvasError::SuperTokenMismatch,
        has_one = wrapped_mint @ CanvasError::SuperTokenMismatch,
        has_one = vault @ CanvasError::SuperTokenMismatch
    )]
    pub super_token: Account<'info, SuperTokenConfig>,

    pub underlying_mint: Account<'info, Mint>,

    #[account(mut)]
    pub wrapped_mint: Account<'info, Mint>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// PDA controlling the wrapped mint and the underlying vault
    /// CHECK: validated by the seeds constraint
    #[account(seeds = [WRAP_AUTHORITY_SEED, underlying_mint.key().as_ref()], bump)]
    pub wrap_authority: UncheckedAccount<'info>,

    pub depositor: Signer<'info>,

    #[account(
        mut,
        constraint = depositor_underlying.mint == super_token.underlying_mint @ CanvasError::SuperTokenMismatch,
        constraint = depositor_underlying.owner == depositor.key() @ CanvasError::TokenAccountOwnerMismatch
    )]
    pub depositor_underlying: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = depositor_wrapped.mint == super_token.wrapped_mint @ CanvasError::SuperTokenMismatch,
        constraint = depositor_wrapped.owner == depositor.key() @ CanvasError::TokenAccountOwnerMismatch
    )]
    pub depositor_wrapped: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// @notice Account structure for deploying the canvas application
#[derive(Accounts)]
pub struct InitializeCanvas<'info> {
    #[account(seeds = [HOST_CONFIG_SEED], bump = host_config.bump)]
    pub host_config: Account<'info, HostConfig>,

    #[account(
        seeds = [SUPER_TOKEN_SEED, super_token.underlying_mint.as_ref()],
        bump = super_token.bump
    )]
    pub super_token: Account<'info, SuperTokenConfig>,

    #[account(
        init,
        payer = payer,
        space = CanvasConfig::LEN,
        seeds = [CANVAS_CONFIG_SEED],
        bump
    )]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// @notice Account structure for deploying the redirect contract
#[derive(Accounts)]
pub struct InitializeRedirect<'info> {
    #[account(seeds = [HOST_CONFIG_SEED], bump = host_config.bump)]
    pub host_config: Account<'info, HostConfig>,

    #[account(seeds = [CANVAS_CONFIG_SEED], bump = canvas_config.bump)]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        init,
        payer = payer,
        space = RedirectConfig::LEN,
        seeds = [REDIRECT_CONFIG_SEED],
        bump
    )]
    pub redirect_config: Account<'info, RedirectConfig>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// @notice Account structure for opening a stream into the redirect contract
/// @dev Net-flow ledger entries for the sender, the redirect identity and the recipient are
///      created on first touch; the tile account is created on first claim
#[derive(Accounts)]
#[instruction(tile_id: u64)]
pub struct CreateFlow<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(seeds = [HOST_CONFIG_SEED], bump = host_config.bump)]
    pub host_config: Account<'info, HostConfig>,

    #[account(seeds = [CANVAS_CONFIG_SEED], bump = canvas_config.bump)]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        seeds = [REDIRECT_CONFIG_SEED],
        bump = redirect_config.bump,
        constraint = redirect_config.canvas == canvas_config.key() @ CanvasError::RedirectMismatch
    )]
    pub redirect_config: Account<'info, RedirectConfig>,

    /// Flow identity of the redirect contract
    /// CHECK: validated by the seeds constraint
    #[account(seeds = [REDIRECT_AUTHORITY_SEED], bump)]
    pub redirect_authority: UncheckedAccount<'info>,

    #[account(
        seeds = [SUPER_TOKEN_SEED, super_token.underlying_mint.as_ref()],
        bump = super_token.bump,
        constraint = super_token.wrapped_mint == canvas_config.super_token @ CanvasError::SuperTokenMismatch
    )]
    pub super_token: Account<'info, SuperTokenConfig>,

    #[account(
        init,
        payer = sender,
        space = FlowState::LEN,
        seeds = [
            FLOW_SEED,
            canvas_config.super_token.as_ref(),
            sender.key().as_ref(),
            redirect_authority.key().as_ref()
        ],
        bump
    )]
    pub inbound_flow: Account<'info, FlowState>,

    #[account(
        init_if_needed,
        payer = sender,
        space = FlowState::LEN,
        seeds = [
            FLOW_SEED,
            canvas_config.super_token.as_ref(),
            redirect_authority.key().as_ref(),
            redirect_config.flow_recipient.as_ref()
        ],
        bump
    )]
    pub outbound_flow: Account<'info, FlowState>,

    #[account(
        init_if_needed,
        payer = sender,
        space = NetFlowState::LEN,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), sender.key().as_ref()],
        bump
    )]
    pub sender_net: Account<'info, NetFlowState>,

    #[account(
        init_if_needed,
        payer = sender,
        space = NetFlowState::LEN,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), redirect_authority.key().as_ref()],
        bump
    )]
    pub redirect_net: Account<'info, NetFlowState>,

    #[account(
        init_if_needed,
        payer = sender,
        space = NetFlowState::LEN,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), redirect_config.flow_recipient.as_ref()],
        bump
    )]
    pub recipient_net: Account<'info, NetFlowState>,

    #[account(
        init_if_needed,
        payer = sender,
        space = Tile::LEN,
        seeds = [TILE_SEED, tile_id.to_le_bytes().as_ref()],
        bump
    )]
    pub tile: Account<'info, Tile>,

    #[account(
        mut,
        constraint = sender_underlying.mint == super_token.underlying_mint @ CanvasError::SuperTokenMismatch,
        constraint = sender_underlying.owner == sender.key() @ CanvasError::TokenAccountOwnerMismatch
    )]
    pub sender_underlying: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_underlying.mint == super_token.underlying_mint @ CanvasError::SuperTokenMismatch,
        constraint = owner_underlying.owner == canvas_config.owner @ CanvasError::TokenAccountOwnerMismatch
    )]
    pub owner_underlying: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// @notice Account structure for changing the rate of an open stream
#[derive(Accounts)]
pub struct UpdateFlow<'info> {
    pub sender: Signer<'info>,

    #[account(seeds = [CANVAS_CONFIG_SEED], bump = canvas_config.bump)]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        seeds = [REDIRECT_CONFIG_SEED],
        bump = redirect_config.bump,
        constraint = redirect_config.canvas == canvas_config.key() @ CanvasError::RedirectMismatch
    )]
    pub redirect_config: Account<'info, RedirectConfig>,

    /// Flow identity of the redirect contract
    /// CHECK: validated by the seeds constraint
    #[account(seeds = [REDIRECT_AUTHORITY_SEED], bump)]
    pub redirect_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            FLOW_SEED,
            canvas_config.super_token.as_ref(),
            sender.key().as_ref(),
            redirect_authority.key().as_ref()
        ],
        bump = inbound_flow.bump,
        constraint = inbound_flow.sender == sender.key() @ CanvasError::FlowSenderMismatch
    )]
    pub inbound_flow: Account<'info, FlowState>,

    #[account(
        mut,
        seeds = [
            FLOW_SEED,
            canvas_config.super_token.as_ref(),
            redirect_authority.key().as_ref(),
            redirect_config.flow_recipient.as_ref()
        ],
        bump = outbound_flow.bump
    )]
    pub outbound_flow: Account<'info, FlowState>,

    #[account(
        mut,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), sender.key().as_ref()],
        bump = sender_net.bump
    )]
    pub sender_net: Account<'info, NetFlowState>,

    #[account(
        mut,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), redirect_authority.key().as_ref()],
        bump = redirect_net.bump
    )]
    pub redirect_net: Account<'info, NetFlowState>,

    #[account(
        mut,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), redirect_config.flow_recipient.as_ref()],
        bump = recipient_net.bump
    )]
    pub recipient_net: Account<'info, NetFlowState>,
}

/// @notice Account structure for terminating an open stream
#[derive(Accounts)]
pub struct DeleteFlow<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(seeds = [CANVAS_CONFIG_SEED], bump = canvas_config.bump)]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        seeds = [REDIRECT_CONFIG_SEED],
        bump = redirect_config.bump,
        constraint = redirect_config.canvas == canvas_config.key() @ CanvasError::RedirectMismatch
    )]
    pub redirect_config: Account<'info, RedirectConfig>,

    /// Flow identity of the redirect contract
    /// CHECK: validated by the seeds constraint
    #[account(seeds = [REDIRECT_AUTHORITY_SEED], bump)]
    pub redirect_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        close = sender,
        seeds = [
            FLOW_SEED,
            canvas_config.super_token.as_ref(),
            sender.key().as_ref(),
            redirect_authority.key().as_ref()
        ],
        bump = inbound_flow.bump,
        constraint = inbound_flow.sender == sender.key() @ CanvasError::FlowSenderMismatch
    )]
    pub inbound_flow: Account<'info, FlowState>,

    #[account(
        mut,
        seeds = [
            FLOW_SEED,
            canvas_config.super_token.as_ref(),
            redirect_authority.key().as_ref(),
            redirect_config.flow_recipient.as_ref()
        ],
        bump = outbound_flow.bump
    )]
    pub outbound_flow: Account<'info, FlowState>,

    #[account(
        mut,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), sender.key().as_ref()],
        bump = sender_net.bump
    )]
    pub sender_net: Account<'info, NetFlowState>,

    #[account(
        mut,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), redirect_authority.key().as_ref()],
        bump = redirect_net.bump
    )]
    pub redirect_net: Account<'info, NetFlowState>,

    #[account(
        mut,
        seeds = [NET_FLOW_SEED, canvas_config.super_token.as_ref(), redirect_config.flow_recipient.as_ref()],
        bump = recipient_net.bump
    )]
    pub recipient_net: Account<'info, NetFlowState>,
}

/// @notice Account structure for re-pricing a tile
#[derive(Accounts)]
#[instruction(tile_id: u64)]
pub struct SetTilePrice<'info> {
    pub owner: Signer<'info>,

    #[account(mut, seeds = [TILE_SEED, tile_id.to_le_bytes().as_ref()], bump = tile.bump)]
    pub tile: Account<'info, Tile>,
}
