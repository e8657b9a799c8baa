use std::path::PathBuf;

use anchor_lang::{InstructionData, ToAccountMetas};
use anyhow::{anyhow, bail, Result};
use clap::Parser;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signer},
    transaction::Transaction,
};

mod config;

use config::{resolver_from_env, DeployConfig};

#[derive(Parser, Debug)]
#[command(name = "canvas-deploy")]
#[command(about = "Deploys the canvas application with its fixed constructor arguments")]
struct Args {
    /// Path to the deployment configuration file
    #[arg(short, long, default_value = "deploy.toml")]
    config: PathBuf,

    /// Override the RPC URL from the configuration file
    #[arg(long)]
    rpc_url: Option<String>,
}

// Convert Anchor Pubkey to Solana Pubkey
fn anchor_to_solana_pubkey(anchor_pk: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::from(anchor_pk.to_bytes())
}

// Convert Solana Pubkey to Anchor Pubkey
fn solana_to_anchor_pubkey(solana_pk: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::from(solana_pk.to_bytes())
}

fn convert_metas(metas: Vec<anchor_lang::solana_program::instruction::AccountMeta>) -> Vec<AccountMeta> {
    metas
        .iter()
        .map(|meta| AccountMeta {
            pubkey: anchor_to_solana_pubkey(&meta.pubkey),
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = DeployConfig::load(&args.config)?;
    let rpc_url = args.rpc_url.unwrap_or_else(|| config.rpc_url.clone());

    let deployer = read_keypair_file(&config.keypair_path)
        .map_err(|err| anyhow!("failed to load deployer keypair from {}: {}", config.keypair_path, err))?;
    log::info!("Deployer: {}", deployer.pubkey());

    let rpc = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());
    let program_id = anchor_to_solana_pubkey(&canvas_stream::ID);

    let underlying_mint = config.underlying_mint()?;
    let (host_config, _) = Pubkey::find_program_address(&[canvas_stream::HOST_CONFIG_SEED], &program_id);
    let (super_token, _) = Pubkey::find_program_address(
        &[canvas_stream::SUPER_TOKEN_SEED, underlying_mint.as_ref()],
        &program_id,
    );
    let (canvas_config, _) = Pubkey::find_program_address(&[canvas_stream::CANVAS_CONFIG_SEED], &program_id);

    if rpc.get_account(&host_config).is_err() {
        bootstrap_host(&rpc, &deployer, &program_id, &host_config)?;
    }
    if rpc.get_account(&super_token).is_err() {
        bail!("super token {} is not registered on this cluster", super_token);
    }

    log::info!("Deploying canvas application");
    let metas = canvas_stream::accounts::InitializeCanvas {
        host_config: solana_to_anchor_pubkey(&host_config),
        super_token: solana_to_anchor_pubkey(&super_token),
        canvas_config: solana_to_anchor_pubkey(&canvas_config),
        payer: solana_to_anchor_pubkey(&deployer.pubkey()),
        system_program: solana_to_anchor_pubkey(&solana_sdk::system_program::ID),
    }
    .to_account_metas(None);

    let data = canvas_stream::instruction::InitializeCanvas {
        owner: solana_to_anchor_pubkey(&config.owner()?),
        host: solana_to_anchor_pubkey(&host_config),
        super_token: solana_to_anchor_pubkey(&config.wrapped_mint()?),
        recipient: solana_to_anchor_pubkey(&config.recipient()?),
        genesis_tile: config.genesis_tile,
        base_price: config.base_price,
    }
    .data();

    let instruction = Instruction { program_id, accounts: convert_metas(metas), data };
    let signature = send(&rpc, &deployer, instruction)?;

    log::info!("Canvas deployed at {}", canvas_config);
    log::info!("Signature: {}", signature);

    Ok(())
}

/// First-run bootstrap of the host registry. The resolver comes from the process
/// environment and has no fallback.
fn bootstrap_host(rpc: &RpcClient, deployer: &Keypair, program_id: &Pubkey, host_config: &Pubkey) -> Result<()> {
    let resolver = resolver_from_env()?;
    log::info!("Host config missing, bootstrapping with resolver {}", resolver);

    let metas = canvas_stream::accounts::InitializeHost {
        host_config: solana_to_anchor_pubkey(host_config),
        authority: solana_to_anchor_pubkey(&deployer.pubkey()),
        system_program: solana_to_anchor_pubkey(&solana_sdk::system_program::ID),
    }
    .to_account_metas(None);

    let data = canvas_stream::instruction::InitializeHost { resolver: solana_to_anchor_pubkey(&resolver) }.data();

    let instruction = Instruction { program_id: *program_id, accounts: convert_metas(metas), data };
    let signature = send(rpc, deployer, instruction)?;
    log::info!("Host bootstrapped, signature {}", signature);

    Ok(())
}

fn send(rpc: &RpcClient, payer: &Keypair, instruction: Instruction) -> Result<solana_sdk::signature::Signature> {
    let blockhash = rpc.get_latest_blockhash()?;
    let transaction = Transaction::new_signed_with_payer(&[instruction], Some(&payer.pubkey()), &[payer], blockhash);
    let signature = rpc.send_and_confirm_transaction(&transaction)?;
    Ok(signature)
}
