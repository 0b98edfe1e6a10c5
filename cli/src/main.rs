// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Channel CLI
//!
//! Entry point for the `channel-cli` binary. Parses CLI arguments,
//! initializes logging, and runs one request against the configured nodes.
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr, so the
//! output can be piped into `jq` directly.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use channel_sdk::client::ChannelClient;
use channel_sdk::config::ClientConfig;
use channel_sdk::crypto::ChannelKeypair;
use channel_sdk::transaction::{generate_nonce, CallBuilder, SignTransaction};

use cli::{CallArgs, ChannelCli, Commands};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = ChannelCli::parse();
    logging::init_logging(
        &cli.global.log_level,
        LogFormat::from_str_lossy(&cli.global.log_format),
    );

    let config = cli.global.client_config();
    tracing::debug!(
        servers = ?config.servers,
        timeout_ms = config.timeout.as_millis() as u64,
        encoding = ?config.encoding,
        "client configured"
    );

    match cli.command {
        Commands::Address(args) => {
            let keypair = load_keypair(&args.seed)?;
            print_json(&serde_json::json!({ "address": keypair.identifier() }))
        }
        Commands::Height(args) => {
            let height = connect(config)?
                .block_height(&args.channel)
                .context("block height lookup failed")?;
            print_json(&height)
        }
        Commands::Tx(args) => {
            let tx = connect(config)?
                .transaction_lookup(&args.channel.channel, &args.id)
                .with_context(|| format!("transaction lookup failed for {}", args.id))?;
            print_json(&tx)
        }
        Commands::Receipt(args) => {
            let receipt = connect(config)?
                .receipt_lookup(&args.channel.channel, &args.id)
                .with_context(|| format!("receipt lookup failed for {}", args.id))?;
            print_json(&receipt)
        }
        Commands::Block(args) => {
            let block = connect(config)?
                .block_lookup(&args.channel.channel, &args.id)
                .with_context(|| format!("block lookup failed for {}", args.id))?;
            print_json(&block)
        }
        Commands::Blocks(args) => {
            let blocks = connect(config)?
                .block_list(&args.channel.channel, args.height, args.number)
                .with_context(|| format!("block list failed at height {}", args.height))?;
            print_json(&blocks)
        }
        Commands::Header(args) => {
            let header = connect(config)?
                .block_header_lookup(&args.channel.channel, &args.id)
                .with_context(|| format!("block header lookup failed for {}", args.id))?;
            print_json(&header)
        }
        Commands::Headers(args) => {
            let headers = connect(config)?
                .block_header_list(&args.channel.channel, args.height, args.number)
                .with_context(|| format!("block header list failed at height {}", args.height))?;
            print_json(&headers)
        }
        Commands::Account(args) => {
            let account = connect(config)?
                .account_lookup(&args.channel.channel, &args.id)
                .with_context(|| format!("account lookup failed for {}", args.id))?;
            print_json(&account)
        }
        Commands::Channel(args) => {
            let channel = connect(config)?
                .channel_lookup(&args.channel)
                .context("channel lookup failed")?;
            print_json(&channel)
        }
        Commands::Abi(args) => {
            let abi = connect(config)?
                .channel_abi(&args.channel)
                .context("abi lookup failed")?;
            print_json(&abi)
        }
        Commands::Call(args) => submit_call(config, args),
    }
}

/// Builds, signs and (unless `--dry-run`) submits a contract call.
fn submit_call(config: ClientConfig, args: CallArgs) -> Result<()> {
    let keypair = load_keypair(&args.seed.seed)?;
    let sender = args.sender.unwrap_or_else(|| keypair.identifier());
    let nonce = args.nonce.unwrap_or_else(generate_nonce);

    let tx = CallBuilder::default()
        .call(sender, args.channel.channel, nonce, args.expiration)
        .function(&args.function)
        .arguments(args.args)
        .sign(&keypair)
        .with_context(|| format!("failed to sign call to {}", args.function))?;

    tracing::info!(
        function = %args.function,
        sender = %tx.sender(),
        nonce = tx.nonce(),
        "signed call"
    );

    if args.dry_run {
        return print_json(&tx);
    }

    let response = connect(config)?
        .transaction_submit(&tx)
        .context("transaction submit failed")?;
    print_json(&response)
}

fn connect(config: ClientConfig) -> Result<ChannelClient> {
    ChannelClient::new(config).context("failed to create channel client")
}

fn load_keypair(seed_hex: &str) -> Result<ChannelKeypair> {
    ChannelKeypair::from_hex(seed_hex).context("invalid --seed / CHANNEL_SEED")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
