//! # CLI Interface
//!
//! Defines the command-line argument structure for `channel-cli` using
//! `clap` derive. Connection settings are global flags with environment
//! fallbacks, so a shell with `CHANNEL_SERVERS` and `CHANNEL_SEED` exported
//! can run every subcommand without repeating them.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use channel_sdk::config::{ApiEncoding, ClientConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVER};
use channel_sdk::identity::Identifier;
use channel_sdk::transaction::Argument;

/// Command-line client for channel ledger nodes.
///
/// Queries blocks, transactions, receipts, accounts and channel metadata,
/// and signs and submits contract calls.
#[derive(Parser, Debug)]
#[command(
    name = "channel-cli",
    about = "Command-line client for channel ledger nodes",
    version,
    propagate_version = true
)]
pub struct ChannelCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Connection and logging flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Node endpoints, comma separated. Requests rotate across them.
    #[arg(
        long,
        env = "CHANNEL_SERVERS",
        value_delimiter = ',',
        default_value = DEFAULT_SERVER,
        global = true
    )]
    pub servers: Vec<String>,

    /// Per-request timeout in milliseconds.
    #[arg(
        long,
        env = "CHANNEL_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
        global = true
    )]
    pub timeout_ms: u64,

    /// Wire encoding.
    #[arg(long, default_value = "json", value_parser = ["json", "binary"], global = true)]
    pub encoding: String,

    /// Log format. Logs go to stderr.
    #[arg(long, default_value = "pretty", value_parser = ["pretty", "json"], global = true)]
    pub log_format: String,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

impl GlobalArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.servers.iter().map(|s| s.trim().to_owned()))
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_encoding(ApiEncoding::from_str_lossy(&self.encoding))
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the account identifier for a signing seed.
    Address(SeedArgs),
    /// Current block height of a channel.
    Height(ChannelArgs),
    /// Look up a transaction by id.
    Tx(LookupArgs),
    /// Look up a transaction receipt by transaction id.
    Receipt(LookupArgs),
    /// Look up a block by id.
    Block(LookupArgs),
    /// List blocks starting at a height.
    Blocks(RangeArgs),
    /// Look up a block header by block id.
    Header(LookupArgs),
    /// List block headers starting at a height.
    Headers(RangeArgs),
    /// Look up an account.
    Account(LookupArgs),
    /// Show the channel configuration.
    Channel(ChannelArgs),
    /// Show the channel contract ABI.
    Abi(ChannelArgs),
    /// Sign and submit a contract call.
    Call(CallArgs),
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Hex-encoded 32-byte Ed25519 seed.
    #[arg(long, env = "CHANNEL_SEED", hide_env_values = true)]
    pub seed: String,
}

#[derive(Args, Debug)]
pub struct ChannelArgs {
    /// Channel identifier (64 hex characters).
    #[arg(long, short = 'c')]
    pub channel: Identifier,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub channel: ChannelArgs,

    /// Identifier to look up (64 hex characters).
    pub id: Identifier,
}

#[derive(Args, Debug)]
pub struct RangeArgs {
    #[command(flatten)]
    pub channel: ChannelArgs,

    /// First block height.
    #[arg(long)]
    pub height: u64,

    /// How many entries to return.
    #[arg(long, default_value_t = 10)]
    pub number: u64,
}

#[derive(Args, Debug)]
pub struct CallArgs {
    #[command(flatten)]
    pub channel: ChannelArgs,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Contract function to call.
    #[arg(long, short = 'f')]
    pub function: String,

    /// Call argument as `type:value`, repeatable. Types: bool, i32, i64,
    /// u32, u64, f32, f64, str, bytes, json. Without a prefix the value is
    /// passed as a string.
    #[arg(long = "arg", value_parser = parse_argument)]
    pub args: Vec<Argument>,

    /// Last block height at which the transaction may be included.
    #[arg(long)]
    pub expiration: u64,

    /// Nonce. Random when omitted.
    #[arg(long)]
    pub nonce: Option<u64>,

    /// Sign on behalf of this account instead of the seed's own.
    #[arg(long)]
    pub sender: Option<Identifier>,

    /// Print the signed transaction instead of submitting it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Parses a `type:value` call argument.
pub fn parse_argument(raw: &str) -> Result<Argument, String> {
    let Some((kind, value)) = raw.split_once(':') else {
        return Ok(Argument::string(raw));
    };
    let bad = |e: &dyn std::fmt::Display| format!("invalid {} argument {:?}: {}", kind, value, e);
    let arg = match kind {
        "bool" => Argument::bool(value.parse().map_err(|e| bad(&e))?),
        "i32" => Argument::int32(value.parse().map_err(|e| bad(&e))?),
        "i64" => Argument::int64(value.parse().map_err(|e| bad(&e))?),
        "u32" => Argument::uint32(value.parse().map_err(|e| bad(&e))?),
        "u64" => Argument::uint64(value.parse().map_err(|e| bad(&e))?),
        "f32" => Argument::float32(value.parse().map_err(|e| bad(&e))?),
        "f64" => Argument::float64(value.parse().map_err(|e| bad(&e))?),
        "str" => Argument::string(value),
        "bytes" => Argument::bytes(value.as_bytes()),
        "json" => Argument::json_bytes(value.as_bytes()),
        _ => Argument::string(raw),
    };
    Ok(arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        ChannelCli::command().debug_assert();
    }

    #[test]
    fn typed_arguments() {
        assert_eq!(parse_argument("u64:42").unwrap().as_str(), "42");
        assert_eq!(parse_argument("bool:false").unwrap().as_str(), "false");
        assert_eq!(parse_argument("f64:1.5").unwrap().as_str(), "1.5e+00");
        assert_eq!(parse_argument("json:hi").unwrap().as_str(), "\"hi\"");
        assert_eq!(parse_argument("plain").unwrap().as_str(), "plain");
        assert_eq!(parse_argument("url:http://x").unwrap().as_str(), "url:http://x");
    }

    #[test]
    fn typed_argument_errors() {
        assert!(parse_argument("u32:-1").is_err());
        assert!(parse_argument("bool:yes").is_err());
    }

    #[test]
    fn parses_call_with_global_flags() {
        let channel = "00".repeat(32);
        let seed = "11".repeat(32);
        let cli = ChannelCli::try_parse_from([
            "channel-cli",
            "call",
            "--channel",
            channel.as_str(),
            "--seed",
            seed.as_str(),
            "-f",
            "transfer",
            "--arg",
            "str:bob",
            "--arg",
            "u64:5",
            "--expiration",
            "100",
            "--servers",
            "http://a,http://b",
            "--encoding",
            "binary",
        ])
        .unwrap();

        let config = cli.global.client_config();
        assert_eq!(config.servers, vec!["http://a", "http://b"]);
        assert_eq!(config.encoding, ApiEncoding::Binary);

        let Commands::Call(call) = cli.command else {
            panic!("expected call subcommand");
        };
        assert_eq!(call.function, "transfer");
        assert_eq!(call.args.len(), 2);
        assert_eq!(call.expiration, 100);
        assert!(call.nonce.is_none());
    }

    #[test]
    fn rejects_unknown_encoding() {
        let channel = "00".repeat(32);
        let parse = |encoding: &str| {
            ChannelCli::try_parse_from([
                "channel-cli",
                "height",
                "-c",
                channel.as_str(),
                "--encoding",
                encoding,
            ])
        };
        assert!(parse("binry").is_err());
        let cli = parse("binary").unwrap();
        assert_eq!(cli.global.client_config().encoding, ApiEncoding::Binary);
    }

    #[test]
    fn rejects_malformed_identifier() {
        assert!(ChannelCli::try_parse_from(["channel-cli", "height", "-c", "abcd"]).is_err());
    }
}
