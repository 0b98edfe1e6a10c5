//! Offline walkthrough of every transaction kind.
//!
//! Creates two keys, then builds, signs and verifies a channel config, an
//! account alias, a delegation grant, a contract deploy, a delegated call,
//! a pause and a delete. Nothing is sent over the network; each signed
//! envelope is printed as JSON.
//!
//! Run with:
//!   cargo run --example demo

use channel_sdk::crypto::ChannelKeypair;
use channel_sdk::identity::Identifier;
use channel_sdk::transaction::{
    Abi, AccountBuilder, Argument, AuthorizationBuilder, CallBuilder, ConfigBuilder,
    ContractBuilder, FunctionSignature, SequentialNonce, SignTransaction, Transaction,
};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";

fn step(title: &str, tx: &Transaction) {
    let verified = tx.verify().is_ok();
    println!(
        "{BOLD}{title}{RESET}  kind={} nonce={} delegated={} verified={GREEN}{verified}{RESET}",
        tx.payload().kind(),
        tx.nonce(),
        tx.is_delegated(),
    );
    match serde_json::to_string_pretty(tx) {
        Ok(json) => println!("{DIM}{json}{RESET}\n"),
        Err(e) => println!("{DIM}(could not render: {e}){RESET}\n"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let owner = ChannelKeypair::from_seed(&[1u8; 32]);
    let operator = ChannelKeypair::from_seed(&[2u8; 32]);
    let channel = Identifier::from([0xc0; 32]);
    let nonces = SequentialNonce::starting_at(1);
    let expires = 10_000;

    println!("owner    {}", owner.identifier());
    println!("operator {}", operator.identifier());
    println!("channel  {}\n", channel);

    let tx = ConfigBuilder::default()
        .config(owner.identifier(), channel, nonces.advance(), expires)
        .owner(owner.identifier())
        .admin(operator.identifier())
        .channel_name("demo")
        .sign(&owner)?;
    step("1. configure channel", &tx);

    let tx = AccountBuilder::default()
        .account(owner.identifier(), channel, nonces.advance(), expires)
        .alias("owner")
        .sign(&owner)?;
    step("2. set account alias", &tx);

    let tx = AuthorizationBuilder::default()
        .authorization(owner.identifier(), channel, nonces.advance(), expires)
        .account(operator.identifier())
        .alias("operator")
        .authorize(true)
        .sign(&owner)?;
    step("3. authorize operator", &tx);

    let abi = Abi::new(vec![
        FunctionSignature::read("balance"),
        FunctionSignature::write("transfer"),
    ]);
    let tx = ContractBuilder::default()
        .contract(owner.identifier(), channel, nonces.advance(), expires)
        .deploy("0.1.0", abi, b"\0asm demo contract".to_vec())
        .sign(&owner)?;
    step("4. deploy contract", &tx);

    let tx = CallBuilder::default()
        .call(owner.identifier(), channel, nonces.advance(), expires)
        .function("transfer")
        .arguments([Argument::string("bob"), Argument::uint64(25)])
        .sign(&operator)?;
    step("5. operator calls on owner's behalf", &tx);

    let contract = ContractBuilder::default().contract(owner.identifier(), channel, 0, expires);
    let tx = contract.clone().pause(true).sign(&owner)?;
    step("6. pause contract", &tx);

    let tx = contract.delete().sign(&owner)?;
    step("7. delete contract", &tx);

    Ok(())
}
