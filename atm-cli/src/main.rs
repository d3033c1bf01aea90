//! ATM CLI
//!
//! Simulation harness for the ATM withdrawal engine: wires the machine
//! to an in-memory bank, loads a cash deposit from pack specs, and runs
//! withdrawals from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};

use atm_bank::InMemoryBank;
use atm_machine::AtMachine;
use atm_types::{Banknote, BanknotesPack, Card, Currency, Money, MoneyDeposit, PinCode};

#[derive(Parser)]
#[command(name = "atm")]
#[command(author, version, about = "ATM withdrawal simulation harness", long_about = None)]
struct Cli {
    /// Machine operating currency
    #[arg(long, env = "ATM_CURRENCY", default_value = "PLN")]
    currency: String,

    /// Cash deposit packs as COUNTxVALUE (e.g. 3x50). Defaults to 3x50 2x20 4x10.
    #[arg(long = "pack", value_name = "COUNTxVALUE")]
    packs: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform a withdrawal against the seeded demo account
    Withdraw {
        /// Card number
        #[arg(long, env = "ATM_CARD", default_value = "card1")]
        card: String,
        /// Four-digit PIN
        #[arg(long, env = "ATM_PIN", default_value = "1234")]
        pin: String,
        /// Amount to withdraw, in whole currency units
        #[arg(long)]
        amount: i64,
        /// Currency of the requested amount (defaults to the machine currency)
        #[arg(long)]
        amount_currency: Option<String>,
        /// Opening balance of the seeded demo account
        #[arg(long, env = "ATM_SEED_BALANCE", default_value = "10000")]
        balance: i64,
    },
    /// Print the configured cash deposit as JSON
    Inspect,
}

fn parse_currency(s: &str) -> Result<Currency> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Unknown currency: {}. Supported: PLN, USD, EUR", s))
}

fn parse_pack(spec: &str) -> Result<BanknotesPack> {
    let (count, value) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow::anyhow!("Invalid pack spec: {} (expected COUNTxVALUE)", spec))?;
    let count: u32 = count
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid pack count in: {}", spec))?;
    let value: i64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid pack value in: {}", spec))?;

    let denomination = Banknote::DESCENDING
        .into_iter()
        .find(|b| b.value() == value)
        .ok_or_else(|| anyhow::anyhow!("No {} note in the denomination catalog", value))?;

    BanknotesPack::new(count, denomination).map_err(Into::into)
}

fn build_deposit(currency: Currency, specs: &[String]) -> Result<MoneyDeposit> {
    let packs = if specs.is_empty() {
        vec![
            BanknotesPack::new(3, Banknote::Pln50)?,
            BanknotesPack::new(2, Banknote::Pln20)?,
            BanknotesPack::new(4, Banknote::Pln10)?,
        ]
    } else {
        specs
            .iter()
            .map(|s| parse_pack(s))
            .collect::<Result<Vec<_>>>()?
    };
    MoneyDeposit::new(currency, packs).map_err(Into::into)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let currency = parse_currency(&cli.currency)?;
    let deposit = build_deposit(currency, &cli.packs)?;

    match cli.command {
        Commands::Inspect => {
            println!("{}", serde_json::to_string_pretty(deposit.packs())?);
        }

        Commands::Withdraw {
            card,
            pin,
            amount,
            amount_currency,
            balance,
        } => {
            let card = Card::new(card)?;
            let pin: PinCode = pin
                .parse()
                .map_err(|_| anyhow::anyhow!("PIN must be exactly four digits"))?;
            let amount_currency = match amount_currency {
                Some(s) => parse_currency(&s)?,
                None => currency,
            };
            let amount = Money::new(amount, amount_currency)?;

            let bank = InMemoryBank::new();
            bank.open_account(&card, pin, Money::new(balance, currency)?);

            let mut machine = AtMachine::new(bank, currency);
            machine.set_deposit(deposit);

            match machine.withdraw(&pin, &card, &amount).await {
                Ok(withdrawal) => {
                    println!("{}", serde_json::to_string_pretty(withdrawal.banknotes())?);
                    tracing::info!(
                        remaining = %machine.bank().balance(&card).unwrap_or(Money::zero(currency)),
                        "account balance after withdrawal"
                    );
                }
                Err(err) => {
                    eprintln!("withdrawal failed: {}", err.code());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
