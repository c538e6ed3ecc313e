use std::env::args;

use dotenv::dotenv;
use eyre::{bail, Context};
use log::info;
use yookassa::{Amount, Confirmation, CreatePayment, Payment, YooKassa};

const USAGE: &str = "usage:
  yookassa-cli create <value> <currency> <description>
  yookassa-cli hold <value> <currency> <description>
  yookassa-cli status <payment id>
  yookassa-cli capture <payment id> [<value> <currency>]
  yookassa-cli cancel <payment id>";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // RUST_LOG may come from .env, so it is read before the logger starts.
    let dotenv = dotenv();
    pretty_env_logger::init();
    color_eyre::install()?;
    if let Err(err) = dotenv {
        info!("Failed to load .env file: {}", err);
    }

    let env = env::Env::from_env().context("Failed to load environment")?;
    info!("connecting to {} as shop {}", env.config().base_url(), env.shop_id());
    let client = YooKassa::new(env.config()).context("Failed to create client")?;

    let args = args().skip(1).collect::<Vec<_>>();
    let args = args.iter().map(String::as_str).collect::<Vec<_>>();
    match args.as_slice() {
        ["create", value, currency, description @ ..] => {
            let payment = create(&client, &env, value, currency, description, true).await?;
            print_created(&payment);
        }
        ["hold", value, currency, description @ ..] => {
            let payment = create(&client, &env, value, currency, description, false).await?;
            print_created(&payment);
        }
        ["status", id] => print(&client.payment_status(id).await?)?,
        ["capture", id] => print(&client.capture_payment(id, None).await?)?,
        ["capture", id, value, currency] => {
            let amount = Amount::new(*value, *currency);
            print(&client.capture_payment(id, Some(amount)).await?)?
        }
        ["cancel", id] => print(&client.cancel_payment(id).await?)?,
        _ => bail!("{}", USAGE),
    }

    Ok(())
}

async fn create(
    client: &YooKassa,
    env: &env::Env,
    value: &str,
    currency: &str,
    description: &[&str],
    capture: bool,
) -> eyre::Result<Payment> {
    let mut request = CreatePayment::new(Amount::new(value, currency), capture)
        .confirmation(Confirmation::redirect(env.return_url()));
    if !description.is_empty() {
        request = request.description(description.join(" "));
    }
    let payment = client
        .create_payment(&request)
        .await
        .context("Failed to create payment")?;
    Ok(payment)
}

fn print_created(payment: &Payment) {
    println!("id: {}", payment.id);
    println!("status: {}", payment.status);
    if let Some(url) = payment.confirmation_url() {
        println!("confirmation url: {}", url);
    }
}

fn print(payment: &Payment) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(payment)?);
    Ok(())
}
