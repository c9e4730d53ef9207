use clap::Args;
use nutrilens::food::{DisplayUnit, parse_amount};
use nutrilens::session::{SearchSession, SubmitOutcome};
use nutrilens::state::{Action, SearchState};
use tracing::warn;

use crate::client_args::ClientArgs;
use crate::render::render_state;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text food description
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Unit label: g | ml
    #[arg(short, long, default_value = "g")]
    pub unit: DisplayUnit,

    /// Quantity of one result as NAME=AMOUNT (repeatable)
    #[arg(short = 'q', long = "quantity", value_parser = parse_quantity_arg)]
    pub quantities: Vec<(String, String)>,

    /// Print the cards as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn run_search(args: SearchArgs) -> anyhow::Result<()> {
    let client = args.client.build_client()?;
    let mut session = SearchSession::with_state(client, SearchState::new(args.client.stale_policy));

    match session.submit(args.query.join(" ")).await {
        SubmitOutcome::Loaded { .. } => {}
        SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => {
            let message = session.state().error().unwrap_or("search failed").to_string();
            anyhow::bail!(message);
        }
    }

    session.dispatch(Action::UnitChanged(args.unit));
    for (name, amount) in &args.quantities {
        let Some(resolved) = session.state().resolve_name(name).map(str::to_string) else {
            warn!(%name, "no result with that name, quantity ignored");
            continue;
        };
        session.dispatch(Action::QuantitySet {
            name: resolved,
            text: amount.clone(),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.state().cards())?);
    } else {
        println!("{}", render_state(session.state()));
    }

    Ok(())
}

fn parse_quantity_arg(raw: &str) -> Result<(String, String), String> {
    let (name, amount) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got `{raw}`"))?;
    let name = name.trim();
    let amount = amount.trim();
    if name.is_empty() || parse_amount(amount).is_none() {
        return Err(format!("expected NAME=AMOUNT with a numeric AMOUNT, got `{raw}`"));
    }
    Ok((name.to_string(), amount.to_string()))
}

// region:    --- Tests


// endregion: --- Tests
