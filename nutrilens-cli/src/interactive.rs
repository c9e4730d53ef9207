use clap::Args;
use nutrilens::food::{DisplayUnit, QUANTITY_STEP, parse_amount};
use nutrilens::session::SearchSession;
use nutrilens::state::{Action, SearchState};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::client_args::ClientArgs;
use crate::render::render_state;

const HELP: &str = "\
Commands:
  search <food>        search (alias: s)
  + <name>             add 10 to a food's quantity
  - <name>             remove 10 from a food's quantity (never below 10)
  set <name> <amount>  type a quantity
  unit g|ml            switch the unit label
  show                 print the results again
  help                 this text
  quit                 leave (alias: exit, q)";

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Search(String),
    Step { name: String, delta: i64 },
    Set { name: String, amount: String },
    Unit(DisplayUnit),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match head {
        // An empty search still goes through, the screen shows the validation message.
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "+" | "-" => {
            if rest.is_empty() {
                return Err(format!("usage: {head} <name>"));
            }
            let delta = if head == "+" { QUANTITY_STEP } else { -QUANTITY_STEP };
            Ok(Command::Step {
                name: rest.to_string(),
                delta,
            })
        }
        "set" => {
            let (name, amount) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| "usage: set <name> <amount>".to_string())?;
            if parse_amount(amount).is_none() {
                return Err(format!("`{amount}` is not a number"));
            }
            Ok(Command::Set {
                name: name.trim().to_string(),
                amount: amount.to_string(),
            })
        }
        "unit" => rest
            .parse::<DisplayUnit>()
            .map(Command::Unit)
            .map_err(|_| format!("unknown unit `{rest}`, use g or ml")),
        "show" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`, type `help`")),
    }
}

pub async fn run_interactive(args: InteractiveArgs) -> anyhow::Result<()> {
    let client = args.client.build_client()?;
    let mut session = SearchSession::with_state(client, SearchState::new(args.client.stale_policy));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(b"Food Nutrition Finder\nType `help` for commands.\n> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => HELP.to_string(),
            Ok(Command::Show) => render_state(session.state()),
            Ok(Command::Search(query)) => {
                stdout.write_all(b"Loading...\n").await?;
                stdout.flush().await?;
                session.submit(query).await;
                render_state(session.state())
            }
            Ok(Command::Step { name, delta }) => match session.state().resolve_name(&name).map(str::to_string) {
                Some(name) => {
                    session.dispatch(Action::QuantityChanged { name, delta });
                    render_state(session.state())
                }
                None => format!("no result named `{name}`"),
            },
            Ok(Command::Set { name, amount }) => match session.state().resolve_name(&name).map(str::to_string) {
                Some(name) => {
                    session.dispatch(Action::QuantitySet { name, text: amount });
                    render_state(session.state())
                }
                None => format!("no result named `{name}`"),
            },
            Ok(Command::Unit(unit)) => {
                session.dispatch(Action::UnitChanged(unit));
                render_state(session.state())
            }
            Err(message) => message,
        };

        stdout.write_all(format!("{output}\n> ").as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}

// region:    --- Tests


// endregion: --- Tests
