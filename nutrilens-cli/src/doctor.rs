use nutrilens::Client;

use crate::client_args::ClientArgs;

const PROBE_QUERY: &str = "one medium apple";

pub async fn run_doctor(args: &ClientArgs) -> anyhow::Result<()> {
    let client = args.build_client()?;
    let config = client.config();

    println!("Endpoint:  {}", config.endpoint().base_url());
    println!("Model:     {} ({})", config.model(), config.api_version());
    println!("Strategy:  {}", config.extract_strategy());
    match config.generation_options() {
        Some(options) => println!(
            "Sampling:  temperature={:?} topP={:?} topK={:?}",
            options.temperature, options.top_p, options.top_k
        ),
        None => println!("Sampling:  provider defaults"),
    }

    if let Err(e) = config.auth().single_key_value() {
        println!("API key:   MISSING - {e}");
        println!("\nSet `{}` and run again.", args.api_key_env);
        return Ok(());
    }
    println!("API key:   found in `{}`", args.api_key_env);

    println!("\nProbing with \"{PROBE_QUERY}\"...");
    let report = check_search(&client).await;
    if report.success {
        println!("  Result: OK ({} item(s))", report.items);
        for name in &report.names {
            println!("    - {name}");
        }
    } else {
        println!("  Result: FAILED - {}", report.error.unwrap_or_default());
    }

    println!("\nDoctor check complete.");
    Ok(())
}

struct CheckReport {
    success: bool,
    items: usize,
    names: Vec<String>,
    error: Option<String>,
}

async fn check_search(client: &Client) -> CheckReport {
    match client.search_food(PROBE_QUERY).await {
        Ok(records) => CheckReport {
            success: true,
            items: records.len(),
            names: records.into_iter().map(|r| r.name).collect(),
            error: None,
        },
        Err(e) => CheckReport {
            success: false,
            items: 0,
            names: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}
