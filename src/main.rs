//! fx-risk-engine CLI
//!
//! Run FX portfolio risk simulations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Simulate a portfolio from a JSON file
//! fx-risk-engine simulate --input portfolio.json
//!
//! # Output as JSON
//! fx-risk-engine simulate --input portfolio.json --format json
//!
//! # Stress test with the built-in scenario catalog
//! fx-risk-engine stress --input portfolio.json
//!
//! # Generate a random portfolio for testing
//! fx-risk-engine generate --exposures 20 --currencies EUR,GBP,JPY
//! ```

use fx_risk_engine::core::currency::CurrencyCode;
use fx_risk_engine::core::exposure::RawExposure;
use fx_risk_engine::simulation::generator::{generate_random_portfolio, PortfolioConfig};
use fx_risk_engine::simulation::portfolio::{run_simulation, SimulationParameters};
use fx_risk_engine::simulation::stress::{apply_scenarios, builtin_scenarios, StressScenario};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"fx-risk-engine — simplified FX portfolio risk analysis

USAGE:
    fx-risk-engine <COMMAND> [OPTIONS]

COMMANDS:
    simulate    Compute risk scores, totals and VaR for a portfolio
    stress      Apply stress scenarios to a portfolio
    generate    Generate a random portfolio (for testing)
    help        Show this message

OPTIONS (simulate, stress):
    --input <FILE>      Path to JSON portfolio file
    --format <FORMAT>   Output format: text (default) or json
    --scenarios <FILE>  (stress only) custom scenario list JSON

OPTIONS (generate):
    --exposures <N>     Number of exposures (default: 20)
    --currencies <LIST> Comma-separated source currencies (default: EUR,GBP,JPY,CHF)
    --base <CODE>       Base currency (default: USD)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    fx-risk-engine simulate --input portfolio.json
    fx-risk-engine simulate --input portfolio.json --format json
    fx-risk-engine stress --input portfolio.json --scenarios shocks.json
    fx-risk-engine generate --exposures 50 --currencies EUR,JPY --output test.json"#
    );
}

/// JSON schema for input portfolios. Every field except the exposures
/// themselves takes the documented default when absent.
#[derive(serde::Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_base_currency")]
    base_currency: String,
    #[serde(default = "default_risk_appetite")]
    risk_appetite: u8,
    #[serde(default = "default_time_horizon_days")]
    time_horizon_days: u32,
    #[serde(default)]
    exposures: Vec<RawExposure>,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_risk_appetite() -> u8 {
    3
}

fn default_time_horizon_days() -> u32 {
    30
}

#[derive(serde::Deserialize)]
struct ScenariosFile {
    scenarios: Vec<StressScenario>,
}

fn load_portfolio(path: &str) -> SimulationParameters {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: PortfolioFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "base_currency": "USD",
  "risk_appetite": 3,
  "time_horizon_days": 30,
  "exposures": [
    {{ "currency_pair": {{ "from": "EUR", "to": "USD" }}, "amount": "100000", "volatility_factor": 3 }}
  ]
}}"#
        );
        process::exit(1);
    });

    let mut exposures = Vec::with_capacity(file.exposures.len());
    for (i, raw) in file.exposures.into_iter().enumerate() {
        match raw.resolve() {
            Ok(exposure) => exposures.push(exposure),
            Err(e) => {
                eprintln!("Invalid exposure at index {}: {}", i, e);
                process::exit(1);
            }
        }
    }

    SimulationParameters {
        name: file.name,
        base_currency: CurrencyCode::new(file.base_currency),
        risk_appetite: file.risk_appetite,
        time_horizon_days: file.time_horizon_days,
        exposures,
    }
}

fn load_scenarios(path: &str) -> Vec<StressScenario> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });
    let file: ScenariosFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing scenarios JSON: {}", e);
        process::exit(1);
    });
    file.scenarios
}

fn cmd_simulate(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let params = load_portfolio(&path);
    let results = run_simulation(&params);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&results).unwrap());
    } else {
        println!("{}", results);
    }
}

fn cmd_stress(args: &[String]) {
    let mut input_path = None;
    let mut scenarios_path: Option<String> = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--scenarios" => {
                i += 1;
                scenarios_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--scenarios requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let params = load_portfolio(&path);
    let results = run_simulation(&params);
    let scenarios = match scenarios_path {
        Some(p) => load_scenarios(&p),
        None => builtin_scenarios(),
    };
    let stressed = apply_scenarios(&results.exposures, &params.base_currency, &scenarios);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stressed).unwrap());
    } else {
        for result in &stressed {
            println!("{}", result);
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut exposure_count = 20usize;
    let mut currencies_str = "EUR,GBP,JPY,CHF".to_string();
    let mut base = "USD".to_string();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--exposures" => {
                i += 1;
                exposure_count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--exposures requires a number");
                    process::exit(1);
                });
            }
            "--currencies" => {
                i += 1;
                currencies_str = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--currencies requires a comma-separated list");
                    process::exit(1);
                });
            }
            "--base" => {
                i += 1;
                base = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--base requires a currency code");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let currencies: Vec<CurrencyCode> = currencies_str
        .split(',')
        .map(|s| CurrencyCode::new(s.trim()))
        .collect();

    let config = PortfolioConfig {
        exposure_count,
        currencies,
        base_currency: CurrencyCode::new(&base),
        ..Default::default()
    };

    let params = generate_random_portfolio(&config);
    let json = serde_json::to_string_pretty(&params).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} exposures against base {} → {}",
            exposure_count, base, path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "simulate" => cmd_simulate(rest),
        "stress" => cmd_stress(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
