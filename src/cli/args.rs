//! CLI argument parsing.

use std::io;
use std::path::PathBuf;

use crate::models::ClaimType;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subcommand selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive dashboard (default)
    Dashboard { claims_path: Option<PathBuf> },
    /// Prediction proxy server
    Serve { port: Option<u16> },
    /// Local eligibility rules over a JSON row file
    Rules {
        claim_type: ClaimType,
        input: PathBuf,
        json: bool,
    },
}

/// What `main` should do after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(Command),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("fra-dss - FRA decision support dashboard and prediction proxy");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  fra-dss [dashboard] [--claims <file.json>]");
    eprintln!("  fra-dss serve [--port <N>]");
    eprintln!("  fra-dss rules <ifr|cr|cfr> <row.json> [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --claims <FILE>   Load claims from a JSON array instead of the samples");
    eprintln!("  -p, --port <N>        Listen port for serve (default: $FRA_DSS_PORT or 3000)");
    eprintln!("  --json                Print rule results as JSON");
    eprintln!("  -h, --help            Show this help message");
    eprintln!("  -V, --version         Show version");
    eprintln!();
    eprintln!("Environment (serve):");
    eprintln!("  SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY   Required backend credentials");
    eprintln!("  FRA_DSS_PREDICT_URL                       Upstream prediction endpoint");
    eprintln!("  FRA_DSS_UPSTREAM_TIMEOUT_SECS             Upstream timeout (default: 30)");
    eprintln!("  RUST_LOG                                  Log filter (default: info)");
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> io::Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| invalid(format!("Missing value for {}", flag)))
}

/// Parse CLI arguments (without the program name)
pub fn parse_args_from(args: &[String]) -> io::Result<CliAction> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(CliAction::Help);
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        return Ok(CliAction::Version);
    }

    let (subcommand, rest) = match args.first().map(String::as_str) {
        Some("dashboard") => ("dashboard", &args[1..]),
        Some("serve") => ("serve", &args[1..]),
        Some("rules") => ("rules", &args[1..]),
        _ => ("dashboard", args),
    };

    let mut claims_path: Option<PathBuf> = None;
    let mut port: Option<u16> = None;
    let mut json = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < rest.len() {
        let arg = rest[i].as_str();
        match arg {
            "-c" | "--claims" if subcommand == "dashboard" => {
                claims_path = Some(PathBuf::from(take_value(rest, &mut i, arg)?));
            }
            "-p" | "--port" if subcommand == "serve" => {
                let value = take_value(rest, &mut i, arg)?;
                port = Some(
                    value
                        .parse()
                        .map_err(|_| invalid(format!("Invalid port value: {}", value)))?,
                );
            }
            "--json" if subcommand == "rules" => json = true,
            _ if !arg.starts_with('-') && subcommand == "rules" => positional.push(arg),
            _ => return Err(invalid(format!("Unknown argument: {}", arg))),
        }
        i += 1;
    }

    let command = match subcommand {
        "serve" => Command::Serve { port },
        "rules" => {
            let [kind, input] = positional.as_slice() else {
                return Err(invalid(
                    "rules expects <ifr|cr|cfr> <row.json>".to_string(),
                ));
            };
            let claim_type = ClaimType::parse(kind)
                .ok_or_else(|| invalid(format!("Unknown claim type: {}", kind)))?;
            Command::Rules {
                claim_type,
                input: PathBuf::from(input),
                json,
            }
        }
        _ => Command::Dashboard { claims_path },
    };

    Ok(CliAction::Run(command))
}

/// Parse process arguments, printing usage on error
pub fn parse_args() -> io::Result<CliAction> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&args).inspect_err(|_| print_usage())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> io::Result<CliAction> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse_args_from(&args)
    }

    #[test]
    fn test_no_args_runs_dashboard() {
        assert_eq!(
            parse(&[]).unwrap(),
            CliAction::Run(Command::Dashboard { claims_path: None })
        );
    }

    #[test]
    fn test_dashboard_with_claims() {
        let expected = CliAction::Run(Command::Dashboard {
            claims_path: Some(PathBuf::from("claims.json")),
        });
        assert_eq!(parse(&["--claims", "claims.json"]).unwrap(), expected);
        assert_eq!(parse(&["dashboard", "-c", "claims.json"]).unwrap(), expected);
    }

    #[test]
    fn test_serve_port() {
        assert_eq!(
            parse(&["serve", "--port", "8080"]).unwrap(),
            CliAction::Run(Command::Serve { port: Some(8080) })
        );
        assert_eq!(
            parse(&["serve"]).unwrap(),
            CliAction::Run(Command::Serve { port: None })
        );
    }

    #[test]
    fn test_serve_invalid_port() {
        let err = parse(&["serve", "--port", "99999"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_flag_value() {
        let err = parse(&["serve", "--port"]).unwrap_err();
        assert!(err.to_string().contains("Missing value"));
    }

    #[test]
    fn test_rules() {
        assert_eq!(
            parse(&["rules", "CFR", "row.json", "--json"]).unwrap(),
            CliAction::Run(Command::Rules {
                claim_type: ClaimType::CommunityForestResource,
                input: PathBuf::from("row.json"),
                json: true,
            })
        );
    }

    #[test]
    fn test_rules_bad_arguments() {
        assert!(parse(&["rules", "ifr"]).is_err());
        assert!(parse(&["rules", "xyz", "row.json"]).is_err());
    }

    #[test]
    fn test_flag_scoped_to_subcommand() {
        assert!(parse(&["serve", "--claims", "x.json"]).is_err());
        assert!(parse(&["--port", "1"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["serve", "-h"]).unwrap(), CliAction::Help);
        assert_eq!(parse(&["--version"]).unwrap(), CliAction::Version);
    }
}
