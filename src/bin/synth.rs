//! # User Pool Synthesizer
//!
//! A command-line utility that reads a user pool props file, builds the pool
//! into a fresh provisioning scope and prints the resulting template.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin synth props.json
//! cargo run --bin synth props.json AuthStack Auth
//! ```
//!
//! The stack name defaults to `UserPoolStack` and the construct ID to
//! `UserPool`. The template is written to stdout as pretty-printed JSON;
//! log output goes to stderr and is controlled by `RUST_LOG` (default
//! `info`).
//!
//! ## Props File
//!
//! ```json
//! {
//!   "userPool": {"accountRecovery": "EMAIL_ONLY", "mfa": "OPTIONAL"},
//!   "userPoolClient": {"web": {"authFlows": {"userSrp": true}}},
//!   "userPoolGroup": {"admins": {"groupName": "Admins", "precedence": 1}}
//! }
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Template written
//! - `1`: Bad arguments, unreadable props, or a rejected configuration

use log::error;
use std::env;
use std::process;
use user_pool_config::{ConstructResult, ProvisioningScope, UserPool, UserPoolProps};

const DEFAULT_STACK_NAME: &str = "UserPoolStack";
const DEFAULT_CONSTRUCT_ID: &str = "UserPool";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <props.json> [stack-name] [construct-id]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} props.json", args[0]);
        eprintln!("  {} props.json AuthStack Auth", args[0]);
        process::exit(1);
    }

    let stack_name = args.get(2).map_or(DEFAULT_STACK_NAME, String::as_str);
    let construct_id = args.get(3).map_or(DEFAULT_CONSTRUCT_ID, String::as_str);

    match synthesize(&args[1], stack_name, construct_id) {
        Ok(template) => println!("{}", template),
        Err(e) => {
            error!("Synthesis failed: {}", e);
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }
}

fn synthesize(path: &str, stack_name: &str, construct_id: &str) -> ConstructResult<String> {
    let props = UserPoolProps::from_path(path)?;
    let mut scope = ProvisioningScope::new(stack_name);
    UserPool::new(&mut scope, construct_id, &props)?;
    Ok(scope.synthesize().to_json_pretty()?)
}
