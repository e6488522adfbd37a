use std::fs;
use std::io::Read;

use taskorder_core::api::{resolve, CliError, TaskSet};
use taskorder_plugins::factory;

use crate::commands::cli::{ResolveArgs, ScriptArgs};

pub fn handle_resolve(args: ResolveArgs) -> Result<String, CliError> {
    let renderer = factory::build_renderer(&args.format)?;
    let input = read_input(args.input.as_deref())?;

    let tasks = serde_json::from_str::<TaskSet>(&input)?.into_tasks();
    tracing::debug!(tasks = tasks.len(), format = renderer.name(), "resolving task file");

    let ordered = resolve(&tasks)?;
    Ok(renderer.render(&ordered)?)
}

pub fn handle_script(args: ScriptArgs) -> Result<String, CliError> {
    handle_resolve(ResolveArgs {
        input: args.input,
        format: "bash".to_string(),
    })
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(p) if p != "-" => fs::read_to_string(p).map_err(CliError::Io),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Io)?;
            Ok(buf)
        }
    }
}
