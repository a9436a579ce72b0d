//! Script command handler

use anyhow::Result;

use tlctl::cli::ControlArgs;
use tlctl::script::{parse_script, run_script};
use tlctl::Config;

use super::build_controls;

/// Run a control script and print the resulting snapshot(s) as JSON.
pub fn handle(config: &Config, args: &ControlArgs, script: &str, trace: bool) -> Result<()> {
    let steps = parse_script(script)?;
    let mut controls = build_controls(config, args)?;

    if trace {
        for step in &steps {
            let snapshot = run_script(&mut controls, std::slice::from_ref(step));
            println!("{}", serde_json::to_string(&snapshot)?);
        }
    } else {
        let snapshot = run_script(&mut controls, &steps);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
