use anyhow::{Context, Result};
use clap::Args;
use takes_core::{TakeMember, TakeSession, Value};

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct IncludeParmsArgs {
    /// Take name
    pub take: String,

    /// Node path
    pub node: String,

    /// Glob on parameter names; repeatable. Without it every parameter is used.
    #[arg(long)]
    pub filter: Vec<String>,

    /// Exclude the parameters instead of including them
    #[arg(long)]
    pub exclude: bool,

    /// Value to give every included parameter in this take
    #[arg(long, value_name = "VALUE", conflicts_with = "exclude")]
    pub set: Option<String>,
}

pub fn run(args: &IncludeParmsArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let mut take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    let filter: Vec<&str> = args.filter.iter().map(String::as_str).collect();
    take.include_parms_from_node(args.node.as_str(), &filter, !args.exclude)?;

    if let Some(raw) = &args.set {
        let value = Value::parse(raw);
        let host = session.host();
        let case_insensitive = session.config().case_insensitive_filters;
        let id = host
            .resolve(&args.node)
            .with_context(|| format!("Invalid node: {}", args.node))?;
        let member = TakeMember {
            parms: host
                .parm_names(id)
                .into_iter()
                .filter(|name| {
                    filter.is_empty()
                        || filter.iter().any(|p| host.pattern_match(p, name, case_insensitive))
                })
                .map(|name| (name, Some(value.clone())))
                .collect(),
            ..TakeMember::default()
        };
        take.include_member(id, &member, true)?;
    }

    let verb = if args.exclude { "Excluded" } else { "Included" };
    let scope = if filter.is_empty() {
        "all parameters".to_string()
    } else {
        format!("parameters matching {}", filter.join(", "))
    };
    let message = format!("{verb} {scope} of {} in '{}'", args.node, take.name());
    println!("{}", format_take_result(&message, &take, format)?);
    Ok(())
}
