//! Command implementations for all wayfind commands

use crate::cli::{Commands, MinimaxArgs, MultiArgs, RouteArgs, SearchArgs};
use crate::commands::dispatch::command::{resolve_endpoint, Command, CommandContext};
use crate::commands::{astar, graph, minimax, multi, search, ucs};
use wayfind_core::dataset::Dataset;
use wayfind_core::error::Result;
use wayfind_core::trace_time;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => execute_search(ctx, args),
            Commands::Ucs(args) => execute_ucs(ctx, args),
            Commands::Multi(args) => execute_multi(ctx, args),
            Commands::Astar(args) => execute_astar(ctx, args),
            Commands::Minimax(args) => execute_minimax(ctx, args),
            Commands::Graph => execute_graph(ctx),
        }
    }
}

fn route(dataset: &Dataset, args: &RouteArgs) -> Result<(String, String)> {
    let from = resolve_endpoint(dataset, "from", args.from.as_deref(), dataset.default_start())?;
    let to = resolve_endpoint(dataset, "to", args.to.as_deref(), dataset.default_goal())?;
    Ok((from, to))
}

fn execute_search(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let graph = dataset.build_graph()?;
    trace_time!(ctx.start, "build_graph");
    let (from, to) = route(&dataset, &args.route)?;
    search::execute(
        ctx.cli,
        &dataset,
        &graph,
        &from,
        &to,
        &args.strategy.strategies(),
    )
}

fn execute_ucs(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let graph = dataset.build_graph()?;
    trace_time!(ctx.start, "build_graph");
    let (from, to) = route(&dataset, args)?;
    ucs::execute(ctx.cli, &dataset, &graph, &from, &to)
}

fn execute_multi(ctx: &CommandContext, args: &MultiArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let graph = dataset.build_graph()?;
    trace_time!(ctx.start, "build_graph");
    let from = resolve_endpoint(&dataset, "from", args.from.as_deref(), dataset.default_start())?;

    let goals = if args.goal.is_empty() {
        dataset.default_goals()
    } else {
        let mut goals = Vec::with_capacity(args.goal.len());
        for raw in &args.goal {
            goals.push(resolve_endpoint(&dataset, "goal", Some(raw), None)?);
        }
        goals
    };
    if goals.is_empty() {
        wayfind_core::bail_usage!("missing --goal and the dataset defines no default goals");
    }

    multi::execute(ctx.cli, &dataset, &graph, &from, &goals)
}

fn execute_astar(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let graph = dataset.build_graph()?;
    trace_time!(ctx.start, "build_graph");
    let (from, to) = route(&dataset, args)?;
    astar::execute(ctx.cli, &dataset, &graph, &from, &to)
}

fn execute_minimax(ctx: &CommandContext, args: &MinimaxArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    minimax::execute(ctx.cli, &dataset, args.trace)
}

fn execute_graph(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let graph = dataset.build_graph()?;
    trace_time!(ctx.start, "build_graph");
    graph::execute(ctx.cli, &dataset, &graph)
}
