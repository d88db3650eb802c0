use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_amav::cli::{Cli, Commands, YearArgs};
use kira_amav::ctx::Ctx;
use kira_amav::input::table::YearRange;
use kira_amav::io;
use kira_amav::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Run(args) => {
            let years = year_range(args.years)?;
            let mut ctx = Ctx::new(
                args.input,
                cwd,
                args.out,
                years,
                args.negative_mav.into(),
                args.json,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.threads = args.threads;

            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let years = year_range(args.years)?;
            let mut ctx = Ctx::new(
                args.input,
                cwd,
                PathBuf::from("."),
                years,
                Default::default(),
                false,
                env!("CARGO_PKG_VERSION"),
            );

            Pipeline::validate().run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn year_range(args: YearArgs) -> Result<YearRange> {
    if args.min_year > args.max_year {
        bail!(
            "--min-year ({}) must not exceed --max-year ({})",
            args.min_year,
            args.max_year
        );
    }
    Ok(YearRange {
        min: args.min_year,
        max: args.max_year,
    })
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_issues(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-amav validate ok");
    if let Some(table) = &ctx.table {
        println!("studies: {}", table.trends.len());
        println!("phenotypes: {}", table.phenotype_count());
        println!("year columns: {}", table.year_columns.len());
    }
    let reconstructed = ctx.results.iter().filter(|r| r.is_reconstructed()).count();
    println!("reconstructable: {}", reconstructed);
    print_issues(ctx);
}

fn print_issues(ctx: &Ctx) {
    if !ctx.issues.is_empty() {
        println!("warnings:");
        for issue in &ctx.issues {
            println!("- {}", issue);
        }
    }
}
