use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use serp_analyzer::interactive::{self, InquirePrompter, Prompter};
use serp_analyzer::{demo, export, print_analysis_results, utils, Analyzer, Args};

fn build_analyzer(args: &Args, prompter: &mut dyn Prompter) -> Result<Analyzer> {
    let keyword = if args.demo {
        demo::DEMO_KEYWORD.to_string()
    } else {
        match &args.keyword {
            Some(keyword) => keyword.trim().to_string(),
            None => interactive::prompt_keyword(prompter)?,
        }
    };

    let mut analyzer = Analyzer::new(keyword).with_options(args.analysis_options());
    if args.demo {
        demo::populate(&mut analyzer);
    }
    if let Some(input) = &args.input {
        analyzer.load_csv(input)?;
    }
    if args.interactive {
        interactive::collect_competitors(&mut analyzer, prompter)?;
    }
    Ok(analyzer)
}

fn run(args: &Args) -> Result<()> {
    let mut prompter = InquirePrompter;
    let analyzer = build_analyzer(args, &mut prompter)?;

    if analyzer.is_empty() && args.interactive {
        println!("No competitors added. Exiting.");
        return Ok(());
    }

    if !args.no_report {
        print_analysis_results(&analyzer.analyze());
    }

    let (json, csv): (Option<Option<PathBuf>>, Option<Option<PathBuf>>) =
        if args.interactive && args.json.is_none() && args.csv.is_none() {
            let choice = prompter.export_choice()?;
            (choice.wants_json().then_some(None), choice.wants_csv().then_some(None))
        } else {
            (args.json.clone(), args.csv.clone())
        };

    if let Some(explicit) = json {
        let path = export::resolve_path(explicit.as_deref(), &args.output_dir, || {
            export::default_json_filename(analyzer.keyword(), export::now())
        });
        export::export_json(&analyzer, &path)?;
        println!("JSON exported to: {}", path.display());
    }

    if let Some(explicit) = csv {
        let path = export::resolve_path(explicit.as_deref(), &args.output_dir, || {
            export::default_csv_filename(analyzer.keyword(), export::now())
        });
        export::export_csv(&analyzer, &path)?;
        println!("CSV exported to: {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
