// main.rs - CLI entry point

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use msdist::cli::{Config, PairScorer, RunMode};
use msdist::output::{render, summarize, write_results, ResultRow};
use msdist::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
        if !args.quiet {
            println!("📄 Loaded configuration from: {}", config_path);
        }
    }

    let validation = validate_args(&args)?;
    let scorer = PairScorer::new(&args, &validation);

    if !args.quiet {
        println!("🚀 msdist v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "🎯 Comparing {} ({}, transpositions {})",
            if scorer.is_word_level() { "words" } else { "characters" },
            validation.comparator.name(),
            if args.transpositions { "on" } else { "off" }
        );
    }

    match validation.mode {
        RunMode::Single => {
            let presented = args.presented.as_deref().unwrap_or_default();
            let transcribed = args.transcribed.as_deref().unwrap_or_default();
            if args.dry_run {
                println!("✅ Dry run completed successfully");
                return Ok(());
            }
            let msd = scorer.score(presented, transcribed)?;
            print_pair(&msd, &args, &scorer);
            Ok(())
        }
        RunMode::Interactive => {
            if args.dry_run {
                println!("✅ Dry run completed successfully");
                return Ok(());
            }
            run_interactive(&args, &scorer)
        }
        RunMode::Batch => run_batch(&args, &validation, &scorer, &command_line),
    }
}

/// Print one scored pair: counts, matrix or annotated paths, alignments, legend
fn print_pair(msd: &Msd, args: &Args, scorer: &PairScorer) {
    println!("Number of Alignments: {}", msd.alignment_count());
    println!("MSD = {}", msd.msd());
    println!("Error rate = {:.2}%", msd.error_rate());

    let thinning = msd.thinning();
    if thinning.is_approximate() {
        eprintln!(
            "⚠️  Alignment set thinned: {} passes discarded {} candidates (peak frontier {})",
            thinning.passes, thinning.discarded, thinning.peak_frontier
        );
    }

    if !args.show_paths {
        println!();
        print!("{}", render::matrix_table(msd));
    }

    let separator = if scorer.is_word_level() { " " } else { "" };
    let shown = msd.alignment_count().min(args.max_shown);

    for (index, alignment) in msd.alignments().iter().take(shown).enumerate() {
        println!();
        println!("Alignment {}:", index + 1);
        if args.show_paths {
            print!("{}", render::alignment_table(msd, alignment));
            println!();
        }
        println!("  {}", alignment.aligned_presented().join(separator));
        println!("  {}", alignment.aligned_transcribed().join(separator));
        println!("  {}", alignment.explanation());
    }

    if shown < msd.alignment_count() {
        println!();
        println!("... {} more alignments not shown", msd.alignment_count() - shown);
    }

    println!();
    print!("{}", render::legend(scorer.transpositions()));
}

/// Score presented/transcribed line pairs from stdin until EOF or two empty lines
fn run_interactive(args: &Args, scorer: &PairScorer) -> Result<(), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(presented) = prompt_line(&mut lines, "presented> ", args.quiet)? else {
            break;
        };
        let Some(transcribed) = prompt_line(&mut lines, "transcribed> ", args.quiet)? else {
            break;
        };

        if presented.is_empty() && transcribed.is_empty() {
            break;
        }

        match scorer.score(&presented, &transcribed) {
            Ok(msd) => print_pair(&msd, args, scorer),
            Err(e) => eprintln!("❌ ERROR: {}", e),
        }
        println!();
    }

    Ok(())
}

fn prompt_line<B: BufRead>(
    lines: &mut io::Lines<B>,
    prompt: &str,
    quiet: bool,
) -> Result<Option<String>, String> {
    if !quiet {
        print!("{}", prompt);
        io::stdout().flush().map_err(|e| format!("Write error: {}", e))?;
    }
    match lines.next() {
        Some(line) => {
            let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(Some(line.trim_end_matches('\r').to_string()))
        }
        None => Ok(None),
    }
}

/// Score every trial of an input file in parallel and write the results
fn run_batch(
    args: &Args,
    validation: &ValidationResult,
    scorer: &PairScorer,
    command_line: &str,
) -> Result<(), String> {
    let input = args.input.as_deref().ok_or("--input is required")?;
    let output = args.output.as_deref().ok_or("--output is required")?;

    let total_start = Instant::now();
    let trials = TrialSet::from_file(Path::new(input))?;
    if !args.quiet {
        println!("📄 Loaded {} trials from {}", trials.len(), input);
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !args.quiet {
            println!("🧵 Threads: {}", n);
        }
    } else if !args.quiet {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(trials.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
            .map_err(|e| format!("Invalid progress template: {}", e))?
            .progress_chars("#>-"),
    );

    let compute_start = Instant::now();
    let rows: Vec<ResultRow> = trials
        .trials
        .par_iter()
        .map(|trial| {
            let row = scorer.score_trial(trial);
            pb.inc(1);
            row
        })
        .collect::<Result<Vec<_>, String>>()?;
    pb.finish_and_clear();

    write_results(output, validation.format, &rows, command_line)?;

    if !args.quiet {
        let summary = summarize(&rows);
        println!(
            "✅ Scored {} trials in {:.2}s",
            summary.trials,
            compute_start.elapsed().as_secs_f64()
        );
        println!("📊 Mean error rate: {:.2}%", summary.mean_error_rate);
        if let Some(wpm) = summary.mean_speed_wpm {
            println!("📊 Mean speed: {:.2} wpm", wpm);
        }
        if let Some(kspc) = summary.mean_kspc {
            println!("📊 Mean KSPC: {:.4}", kspc);
        }
        if summary.thinned_trials > 0 {
            println!(
                "⚠️  {} trials had their alignment set thinned",
                summary.thinned_trials
            );
        }
        println!("💾 Results saved to: {}", output);
        println!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}
