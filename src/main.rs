//! Wordle Solver CLI
//!
//! Interactive command-line interface for the entropy-based Wordle solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use wordle_solver::{
    Dictionary, FeedbackPattern, Session, SessionStatus, SolverConfig, SolverError, Word,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Debug, Subcommand, Clone)]
enum Commands {
    /// Play interactively, entering the feedback Wordle gives for each guess
    Play,
    /// Solve for a known target word
    Solve { target: String },
    /// Show the best opening guesses
    Suggest {
        #[clap(short, long, default_value_t = 5)]
        top: usize,
    },
    /// Solve every answer word and report the guess distribution
    Benchmark,
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list the secret word is drawn from, one word per line
    #[clap(short, long)]
    answers: PathBuf,

    /// Word list of allowed guesses; defaults to the answers
    #[clap(short = 'g', long)]
    allowed: Option<PathBuf>,

    /// TOML file with solver settings
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Score only the first N allowed guesses (0 = all)
    #[clap(long)]
    pool_limit: Option<usize>,

    #[clap(long)]
    max_attempts: Option<usize>,

    /// Compute every feedback pattern instead of memoizing them
    #[clap(long, action)]
    no_cache: bool,

    #[clap(short = 'v', long, default_value_t = 2)]
    verbosity: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Args {
    fn solver_config(&self) -> anyhow::Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SolverConfig::default(),
        };
        if let Some(pool_limit) = self.pool_limit {
            config.pool_limit = pool_limit;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if self.no_cache {
            config.pattern_cache = false;
        }
        Ok(config)
    }
}

fn init_logging(verbosity: usize) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(message);
    pb
}

fn print_status(session: &Session) {
    println!();
    println!("Current Game Status:");
    let possible = session.possible_answers();
    let mut status = format!("Possible words: {:4}", possible.len());
    if possible.len() <= 3 {
        let words: Vec<String> = possible.iter().map(Word::to_string).collect();
        status += &format!(" ({})", words.join(", "));
    }
    println!("{}", status);
}

/// Split a feedback line into the word that was played and its pattern.
///
/// Accepts a bare pattern ("CPAAP", "C P A A P"), meaning the suggestion was
/// played, or a word followed by its pattern ("SLATE CPAAP").
fn parse_feedback_line(
    line: &str,
    suggested: Word,
) -> Result<(Word, FeedbackPattern), SolverError> {
    let line = line.trim();
    if let Some((first, rest)) = line.split_once(char::is_whitespace) {
        if let (Ok(word), Ok(pattern)) = (first.parse::<Word>(), FeedbackPattern::parse(rest)) {
            return Ok((word, pattern));
        }
    }
    FeedbackPattern::parse(line).map(|pattern| (suggested, pattern))
}

/// Prompt until the player enters valid feedback. `None` on end of input or quit.
fn read_feedback(suggested: Word) -> anyhow::Result<Option<(Word, FeedbackPattern)>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!();
        println!("{:~^60}", " INPUT REQUIRED ");
        println!("Current Guess: {}", suggested);
        println!("Enter feedback using C/P/A for each letter (q to quit)");
        println!("{}", "-".repeat(60));
        print!(">>> Feedback for this guess: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if matches!(line.trim().to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Ok(None);
        }

        match parse_feedback_line(&line, suggested) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(e) => println!("Invalid input! {}", e),
        }
    }
}

fn run_play(mut session: Session) -> anyhow::Result<()> {
    println!("{}", BANNER_TEXT);

    for attempt in 1..=session.config().max_attempts {
        println!();
        println!("{:=^60}", format!(" ATTEMPT {} ", attempt));
        print_status(&session);

        let pb = spinner("Calculating best guess...");
        let suggestion = session.suggest();
        pb.finish_and_clear();

        let best = match suggestion {
            Ok(best) => best,
            Err(e) => {
                println!();
                println!("NO MORE POSSIBLE WORDS! {}", e);
                return Ok(());
            }
        };

        println!();
        println!("NEXT GUESS: {} ({:.2} bits)", best.word, best.entropy);
        println!("Enter this word in Wordle, then provide feedback:");

        let Some((guess, pattern)) = read_feedback(best.word)? else {
            println!("Goodbye!");
            return Ok(());
        };

        let before = session.remaining_count();
        let status = session.apply(guess, pattern);
        println!(
            "{} {} eliminated {} words ({} → {})",
            guess,
            pattern,
            before - session.remaining_count(),
            before,
            session.remaining_count()
        );

        match status {
            SessionStatus::Solved(word) => {
                println!();
                println!("CONGRATULATIONS! THE WORD IS {}!", word);
                return Ok(());
            }
            SessionStatus::NoCandidates => {
                println!();
                println!("No words match this feedback. Check the feedback you entered.");
                return Ok(());
            }
            SessionStatus::InProgress | SessionStatus::OutOfGuesses => {}
        }
    }

    println!();
    println!("Out of guesses.");
    print_status(&session);
    Ok(())
}

fn run_solve(mut session: Session, target: &str) -> anyhow::Result<()> {
    let target: Word = target.parse()?;
    if !session.dictionary().answers.contains(&target) {
        log::warn!("{} is not in the answer list", target);
    }

    println!("Solving for: {}", target);
    println!();

    let guesses = session.solve_for_target(&target)?;
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess, pattern);
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_win() => println!("Solved in {} guesses.", guesses.len()),
        _ => println!("Failed to solve within {} guesses.", session.config().max_attempts),
    }
    Ok(())
}

fn run_suggest(session: Session, top: usize) -> anyhow::Result<()> {
    let pb = spinner("Analyzing words...");
    let analyses = session.top_suggestions(top);
    pb.finish_and_clear();
    let analyses = analyses?;

    println!("Top {} guesses:", analyses.len());
    println!(
        "{:>4} {:>8} {:>8} {:>12} Possible?",
        "#", "Word", "Entropy", "Exp. Remain"
    );
    println!("{}", "-".repeat(50));
    for (i, analysis) in analyses.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word.to_string(),
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
    Ok(())
}

fn run_benchmark(session: Session) -> anyhow::Result<()> {
    let total = session.dictionary().answers.len();
    println!("Running benchmark on all {} words...", total);

    let pb = ProgressBar::new(total as u64);
    let start = Instant::now();
    let report = session.benchmark(|_, _| pb.inc(1));
    pb.finish_and_clear();
    let report = report?;
    let elapsed = start.elapsed();

    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", report.average);
    println!("Total words: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);
    if report.failures > 0 {
        println!(
            "Words not solved in {} guesses: {}",
            session.config().max_attempts,
            report.failures
        );
    } else {
        println!("✓ All words solved within {} guesses!", session.config().max_attempts);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbosity)?;

    let config = args.solver_config()?;
    if config.max_attempts == 0 {
        bail!("max_attempts must be at least 1");
    }

    let dictionary = Dictionary::load(&args.answers, args.allowed.as_ref())
        .context("loading word lists")?;
    let session = Session::new(dictionary, config);

    match args.command.clone().unwrap_or(Commands::Play) {
        Commands::Play => run_play(session),
        Commands::Solve { target } => run_solve(session, &target),
        Commands::Suggest { top } => run_suggest(session, top),
        Commands::Benchmark => run_benchmark(session),
    }
}
