mod logger;

use anyhow::{Context, Result, bail};
use booklet_impose::{
    BookletOptions, BookletRequest, BookletStatistics, ConfigStore, ImpositionPlan,
    ImpositionPlanner, PreparedBook, SpreadPair, check_spread_alignment, load_pdf, load_source,
    misaligned_spreads, parse_page_selection, prepare_book, save_pdf, selection_summary,
    validate_booklet_options, validate_selection,
};
use clap::{Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "booklet", about = "Saddle-stitch booklet imposition for comics and manga", version)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a PDF or CBZ into print-ready booklet sheets
    Generate {
        /// Input PDF or CBZ file
        input: PathBuf,

        /// Page selection, one per book (e.g. "b,1-20,b"); defaults to all pages
        #[arg(short = 'p', long = "pages")]
        selections: Vec<String>,

        /// Page flow of the finished booklet
        #[arg(long, value_enum)]
        reading_order: Option<ReadingOrderArg>,

        /// Number of signatures per book
        #[arg(long)]
        signatures: Option<usize>,

        /// Single duplex file or separate front/back files
        #[arg(long, value_enum)]
        duplex: Option<DuplexArg>,

        /// Output paper size (landscape)
        #[arg(long, value_enum)]
        paper_size: Option<PaperArg>,

        /// Base name for output files (defaults to the input file name)
        #[arg(long)]
        output_name: Option<String>,

        /// Output directory (defaults to <input dir>/prints)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Pages meant to be viewed side by side, e.g. "12-13"
        #[arg(long = "spread", value_parser = parse_spread)]
        spreads: Vec<SpreadPair>,

        /// Source page used as the front cover
        #[arg(long)]
        front_cover: Option<usize>,

        /// Source page used as the back cover
        #[arg(long)]
        back_cover: Option<usize>,

        /// Insert blanks for covers, spreads and padding
        #[arg(long)]
        smart_blanks: bool,

        /// Show statistics only, don't generate PDFs
        #[arg(long)]
        stats_only: bool,

        /// Configuration file
        #[arg(long, default_value = "config.json")]
        config: PathBuf,

        /// Store the effective options back into the configuration file
        #[arg(long)]
        save_config: bool,
    },

    /// Print the sheet layout for a selection without reading any file
    Plan {
        /// Page selection (e.g. "1-16" or "b,1-10,b")
        selection: String,

        /// Page count of the source document
        #[arg(long)]
        total_pages: usize,

        /// Number of signatures
        #[arg(long, default_value = "1")]
        signatures: usize,

        /// Page flow of the finished booklet
        #[arg(long, default_value = "western", value_enum)]
        reading_order: ReadingOrderArg,

        /// Pages meant to be viewed side by side, e.g. "12-13"
        #[arg(long = "spread", value_parser = parse_spread)]
        spreads: Vec<SpreadPair>,
    },

    /// Split scanned double pages into single pages
    Split {
        /// Input PDF file
        input: PathBuf,

        /// Output PDF file (defaults to <input>_split.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or reset the stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,

        /// Configuration file
        #[arg(long, default_value = "config.json", global = true)]
        config: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Delete the configuration file
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReadingOrderArg {
    Western,
    Manga,
}

#[derive(Clone, Copy, ValueEnum)]
enum DuplexArg {
    Auto,
    Manual,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Tabloid,
    A3,
    Letter,
    A4,
    Legal,
}

impl From<ReadingOrderArg> for booklet_impose::ReadingOrder {
    fn from(arg: ReadingOrderArg) -> Self {
        match arg {
            ReadingOrderArg::Western => Self::Western,
            ReadingOrderArg::Manga => Self::Manga,
        }
    }
}

impl From<DuplexArg> for booklet_impose::DuplexMode {
    fn from(arg: DuplexArg) -> Self {
        match arg {
            DuplexArg::Auto => Self::Auto,
            DuplexArg::Manual => Self::Manual,
        }
    }
}

impl From<PaperArg> for booklet_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Tabloid => Self::Tabloid,
            PaperArg::A3 => Self::A3,
            PaperArg::Letter => Self::Letter,
            PaperArg::A4 => Self::A4,
            PaperArg::Legal => Self::Legal,
        }
    }
}

fn parse_spread(s: &str) -> std::result::Result<SpreadPair, String> {
    s.parse::<SpreadPair>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose, cli.quiet)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Generate {
            input,
            selections,
            reading_order,
            signatures,
            duplex,
            paper_size,
            output_name,
            output_dir,
            spreads,
            front_cover,
            back_cover,
            smart_blanks,
            stats_only,
            config,
            save_config,
        } => {
            let store = ConfigStore::new(config);
            let mut options = store.load().await;
            if let Some(order) = reading_order {
                options.reading_order = order.into();
            }
            if let Some(count) = signatures {
                options.num_signatures = count;
            }
            if let Some(mode) = duplex {
                options.duplex_mode = mode.into();
            }
            if let Some(paper) = paper_size {
                options.paper_size = paper.into();
            }
            if let Some(dir) = output_dir {
                options.output_folder = dir.to_string_lossy().into_owned();
            }
            options.output_name = output_name.unwrap_or_default();
            options.validate()?;

            if save_config {
                store.save(&options).await?;
                println!("Saved configuration → {}", store.path().display());
            }

            let request = BookletRequest {
                input,
                selections,
                options,
                spreads,
                front_cover,
                back_cover,
                smart_blanks,
            };
            run_generate(&request, stats_only).await?;
        }

        Commands::Plan {
            selection,
            total_pages,
            signatures,
            reading_order,
            spreads,
        } => {
            let report = validate_selection(&selection, total_pages);
            for warning in &report.warnings {
                println!("Warning: {}", warning);
            }
            if !report.is_valid() {
                bail!("{}", report.errors.join("; "));
            }

            let parsed = parse_page_selection(&selection, total_pages);
            let planner = ImpositionPlanner::default();
            let option_report = validate_booklet_options(parsed.pages.len(), signatures, &planner);
            for warning in &option_report.warnings {
                println!("Warning: {}", warning);
            }

            let plan = planner.plan(&parsed.pages, signatures, reading_order.into())?;
            println!("{}", selection_summary(&parsed.pages));
            print_plan(&plan);

            for result in misaligned_spreads(&check_spread_alignment(&parsed.pages, &spreads)) {
                println!("Warning: {}", result.warning());
            }
        }

        Commands::Split { input, output } => {
            let output = output.unwrap_or_else(|| {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "output".to_string());
                input.with_file_name(format!("{}_split.pdf", stem))
            });

            let mut doc = load_pdf(&input).await?;
            let outcome = booklet_impose::compose::split_double_pages(&mut doc)?;
            save_pdf(doc, &output).await?;

            println!("Split Results:");
            println!("  Original pages: {}", outcome.original_pages);
            println!("  Output pages: {}", outcome.output_pages);
            println!("  Double pages split: {}", outcome.splits_made);
            if !outcome.spreads.is_empty() {
                let pairs: Vec<String> = outcome.spreads.iter().map(|s| s.to_string()).collect();
                println!("  Spreads: {}", pairs.join(", "));
            }
            println!("Split → {}", output.display());
        }

        Commands::Config { action, config } => {
            let store = ConfigStore::new(config);
            match action {
                ConfigAction::Show => {
                    let options = store.load().await;
                    print_options(&options);
                }
                ConfigAction::Reset => {
                    if store.reset().await? {
                        println!("Removed {}", store.path().display());
                    } else {
                        println!("No configuration at {}", store.path().display());
                    }
                }
            }
        }
    }

    Ok(())
}

async fn run_generate(request: &BookletRequest, stats_only: bool) -> Result<()> {
    let source = load_source(&request.input)
        .await
        .with_context(|| format!("Failed to load {}", request.input.display()))?;
    let total_pages = source.page_count();

    let selections = request.book_selections(total_pages);
    for (index, text) in selections.iter().enumerate() {
        let book = prepare_book(request, text, total_pages)?;
        if selections.len() > 1 {
            println!("Book {}:", index + 1);
        }
        print_book(&book);
    }

    if stats_only {
        return Ok(());
    }

    let books = booklet_impose::generate_from_source(Arc::new(source), request).await?;
    for book in &books {
        for file in &book.files {
            println!("Generated → {}", file.display());
        }
    }
    Ok(())
}

fn print_book(book: &PreparedBook) {
    for diagnostic in &book.diagnostics {
        println!("  Warning: {}", diagnostic);
    }
    for change in &book.blank_changes {
        println!("  {}", change);
    }
    for warning in &book.alignment_warnings {
        println!("  Warning: {}", warning);
    }
    print_statistics(&book.statistics);
}

fn print_statistics(stats: &BookletStatistics) {
    println!("Booklet Statistics:");
    println!("  Selected pages: {}", stats.selected_pages);
    println!("  Blank markers: {}", stats.blank_markers);
    println!("  Signatures: {}", stats.signatures);
    println!("  Pages per signature: {:?}", stats.pages_per_signature);
    println!("  Sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Padding blanks: {}", stats.padding_blanks);
}

fn print_plan(plan: &ImpositionPlan) {
    for (sig_index, signature) in plan.signatures.iter().enumerate() {
        println!(
            "Signature {} ({} pages):",
            sig_index + 1,
            signature.page_count()
        );
        for (sheet_index, sheet) in signature.sheets.iter().enumerate() {
            println!(
                "  Sheet {:>2}  front [{:>3} | {:<3}]  back [{:>3} | {:<3}]",
                sheet_index + 1,
                sheet.front_left.to_string(),
                sheet.front_right.to_string(),
                sheet.back_left.to_string(),
                sheet.back_right.to_string()
            );
        }
    }
}

fn print_options(options: &BookletOptions) {
    println!("Configuration:");
    println!("  Reading order: {}", options.reading_order.as_str());
    println!("  Signatures: {}", options.num_signatures);
    println!("  Duplex mode: {:?}", options.duplex_mode);
    println!("  Paper size: {}", options.paper_size.as_str());
    if options.output_folder.is_empty() {
        println!("  Output folder: (next to input)");
    } else {
        println!("  Output folder: {}", options.output_folder);
    }
}
