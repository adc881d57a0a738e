mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdf_print::constants::pt_to_in;
use pdf_print::{ComposeOptions, Order, PosterConfig, PrintSize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfp", about = "Print-ready PDF generator", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single full-bleed sheet from an image
    Single {
        /// Input image (JPEG or PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Print size name (see `pdfp sizes`)
        #[arg(long, value_parser = parse_print_size)]
        size: PrintSize,

        /// Order code, written as the PDF title
        #[arg(long)]
        order: String,

        /// JSON file with composition options
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Tile an image across a grid of sheets
    Poster {
        /// Input image (JPEG or PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Sheet size name (see `pdfp sizes`)
        #[arg(long, value_parser = parse_print_size)]
        size: PrintSize,

        /// Poster layout, rows x cols (see `pdfp sizes`)
        #[arg(long, value_parser = parse_poster_config)]
        layout: PosterConfig,

        /// Order code, written into the PDF title
        #[arg(long)]
        order: String,

        /// JSON file with composition options
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Show the preview grid and assembled size of a poster layout
    Grid {
        /// Poster layout, rows x cols
        #[arg(long, value_parser = parse_poster_config)]
        layout: PosterConfig,

        /// Sheet size name
        #[arg(long, value_parser = parse_print_size)]
        size: PrintSize,

        /// Overlap between glued sheets, in inches
        #[arg(long, default_value_t = pdf_print::constants::DEFAULT_OVERLAP_INCHES)]
        overlap: f32,
    },

    /// List print sizes and poster layouts
    Sizes,
}

fn parse_print_size(s: &str) -> std::result::Result<PrintSize, String> {
    s.parse().map_err(|e: pdf_print::PrintError| e.to_string())
}

fn parse_poster_config(s: &str) -> std::result::Result<PosterConfig, String> {
    s.parse().map_err(|e: pdf_print::PrintError| e.to_string())
}

async fn load_options(path: Option<&Path>) -> Result<ComposeOptions> {
    match path {
        Some(path) => ComposeOptions::load(path)
            .await
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(ComposeOptions::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Single {
            input,
            output,
            size,
            order,
            config,
        } => {
            let options = load_options(config.as_deref()).await?;
            let image = pdf_print::load_image(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let order = Order::new(order, Some(size));

            let bytes = pdf_print::generate_single_sheet_pdf(&image, &order, &options)
                .await
                .with_context(|| format!("composing order {}", order.code))?;
            pdf_print::save_pdf(&bytes, &output).await?;

            log::info!("wrote {} bytes to {}", bytes.len(), output.display());
            println!("Single sheet → {}", output.display());
        }

        Commands::Poster {
            input,
            output,
            size,
            layout,
            order,
            config,
            stats_only,
        } => {
            let options = load_options(config.as_deref()).await?;

            let stats =
                pdf_print::calculate_poster_statistics(&layout, &size, &options.constants);
            println!("Poster Statistics:");
            println!("  Layout: {}", layout);
            println!("  Sheet: {}", size);
            println!(
                "  Page size: {} x {} pt ({}\" x {}\" with bleed)",
                stats.page_width_pt,
                stats.page_height_pt,
                pt_to_in(stats.page_width_pt),
                pt_to_in(stats.page_height_pt)
            );
            println!(
                "  Printed canvas: {}\" x {}\"",
                stats.printed_width_inches, stats.printed_height_inches
            );
            println!(
                "  Assembled: {}",
                pdf_print::format_poster_size(
                    stats.assembled.total_width_inches,
                    stats.assembled.total_height_inches
                )
            );

            if stats_only {
                return Ok(());
            }

            let image = pdf_print::load_image(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let order = Order::new(order, Some(size));

            let bytes = pdf_print::generate_poster_pdf(&image, &order, layout.grid(), &options)
                .await
                .with_context(|| format!("composing poster for order {}", order.code))?;
            pdf_print::save_pdf(&bytes, &output).await?;

            log::info!(
                "wrote {} pages, {} bytes to {}",
                stats.sheets,
                bytes.len(),
                output.display()
            );
            println!("Poster → {}", output.display());
        }

        Commands::Grid {
            layout,
            size,
            overlap,
        } => {
            let dims = pdf_print::calculate_poster_dimensions(
                &layout,
                size.width_inches,
                size.height_inches,
                overlap,
            );
            println!("{} on {}", layout, size);
            println!(
                "Assembled size: {}",
                pdf_print::format_poster_size(dims.total_width_inches, dims.total_height_inches)
            );

            for pos in pdf_print::generate_sheet_positions(&layout) {
                let m = pos.markers;
                println!(
                    "  sheet {}-{}: x={:.3} y={:.3} w={:.3} h={:.3} seams[{}{}{}{}]",
                    pos.row + 1,
                    pos.col + 1,
                    pos.x,
                    pos.y,
                    pos.width,
                    pos.height,
                    if m.top { "T" } else { "-" },
                    if m.bottom { "B" } else { "-" },
                    if m.left { "L" } else { "-" },
                    if m.right { "R" } else { "-" },
                );
            }
        }

        Commands::Sizes => {
            println!("Print sizes:");
            for size in PrintSize::catalog() {
                println!("  {}", size);
            }
            println!("Poster layouts:");
            for config in pdf_print::POSTER_CONFIGS {
                println!("  {}", config);
            }
        }
    }

    Ok(())
}
