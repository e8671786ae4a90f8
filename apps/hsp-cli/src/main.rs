use clap::{Args, Parser, Subcommand};
use hsp_app::{
    AppError, AppResult, CheckReport, HspConfig, Session, SortColumn, SortOrder, load_config,
    sort_rows,
};
use hsp_catalog::{Category, MaterialEntry};
use hsp_core::ParameterTriple;
use hsp_engine::RankedRow;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "hsp-cli")]
#[command(about = "HSP Calc - Hansen solubility compatibility calculator", long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalOpts {
    /// YAML config file with threshold and margin
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Ra threshold for a compatible match (overrides config)
    #[arg(long, global = true)]
    threshold: Option<f64>,
    /// Width of the borderline band above the threshold (overrides config)
    #[arg(long, global = true)]
    margin: Option<f64>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog materials
    List {
        /// Only this category (resin or solvent)
        category: Option<Category>,
    },
    /// Search a category by name
    Search {
        /// Category to search (resin or solvent)
        category: Category,
        /// Case-insensitive name fragment
        query: String,
    },
    /// Check one resin against one solvent
    Check {
        /// Resin name
        #[arg(long)]
        resin: String,
        /// Catalog solvent name
        #[arg(long, required_unless_present = "custom", conflicts_with = "custom")]
        solvent: Option<String>,
        /// Custom solvent: NAME DD DP DH
        #[arg(long, num_args = 4, value_names = ["NAME", "DD", "DP", "DH"])]
        custom: Option<Vec<String>>,
    },
    /// Rank every catalog solvent against a resin
    Rank {
        /// Resin name
        #[arg(long)]
        resin: String,
        /// Re-sort the table by column (solvent, dd, dp, dh, ra, match)
        #[arg(long)]
        sort: Option<SortColumn>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli.opts)?;
    debug!(threshold = config.threshold, margin = config.margin, "resolved config");
    let mut session = Session::new(config);
    let json = cli.opts.json;

    match cli.command {
        Commands::List { category } => cmd_list(&session, category, json),
        Commands::Search { category, query } => cmd_search(&session, category, &query, json),
        Commands::Check {
            resin,
            solvent,
            custom,
        } => match (solvent, custom) {
            (_, Some(custom)) => {
                let (name, params) = parse_custom(&custom)?;
                let report = session.check_custom(&resin, &name, params)?;
                print_report(&report, json)
            }
            (Some(solvent), None) => {
                let report = session.check(&resin, &solvent)?;
                print_report(&report, json)
            }
            (None, None) => Err(AppError::InvalidInput(
                "either --solvent or --custom is required".to_string(),
            )),
        },
        Commands::Rank { resin, sort, desc } => cmd_rank(&session, &resin, sort, desc, json),
    }
}

fn resolve_config(opts: &GlobalOpts) -> AppResult<HspConfig> {
    let mut config = match &opts.config {
        Some(path) => load_config(path)?,
        None => HspConfig::default(),
    };
    if let Some(threshold) = opts.threshold {
        config.threshold = threshold;
    }
    if let Some(margin) = opts.margin {
        config.margin = margin;
    }
    Ok(config)
}

fn parse_custom(values: &[String]) -> AppResult<(String, ParameterTriple)> {
    let [name, dd, dp, dh] = values else {
        return Err(AppError::InvalidInput(
            "--custom takes NAME DD DP DH".to_string(),
        ));
    };
    let parse = |what: &str, raw: &str| {
        raw.trim().parse::<f64>().map_err(|e| {
            AppError::InvalidInput(format!("{what} '{raw}' is not a number: {e}"))
        })
    };
    let params = ParameterTriple::new(
        parse("δD", dd.as_str())?,
        parse("δP", dp.as_str())?,
        parse("δH", dh.as_str())?,
    );
    Ok((name.clone(), params))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{}", text);
    Ok(())
}

fn cmd_list(session: &Session, category: Option<Category>, json: bool) -> AppResult<()> {
    let categories = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    if json {
        #[derive(Serialize)]
        struct Listing<'a> {
            category: Category,
            entries: &'a [MaterialEntry],
        }
        let listings: Vec<_> = categories
            .iter()
            .map(|&category| Listing {
                category,
                entries: session.catalog().entries(category),
            })
            .collect();
        return print_json(&listings);
    }

    for category in categories {
        println!("{}:", category.plural());
        print_entries(session.catalog().entries(category).iter());
    }
    Ok(())
}

fn cmd_search(session: &Session, category: Category, query: &str, json: bool) -> AppResult<()> {
    let hits = session.catalog().search(category, query);
    if json {
        return print_json(&hits);
    }

    if hits.is_empty() {
        println!("No {} matching '{}'", category.plural().to_lowercase(), query);
    } else {
        print_entries(hits.into_iter());
    }
    Ok(())
}

fn print_entries<'a>(entries: impl Iterator<Item = &'a MaterialEntry>) {
    for entry in entries {
        println!(
            "  {:<20} δD={:>5.1}  δP={:>5.1}  δH={:>5.1}",
            entry.name,
            entry.params.dd(),
            entry.params.dp(),
            entry.params.dh()
        );
    }
}

fn print_report(report: &CheckReport, json: bool) -> AppResult<()> {
    if json {
        return print_json(report);
    }

    println!("Resin:   {} {}", report.resin.name, report.resin.params);
    println!("Solvent: {} {}", report.solvent.name, report.solvent.params);
    println!("Ra = {:.2}", report.result.distance);
    println!(
        "{} {} (threshold {:.1})",
        report.result.tier.symbol(),
        report.result.tier,
        report.threshold
    );
    Ok(())
}

fn cmd_rank(
    session: &Session,
    resin: &str,
    sort: Option<SortColumn>,
    desc: bool,
    json: bool,
) -> AppResult<()> {
    let mut rows = session.rank_solvents(resin)?;
    if let Some(column) = sort {
        let order = if desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        sort_rows(&mut rows, column, order);
    }

    if json {
        return print_json(&rows);
    }

    println!(
        "Solvents against {} (threshold {:.1}):",
        resin,
        session.policy().threshold
    );
    print_table(&rows);
    Ok(())
}

fn print_table(rows: &[RankedRow]) {
    let headers = [
        SortColumn::Solvent,
        SortColumn::Dd,
        SortColumn::Dp,
        SortColumn::Dh,
        SortColumn::Ra,
        SortColumn::Match,
    ]
    .map(SortColumn::header);
    println!(
        "  {:<20} {:>6} {:>6} {:>6} {:>7}  {}",
        headers[0], headers[1], headers[2], headers[3], headers[4], headers[5]
    );
    for row in rows {
        println!(
            "  {:<20} {:>6.1} {:>6.1} {:>6.1} {:>7.2}  {} {}",
            row.name,
            row.params.dd(),
            row.params.dp(),
            row.params.dh(),
            row.distance,
            row.tier.symbol(),
            row.tier
        );
    }
}
