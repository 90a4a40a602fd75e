//! Workpulse: executive workforce analytics CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use workpulse::auth;
use workpulse::config::{load_config, Config};
use workpulse::export_basename;
use workpulse::insights::summarize_or_fallback;
use workpulse::registry::{
    analytics_narrative, find_metric, module_title, operational_alerts, DASHBOARD_ITEMS,
};
use workpulse::report::pipeline::{ExportFormat, ReportPipeline};
use workpulse::report::preview::ConsolePreview;
use workpulse::report::QuickTemplate;
use workpulse::sample::{breakdown, table_rows, trend_series, FilterContext};
use workpulse::session::{Action, SessionState, Tab, View};
use workpulse::store::{load_state, save_state};
use workpulse::{KpiStatus, Theme};

/// Workpulse: workforce analytics and executive report builder
#[derive(Parser, Debug)]
#[command(name = "workpulse")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: search .workpulserc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List dashboard metrics grouped by category
    Metrics,

    /// Drill into one metric: breakdown, trend, and per-zone table
    Show {
        /// Metric id (e.g. overtime, sick-hours)
        metric: String,

        /// Restrict the breakdown to one zone
        #[arg(long)]
        zone: Option<String>,

        /// Narrow the simulated volume by a search term
        #[arg(long)]
        search: Option<String>,
    },

    /// Build and export an executive report
    Report {
        /// Comma-separated module ids (overrides the default selection)
        #[arg(long, value_delimiter = ',')]
        modules: Option<Vec<String>>,

        /// Quick template: monthly-ops, quarterly-review, recruitment, full-brief
        #[arg(long, conflicts_with = "modules")]
        template: Option<QuickTemplate>,

        /// Reporting period label (e.g. "Last Month", "Q2 2025", "YTD")
        #[arg(long)]
        time_range: Option<String>,

        /// Report recipient line
        #[arg(long)]
        recipient: Option<String>,

        /// Export format: pdf, doc, or html (omit for a console preview)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Output directory (default: config outputDir)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skip the staged generation delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Deep-dive analytics narrative for a metric, with optional AI summary
    Insight {
        /// Metric id
        metric: String,
    },

    /// Show the morning-briefing operational alerts
    Alerts,

    /// Check a credential pair against the login gate
    Login {
        username: String,
        password: String,
    },

    /// Interactive session: navigate tabs, tiles, and the footer
    Browse,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let work_dir = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?;

    match args.command {
        Commands::Metrics => run_metrics(&work_dir),
        Commands::Show {
            metric,
            zone,
            search,
        } => run_show(&metric, zone, search, &work_dir),
        Commands::Report {
            modules,
            template,
            time_range,
            recipient,
            format,
            out,
            no_delay,
        } => run_report(
            &config, modules, template, time_range, recipient, format, out, no_delay,
        ),
        Commands::Insight { metric } => run_insight(&metric),
        Commands::Alerts => run_alerts(),
        Commands::Login { username, password } => run_login(&username, &password),
        Commands::Browse => run_browse(),
    }
}

fn status_colored(status: KpiStatus, text: &str) -> String {
    match status {
        KpiStatus::Good => text.green().to_string(),
        KpiStatus::Warning => text.yellow().to_string(),
        KpiStatus::Critical => text.red().bold().to_string(),
    }
}

fn run_metrics(work_dir: &std::path::Path) -> Result<ExitCode> {
    let mut state = load_state(work_dir);
    if !state.tour_completed {
        println!();
        println!("{}", "Welcome to Workpulse".bold());
        println!("  Start with `workpulse show overtime` to drill into a metric,");
        println!("  or `workpulse report --template monthly-ops` for a full briefing.");
        state.complete_tour();
        save_state(work_dir, &state).context("Failed to save local state")?;
    }

    for theme in [Theme::Orange, Theme::Green, Theme::Purple] {
        println!();
        println!("{}", theme.group_label().bold());
        for item in DASHBOARD_ITEMS.iter().filter(|m| m.theme == theme) {
            println!("  {:<20} {}", item.id, item.title);
        }
    }

    if !state.recent_searches.is_empty() {
        println!();
        println!("Recent searches: {}", state.recent_searches.join(", "));
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

fn run_show(
    metric: &str,
    zone: Option<String>,
    search: Option<String>,
    work_dir: &std::path::Path,
) -> Result<ExitCode> {
    let title = module_title(metric);
    if find_metric(metric).is_none() {
        eprintln!(
            "{}: '{}' is not a dashboard metric; showing generic detail",
            "Warning".yellow(),
            metric
        );
    }

    if let Some(ref term) = search {
        let mut state = load_state(work_dir);
        state.record_search(term);
        save_state(work_dir, &state).context("Failed to save local state")?;
    }

    let mut rng = rand::thread_rng();
    let filters = FilterContext {
        zone: zone.clone(),
        search,
    };
    let data = breakdown(metric, &filters, &mut rng);

    println!();
    println!("{}", title.bold());
    if let Some(z) = zone {
        println!("  Zone filter: {}", z);
    }
    println!("  Total: {:<14} Target: {}", data.total, data.target);

    println!();
    println!("  {}", "By Zone".bold());
    for slice in &data.zones {
        println!("    {:<24} {:>12}", slice.label, slice.value);
    }
    println!("  {}", "By Union".bold());
    for slice in &data.unions {
        println!("    {:<24} {:>12}", slice.label, slice.value);
    }
    println!("  {}", "By Classification".bold());
    for slice in &data.classification {
        println!("    {:<24} {:>12}", slice.label, slice.value);
    }
    println!("  {}", "Clinical Split".bold());
    for slice in &data.clinical {
        println!("    {:<24} {:>12}", slice.label, slice.value);
    }

    println!();
    println!("  {}", "Monthly Trend".bold());
    println!("    {:<6} {:>8} {:>8} {:>10}", "Month", "Actual", "Target", "Forecast");
    for point in trend_series(metric, &mut rng) {
        let forecast = point
            .forecast
            .map(|f| format!("{}", f))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "    {:<6} {:>8} {:>8} {:>10}",
            point.label, point.actual, point.target, forecast
        );
    }

    println!();
    println!("  {}", "By Zone (period comparison)".bold());
    for row in table_rows(metric, &mut rng) {
        let arrow = match row.trend {
            workpulse::sample::RowTrend::Up => "up",
            workpulse::sample::RowTrend::Down => "down",
            workpulse::sample::RowTrend::Flat => "flat",
        };
        println!("    {:<24} {:>10.1} {}", row.label, row.value, arrow);
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::too_many_arguments)]
fn run_report(
    config: &Config,
    modules: Option<Vec<String>>,
    template: Option<QuickTemplate>,
    time_range: Option<String>,
    recipient: Option<String>,
    format: Option<ExportFormat>,
    out: Option<PathBuf>,
    no_delay: bool,
) -> Result<ExitCode> {
    let mut pipeline = ReportPipeline::new();
    if no_delay {
        pipeline = pipeline.with_delay(Duration::ZERO);
    }

    if let Some(template) = template {
        pipeline.config.apply_template(template);
    }
    if let Some(modules) = modules {
        pipeline.config.set_modules(modules.iter().map(|m| m.trim()));
    }
    if let Some(time_range) = time_range {
        pipeline.config.time_range = time_range;
    }
    if let Some(recipient) = recipient {
        pipeline.config.recipient = recipient;
    }

    let document = pipeline.generate(&config.org_name, &config.fiscal_year);

    match format {
        None => {
            ConsolePreview::new().report(document);
        }
        Some(format) => {
            let basename = export_basename(
                &config.report_prefix,
                &pipeline.config.time_range,
                &config.fiscal_year,
            );
            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            if let Some(path) = pipeline.export(format, &out_dir, &basename)? {
                println!("Report written to {}", path.display());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_insight(metric: &str) -> Result<ExitCode> {
    let narrative = analytics_narrative(metric);

    println!();
    println!("{}", narrative.title.bold());
    for kpi in &narrative.kpis {
        let trend = if kpi.negative {
            kpi.trend.red().to_string()
        } else {
            kpi.trend.green().to_string()
        };
        println!("  {:<22} {:>14}  {}", kpi.label, kpi.value, trend);
    }

    println!();
    for insight in &narrative.insights {
        let severity = match insight.severity {
            workpulse::registry::InsightSeverity::Critical => {
                insight.severity.to_string().red().bold().to_string()
            }
            workpulse::registry::InsightSeverity::Warning => {
                insight.severity.to_string().yellow().to_string()
            }
            workpulse::registry::InsightSeverity::Info => {
                insight.severity.to_string().blue().to_string()
            }
        };
        println!("  [{}] {}", severity, insight.title.bold());
        println!("    {}", insight.description);
        println!("    {} {}", "Recommendation:".green(), insight.recommendation);
    }

    println!();
    println!("  {}", "Risk Factors".bold());
    for risk in &narrative.risk_factors {
        println!("    {:<36} {:>3}/100", risk.factor, risk.score);
    }

    println!();
    println!("  {}", "Written Report".bold());
    println!("  {}", narrative.written.executive_summary);
    for finding in &narrative.written.key_findings {
        println!("    - {}", finding);
    }
    println!();
    println!("    {:<12} {:<52} {:<8} {}", "Priority", "Action", "Impact", "Owner");
    for item in &narrative.written.recommendations {
        println!(
            "    {:<12} {:<52} {:<8} {}",
            item.priority, item.action, item.impact, item.owner
        );
    }
    println!("  {}", narrative.written.conclusion);

    println!();
    println!("  {}", "AI Summary".bold());
    let mut rng = rand::thread_rng();
    let series = trend_series(metric, &mut rng);
    println!("  {}", summarize_or_fallback(&narrative.title, &series));
    println!();
    Ok(ExitCode::SUCCESS)
}

fn run_alerts() -> Result<ExitCode> {
    println!();
    println!("{}", "Operational Alerts".bold());
    for alert in operational_alerts() {
        println!(
            "  {:<20} {:>10}  {}",
            alert.title,
            status_colored(alert.status, &alert.value),
            alert.subtitle
        );
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

fn run_login(username: &str, password: &str) -> Result<ExitCode> {
    match auth::login(username, password) {
        Ok(user) => {
            println!("Logged in as {}", user.username);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            Ok(ExitCode::from(1))
        }
    }
}

fn describe_view(view: &View) -> String {
    match view {
        View::Login => "login (use: login <username> <password>)".to_string(),
        View::Overview => "overview".to_string(),
        View::Analytics => "analytics".to_string(),
        View::Reports => "reports".to_string(),
        View::MetricDetail { metric_id } => {
            format!("detail: {}", module_title(metric_id))
        }
        View::GenericDetail { item_id } => format!("detail (generic): {}", item_id),
        View::AdvancedAnalytics { metric_id } => {
            format!("advanced analytics: {}", module_title(metric_id))
        }
        View::Construction { page_title } => format!("under construction: {}", page_title),
    }
}

fn run_browse() -> Result<ExitCode> {
    let stdin = std::io::stdin();
    let mut state = SessionState::new();

    println!("Workpulse interactive session. Type 'help' for commands, 'quit' to exit.");
    loop {
        print!("[{}] > ", describe_view(&state.current_view()));
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => {
                println!("  login <username> <password>");
                println!("  tab overview|analytics|reports");
                println!("  open <metric-id>");
                println!("  footer <page title>");
                println!("  back");
                println!("  logout");
                println!("  quit");
            }
            ["login", username, password] => match auth::login(username, password) {
                Ok(user) => {
                    println!("Welcome, {}", user.username);
                    state.apply(Action::LogIn {
                        username: user.username,
                    });
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            _ if !state.is_authenticated() => {
                println!("Please log in first: login <username> <password>");
            }
            ["tab", name] => {
                let tab = match *name {
                    "overview" => Some(Tab::Overview),
                    "analytics" => Some(Tab::Analytics),
                    "reports" => Some(Tab::Reports),
                    _ => None,
                };
                match tab {
                    Some(tab) => state.apply(Action::SelectTab(tab)),
                    None => println!("Unknown tab '{}'", name),
                }
            }
            ["open", id] => state.apply(Action::SelectTile {
                item_id: (*id).to_string(),
            }),
            ["footer", title @ ..] => state.apply(Action::OpenConstruction {
                page_title: title.join(" "),
            }),
            ["back"] => state.apply(Action::Back),
            ["logout"] => state.apply(Action::LogOut),
            other => println!("Unknown command '{}'", other.join(" ")),
        }
    }
    Ok(ExitCode::SUCCESS)
}
