use kuberns::{api, config, models, routes, services};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::SocketAddr;
use std::process;
use std::time::Duration;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use config::{DEFAULT_HOST, DEFAULT_PORT};
use models::{AppState, EnvVariable, EnvVariables, FormData, PendingDeployment, PlanCatalog, PlanTier, PortSelection};
use models::Notice;
use services::{
    failure_notice, resolve_deployment, started_notice, submit_deployment, success_notice, TrackingOutcome,
    WizardHandoff,
};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = match reqwest::Client::builder()
        .user_agent(format!("Kuberns/{}", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };

    AppState::new(config::get_api_base_url(), config::get_public_base_url(), client)
        .with_timing(config::get_notice_delay(), config::get_poll_interval())
}

async fn start_server(state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    let css = match stylesheet {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(css) => {
                tracing::info!("Loaded custom stylesheet from {}", path);
                css
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        },
        None => routes::DEFAULT_STYLESHEET.to_string(),
    };

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(%addr, api = %state.api_base_url, "Starting Kuberns wizard server");
    let app = routes::build_router_with_stylesheet(state, css);
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_plans() {
    let mut table = new_table();
    table.set_header(vec!["Plan", "CPU", "Memory", "Storage", "Bandwidth", "Monthly", "Hourly"]);
    for (tier, detail) in PlanCatalog.tiers() {
        table.add_row(vec![
            format!("{} ({})", detail.name, tier.id()),
            format!("{} vCPU", detail.cpu),
            format!("{} MB", detail.memory),
            format!("{} GB", detail.storage),
            detail.bandwidth.to_string(),
            detail.monthly_cost.to_string(),
            detail.hourly_rate.to_string(),
        ]);
    }
    println!("\n{table}\n");
}

fn print_config(state: &AppState) {
    let mut table = new_table();
    table.set_header(vec!["Setting", "Value"]);
    let public = if state.public_base_url.is_empty() { "(relative links)".to_string() } else { state.public_base_url.clone() };
    table.add_row(vec!["API_BASE_URL".to_string(), state.api_base_url.clone()]);
    table.add_row(vec!["PUBLIC_BASE_URL".to_string(), public]);
    table.add_row(vec!["DEPLOY_NOTICE_DELAY_SECS".to_string(), state.notice_delay.as_secs().to_string()]);
    table.add_row(vec!["DEPLOY_POLL_INTERVAL_SECS".to_string(), state.poll_interval.as_secs().to_string()]);
    println!("\n{table}\n");
}

fn print_notice(notice: &Notice) {
    if notice.destructive {
        eprintln!("{} {}", yansi::Paint::new(&notice.title).red().bold(), notice.description);
    } else {
        println!("{} {}", yansi::Paint::new(&notice.title).green().bold(), notice.description);
    }
}

/// Parses `KEY=VALUE`; the value may itself contain `=`.
fn parse_env_pair(raw: &str) -> Result<EnvVariable, String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok(EnvVariable { key: key.to_string(), value: value.to_string() }),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

async fn run_deploy(state: AppState, form_data: FormData, port: Option<u16>, env: Vec<EnvVariable>) {
    let missing = form_data.missing_fields();
    if !missing.is_empty() {
        eprintln!("{}: {}", yansi::Paint::new("Missing required fields").red(), missing.join(", "));
        process::exit(1);
    }
    let handoff = WizardHandoff { form_data, plans: PlanCatalog };
    let port = match port {
        Some(p) => PortSelection::custom(p.to_string()),
        None => PortSelection::random(),
    };
    let env = if env.is_empty() { EnvVariables::default() } else { EnvVariables::from_rows(env) };

    let pb = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        Ok(style) => pb.set_style(style),
        Err(e) => tracing::debug!(%e, "Falling back to default spinner style"),
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Setting up {}...", handoff.form_data.app_name));

    let submitted = match submit_deployment(&state.client, &state.api_base_url, &handoff, &port, &env).await {
        Ok(s) => s,
        Err(e) => {
            pb.finish_and_clear();
            print_notice(&failure_notice(&e.to_string()));
            process::exit(1);
        }
    };
    let public_ip = submitted.created.public_ip.clone();
    print_notice(&started_notice(&submitted.request.name, public_ip.as_deref()));

    let tracking_id = state.track_deployment(PendingDeployment::new(
        submitted.request.name.clone(),
        public_ip,
        submitted.created.id.clone(),
    ));
    loop {
        match resolve_deployment(&state, &tracking_id).await {
            Some(TrackingOutcome::Pending { status, .. }) => {
                pb.set_message(format!("Deploying {} ({})", submitted.request.name, kuberns::utils::format_status(&status)));
                tokio::time::sleep(state.poll_interval).await;
            }
            Some(TrackingOutcome::Live { public_ip }) => {
                pb.finish_and_clear();
                print_notice(&success_notice(public_ip.as_deref()));
                return;
            }
            Some(TrackingOutcome::Failed { message }) => {
                pb.finish_and_clear();
                print_notice(&failure_notice(&message));
                process::exit(1);
            }
            None => {
                pb.finish_and_clear();
                return;
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "kuberns",
    author,
    version,
    about = "Kuberns web app deployment wizard",
    long_about = r#"Kuberns: deploy a web app from a repository in two steps.

Serves the two-step creation wizard (select repository, region, framework and plan, then configure port and environment variables) and submits the deployment to the Kuberns API. The same flow is available from the command line with `kuberns deploy`.

Examples:
  1) Run the wizard (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Show the plans:
      kuberns plans
  3) Deploy without the browser:
      kuberns deploy --organization kuberns --repository my-app --branch main \
        --app-name my-app --region us-east-1 --framework react --env NODE_ENV=production
"#,
    after_help = "Use `kuberns <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Print the resolved configuration
    #[command(about = "Show resolved configuration.", long_about = "Load the environment (and optional .env file) and print the API base URL, public base URL and deployment tracking timings the server would use.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// List the available plans
    Plans,
    /// Deploy a web app without the browser wizard
    #[command(about = "Deploy a web app", long_about = "Run the same validation and request builder as the web wizard and submit the deployment. Without `--port` a random port in 3000-9998 is used. Repeat `--env KEY=VALUE` for each environment variable.")]
    Deploy {
        #[arg(long)]
        organization: String,
        #[arg(long)]
        repository: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        app_name: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        framework: String,
        /// Plan tier (starter|pro)
        #[arg(long, default_value_t = PlanTier::Starter)]
        plan: PlanTier,
        /// Custom port; random when omitted
        #[arg(long)]
        port: Option<u16>,
        /// Environment variable as KEY=VALUE (repeatable)
        #[arg(long = "env", value_parser = parse_env_pair)]
        env: Vec<EnvVariable>,
        /// Mark the app as using a database
        #[arg(long, default_value_t = false)]
        use_database: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };
    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            print_config(&state);
        }
        Commands::Plans => print_plans(),
        Commands::Deploy {
            organization,
            repository,
            branch,
            app_name,
            region,
            framework,
            plan,
            port,
            env,
            use_database,
            env_file,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            let form_data = FormData {
                organization,
                repository,
                branch,
                app_name,
                region,
                framework,
                plan_type: plan,
                use_database,
            };
            run_deploy(state, form_data, port, env).await;
        }
    }
}
