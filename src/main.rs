//! Console front-end rendering one page of the customer list.

use std::env;

use config::Config;
use dotenvy::dotenv;

use crm_client::domain::customer::Customer;
use crm_client::models::config::ApiConfig;
use crm_client::repository::CustomerReader;
use crm_client::repository::rest::RestApi;
use crm_client::services::listing::CustomerListController;

fn birthday_column(customer: &Customer) -> String {
    customer
        .date_of_birth
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn latest_interaction_column(customer: &Customer) -> String {
    customer
        .latest_interaction
        .as_ref()
        .map(|latest| format!("{} ({})", latest.kind, latest.time_ago))
        .unwrap_or_default()
}

fn render_page<R: CustomerReader>(controller: &CustomerListController<R>) {
    let view = controller.view();
    println!(
        "{:<30} {:<20} {:<12} {:<25}",
        "Name", "Company", "Birthday", "Latest interaction"
    );
    for customer in &view.customers.items {
        let company = customer
            .company
            .as_ref()
            .map(|company| company.name.as_str())
            .unwrap_or_default();
        println!(
            "{:<30} {:<20} {:<12} {:<25}",
            customer.full_name(),
            company,
            birthday_column(customer),
            latest_interaction_column(customer),
        );
    }
    println!(
        "Page {} of {} ({} customers)",
        view.customers.page,
        view.customers.total_pages.max(1),
        view.customers.total_count
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let api_config = match settings.try_deserialize::<ApiConfig>() {
        Ok(api_config) => api_config,
        Err(err) => {
            log::error!("Error loading API config: {}", err);
            std::process::exit(1);
        }
    };

    let repo = match RestApi::new(&api_config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build API client: {err}");
            std::process::exit(1);
        }
    };

    let mut controller = CustomerListController::new(repo);

    // An optional search term goes through the same debounce path the UI uses.
    if let Some(search) = env::args().nth(1) {
        controller.set_search_input(search);
        controller.settle_search().await;
    }
    if let Some(page) = env::args().nth(2).and_then(|arg| arg.parse().ok()) {
        controller.refresh().await;
        controller.set_page(page);
    }

    controller.refresh().await;
    if let Some(error) = &controller.view().error {
        log::error!("Failed to load customers: {error}");
        std::process::exit(1);
    }

    render_page(&controller);
}
