use health_server::config::load_config;
use health_server::startup;
use health_server::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = startup::run(&config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
