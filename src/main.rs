use clap::Parser;
use ml_scaffold::utils::{logger, validation::Validate};
use ml_scaffold::{BootstrapConfig, BootstrapEngine, Credentials, GitCli, GithubHost, PythonVenv};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BootstrapConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ml-scaffold");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Credential loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let host = match GithubHost::new(config.api_url.clone()) {
        Ok(host) => host,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let project = config.into_project_config(credentials);
    let engine = BootstrapEngine::new(host, GitCli, PythonVenv, project);

    match engine.run().await {
        Ok(root) => {
            tracing::info!("Project setup completed successfully");
            println!("✅ Project setup completed successfully!");
            println!("📁 Project created at: {}", root.display());
        }
        Err(e) => {
            tracing::error!("Project setup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
