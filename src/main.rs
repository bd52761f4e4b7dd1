use greeter::utils::logger;
use greeter::{Greeter, GreeterConfig};

fn main() {
    let config = GreeterConfig::from_env();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = Greeter::new(config).run(&mut out) {
        tracing::error!("Failed to write greeting: {}", e);
        std::process::exit(1);
    }
}
