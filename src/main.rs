use std::env;
use std::fs::File;
use std::io::BufReader;

use anyhow::{
    bail,
    Context
};

use numintegral::configuration::Configuration;
use numintegral::integration::integrator::Integrator;
use numintegral::integration::request::IntegrationRequest;

const USAGE: &str = "usage: numintegral <request.json> [config.json]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(request_path) = args.next() else {
        bail!(USAGE);
    };
    let configuration = match args.next() {
        Some(config_path) => Configuration::from_reader(&config_path)
            .with_context(|| format!("loading configuration from {}", config_path))?,
        None => Configuration::default()
    };

    let file = File::open(&request_path).with_context(|| format!("opening {}", request_path))?;
    let request: IntegrationRequest = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing request {}", request_path))?;

    let outcome = Integrator::new(configuration).run(&request)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
