#![allow(clippy::type_complexity)]

mod scured;
mod served;

mod body;
mod err;
mod files;
mod http;
mod opt;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options { verbose, command } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    match command {
        opt::Command::Served(options) => served::main(options).await?,
        opt::Command::Scured(options) => scured::main(options).await?,
    }

    Ok(())
}
