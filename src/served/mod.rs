use crate::err::Error;
use crate::files;
use crate::http::run_simple_server;
use crate::served::routes::respond_to_request;

mod access;
pub mod opt;
mod routes;

pub async fn main(options: opt::Options) -> Result<(), Error> {
    let opt::Options { listen, root } = options;

    run_simple_server(listen, files::State::new(root), respond_to_request).await?;

    Ok(())
}
