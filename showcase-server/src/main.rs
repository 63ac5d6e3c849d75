//! Static server for the showcase page and its project catalog.

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use tiny_http::{Header, Response, Server};

mod error;
mod routes;

use error::ServerError;
use routes::Site;

#[derive(Parser)]
#[command(name = "showcase-server")]
#[command(about = "Serves the showcase page, its assets and /get_data")]
struct Args {
    /// Interface to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Web root holding index.html and the built engine
    #[arg(short, long, default_value = "web")]
    root: PathBuf,

    /// JSON document served at /get_data
    #[arg(short, long, default_value = "data/get_data.json")]
    data: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ServerError> {
    let site = Site::load(args.root, &args.data)?;

    let addr = format!("{}:{}", args.host, args.port);
    let server = Server::http(&addr).map_err(|e| ServerError::Bind {
        addr: addr.clone(),
        message: e.to_string(),
    })?;

    info!("Serving {} on http://{}", site.root().display(), addr);
    info!("Catalog from {}", args.data.display());

    for request in server.incoming_requests() {
        let reply = site.respond(request.method(), request.url());
        info!("{} {} -> {}", request.method(), request.url(), reply.status);

        let mut response = Response::from_data(reply.body).with_status_code(reply.status);
        if let Ok(content_type) = Header::from_bytes("Content-Type", reply.content_type) {
            response.add_header(content_type);
        }
        if reply.status == 405 {
            if let Ok(allow) = Header::from_bytes("Allow", "GET, HEAD") {
                response.add_header(allow);
            }
        }

        if let Err(err) = request.respond(response) {
            warn!("Failed to send response: {}", err);
        }
    }

    Ok(())
}
