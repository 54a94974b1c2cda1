//! packcalc serve - Run the HTTP service

use std::sync::Arc;

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::server::{self, App};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Worker thread count (overrides server.workers)
    #[arg(long)]
    pub workers: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &ServeArgs) -> Result<()> {
    let mut config = ctx.config.server.clone();
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(workers) = args.workers {
        config.workers = workers.max(1);
    }

    let db = ctx.open_database()?;
    let app = App::new(
        Arc::new(db),
        ctx.solve_options(),
        ctx.config.packs.default_order,
    );

    if !ctx.robot_mode {
        eprintln!("Listening on http://{}  (Ctrl-C to stop)", config.addr());
    }
    server::serve(app, &config)
}
