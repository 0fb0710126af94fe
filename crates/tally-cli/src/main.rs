use clap::Parser;

use tally_server::TallyServer;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = cli::Cli::parse();

    let server = TallyServer::new(cli.server_config()?);
    let state = server.build_state()?;
    for peer in &cli.peers {
        state.node.add_peer(peer);
        tracing::info!(peer = %peer, "initial peer registered");
    }
    server.serve(state).await?;
    Ok(())
}
