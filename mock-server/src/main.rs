use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let teams = match std::env::var("TEAMS_SEED") {
        Ok(path) => {
            let teams = mock_server::load_seed(std::path::Path::new(&path)).await?;
            log::info!("seeded {} teams from {path}", teams.len());
            teams
        }
        Err(_) => Vec::new(),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on http://{addr}{}", mock_server::COLLECTION_PATH);
    mock_server::run_with(listener, teams).await
}
