use stratus_fake::ControllerState;

#[tokio::main]
async fn main() {
    stratus_observability::init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let app = stratus_fake::build_router(ControllerState::default());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|err| panic!("failed to bind 0.0.0.0:{port}: {err}"));

    tracing::info!("fake cloud controller listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
