use api::{App, Catalog, Provider};
use hyper::{server::conn::http1, service};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime};

/// Connects to PostgreSQL if `PG_HOSTNAME` is set. Otherwise, falls back to
/// the bundled catalog.
async fn init_provider() -> anyhow::Result<Provider> {
    let Ok(host) = env::var("PG_HOSTNAME") else {
        log::warn!("PG_HOSTNAME is not set; quiz attempts will not be persisted");
        return Ok(Provider::Static(Catalog::load()?));
    };

    let user = env::var("PG_USERNAME")?;
    let pass = env::var("PG_PASSWORD")?;
    let data = env::var("PG_DATABASE")?;
    let port = match env::var("PG_PORT") {
        Ok(port) => port.parse()?,
        _ => 5432,
    };

    let (client, conn) = db::Config::new()
        .user(&user)
        .password(&pass)
        .host(&host)
        .dbname(&data)
        .port(port)
        .connect(db::NoTls)
        .await?;
    tokio::spawn(async move {
        if let Err(err) = conn.await {
            log::error!("database connection closed: {err}");
        }
    });

    log::info!("connected to database {data} at {host}:{port}");
    Ok(Provider::Postgres(client.into()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port = env::var("PORT")?.parse()?;

    let runtime = Runtime::new()?;
    let provider = runtime.block_on(init_provider())?;
    log::info!("serving reference data from the {}", provider.name());
    let app = Arc::new(App::new(provider)?);

    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
    runtime.block_on(async move {
        let listener = TcpListener::bind(addr).await?;
        log::info!("listening on {addr}");

        let mut stop = core::pin::pin!(tokio::signal::ctrl_c());
        loop {
            let (stream, peer) = tokio::select! {
                biased;
                result = &mut stop => {
                    result?;
                    break;
                }
                accepted = listener.accept() => match accepted {
                    Ok(pair) => pair,
                    Err(err) => {
                        log::error!("cannot accept connection: {err}");
                        continue;
                    }
                },
            };

            let app = app.clone();
            tokio::spawn(async move {
                let service = service::service_fn(move |req| {
                    let app = app.clone();
                    async move { Ok::<_, Infallible>(app.respond(req).await) }
                });
                if let Err(err) = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await {
                    log::error!("connection with {peer} failed: {err}");
                }
            });
        }

        log::info!("shutting down");
        anyhow::Ok(())
    })
}
