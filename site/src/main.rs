mod config;

use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

use crate::config::SiteConfig;

async fn spa(index: web::Data<std::path::PathBuf>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(index.get_ref())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SiteConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        cfg.dist.display(),
        cfg.host,
        cfg.port
    );

    let index = web::Data::new(cfg.dist.join("index.html"));
    let (dist, assets) = (cfg.dist.clone(), cfg.assets.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(index.clone())
            // static assets first so the bundle root does not shadow them
            .service(Files::new("/assets", &assets))
            .service(Files::new("/", &dist).index_file("index.html"))
            // anything else gets the page itself
            .default_service(web::get().to(spa))
    })
    .bind((cfg.host.as_str(), cfg.port))
    .with_context(|| format!("binding {}:{}", cfg.host, cfg.port))?
    .run()
    .await
    .context("server stopped")
}
