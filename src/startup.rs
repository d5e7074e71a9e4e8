use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{
        create_account, create_customer, create_product, edit_customer, edit_order_status, edit_product,
        health_check, list_all_products, post_order, read_account, read_customer, read_customer_orders,
        read_order, read_order_items, read_product, remove_customer, remove_product
    },
    utils::{get_connection_pool, run_migrations, DbPool}
};

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    // Builds the pool, brings the schema up to date and binds the listener; port 0 picks a free port
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)?;
        run_migrations(&pool).await?;

        let host = settings.application.host;
        let listener = TcpListener::bind((host.as_str(), settings.application.port))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, pool)?;

        Ok(Application{
            host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

pub fn run(listener: TcpListener, pool: DbPool) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/customers")
                    .route("", web::post().to(create_customer))
                    .route("/{id}", web::get().to(read_customer))
                    .route("/{id}", web::put().to(edit_customer))
                    .route("/{id}", web::delete().to(remove_customer))
                    .route("/{id}/account", web::post().to(create_account))
                    .route("/{id}/account", web::get().to(read_account))
                    .route("/{id}/orders", web::get().to(read_customer_orders))
            )
            .service(
                web::scope("/products")
                    .route("", web::post().to(create_product))
                    .route("", web::get().to(list_all_products))
                    .route("/{id}", web::get().to(read_product))
                    .route("/{id}", web::put().to(edit_product))
                    .route("/{id}", web::delete().to(remove_product))
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(post_order))
                    .route("/{id}", web::get().to(read_order))
                    .route("/{id}", web::put().to(edit_order_status))
                    .route("/{id}/items", web::get().to(read_order_items))
            )
            .app_data(pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
