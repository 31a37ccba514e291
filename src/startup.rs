use crate::configuration::Settings;
use crate::page::PageSession;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Mutex;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        let listener = TcpListener::bind(&address)?;
        //Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(listener, configuration.form.minimum_age)?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the application
    /// is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// The page lives in application state for as long as the server runs: every worker shares the same
/// `web::Data`, so there is exactly one page and one results table per process.
pub fn run(listener: TcpListener, minimum_age: u32) -> Result<Server, std::io::Error> {
    let session = web::Data::new(Mutex::new(PageSession::new(minimum_age)));
    let server = HttpServer::new(move || {
        App::new()
            // Instead of `Logger::default`
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/", web::get().to(routes::registration_page))
            .route("/registrations", web::post().to(routes::submit_registration))
            .route("/registrations/clear", web::post().to(routes::clear_form))
            .app_data(session.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
