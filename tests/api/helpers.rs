use chrono::{Local, Months};
use once_cell::sync::Lazy;
use regform::configuration::get_configuration;
use regform::startup::Application;
use regform::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // The sink is part of the type returned by `get_subscriber`, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_registration<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/registrations", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_clear(&self) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/registrations/clear", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_page(&self) -> reqwest::Response {
        self.api_client
            .get(&self.address)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_page_html(&self) -> String {
        self.get_page().await.text().await.unwrap()
    }
}

/// Every test gets its own application, hence its own page and results table.
pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed. All other invocations
    // will instead skip execution.
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

/// A birth date `years` years before today, in the format the date picker sends.
pub fn years_ago(years: u32) -> String {
    (Local::now().date_naive() - Months::new(years * 12))
        .format("%Y-%m-%d")
        .to_string()
}

/// Number of result rows currently rendered in the table.
pub fn row_count(html: &str) -> usize {
    html.matches(r#"<tr class="result">"#).count()
}
