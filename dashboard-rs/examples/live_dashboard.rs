use std::sync::Arc;

use activity_rs::adapters::ActivityMock;
use activity_rs::ActivityService;
use chart_rs::Size;
use dashboard_rs::source::{MockSensorSource, MockSourceConfig};
use dashboard_rs::{connect_session, fetch_history, DashboardConfig, DashboardSession};
use tokio::time::Duration;

const CHART_SIZE: Size = Size {
    width: 320.0,
    height: 160.0,
};

// Usage: live_dashboard [config.json]
// Without a configuration file the dashboard runs against a scripted mock service.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let source = Arc::new(MockSensorSource::new(MockSourceConfig::default())?);
    let emitter = source.start();

    match std::env::args().nth(1) {
        Some(path) => {
            let mut session = connect_session(DashboardConfig::from_json_file(path)?)?;
            run(&mut session, &source).await?;
            for record in fetch_history(session.service()).await {
                println!("{} {} {}", record.timestamp, record.activity, record.duration);
            }
        }
        None => {
            let config = DashboardConfig::default();
            let service = ActivityService::new(
                ActivityMock::scripted("demo", &["Walking", "Walking", "Running"], vec![]),
                config.bands.clone(),
            );
            let mut session = DashboardSession::new(config, Arc::new(service));
            run(&mut session, &source).await?;
        }
    }

    emitter.shutdown().await;
    Ok(())
}

async fn run<C>(
    session: &mut DashboardSession<C>,
    source: &MockSensorSource,
) -> Result<(), Box<dyn std::error::Error>>
where
    C: activity_rs::ports::ActivityPort + 'static,
{
    session.attach(source.publisher());
    session.start();

    for _ in 0..5 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let view = session.view(CHART_SIZE);
        println!(
            "{:<16} accel {:>5} gyro {:>5}",
            view.status, view.accel.gauge.text, view.gyro.gauge.text
        );
    }

    let view = session.view(CHART_SIZE);
    println!("{}", serde_json::to_string_pretty(&view.accel.gauge)?);

    session.stop().await;
    session.detach(source.publisher());
    Ok(())
}
