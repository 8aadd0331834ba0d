//! End-to-end polling tests against a canned local HTTP responder
//!
//! Exercises the full fetch→decode→merge→render path: real sockets, real
//! JSON bodies, the shared state and renderer the scheduler wires up.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use growdash_client::{HttpConfig, HttpSource, Scheduler};
use growdash_core::{FixedClock, RecordingRenderer, SensorKind};

const READINGS_BODY: &str = r#"{
    "soil_moisture": 41.0,
    "temperature": 22.5,
    "light": 12000.0,
    "soil_status": "Online",
    "temp_status": "Online",
    "light_status": "Offline",
    "soil_current": 41.0,
    "temp_current": 22.53
}"#;

const ALERTS_BODY: &str = r#"[
    {"time": "2024-06-01 10:00:00", "type": "Low Moisture", "sensor": "Soil", "value": 12.0},
    {"time": "2024-06-01 10:05:00", "type": "Low Light", "sensor": "Light", "value": 400.0}
]"#;

/// Serve canned responses per path prefix on a background thread, forever.
fn spawn_stub(routes: Vec<(&'static str, u16, &'static str)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            respond(stream, &routes);
        }
    });

    addr
}

fn respond(mut stream: TcpStream, routes: &[(&str, u16, &str)]) {
    let mut head = Vec::new();
    let mut buf = [0u8; 512];
    // A GET request is just headers; read until the blank line
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&head);
    let path = head.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = routes
        .iter()
        .find(|(prefix, _, _)| path.starts_with(prefix))
        .map(|(_, status, body)| (*status, *body))
        .unwrap_or((404, ""));

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        if status == 200 { "OK" } else { "Error" },
        body.len(),
    );
    let _ = stream.write_all(response.as_bytes());
}

fn scheduler_for(addr: SocketAddr) -> (Scheduler, Arc<Mutex<RecordingRenderer>>) {
    let handle = Arc::new(Mutex::new(RecordingRenderer::new()));
    let config = HttpConfig::new(format!("http://{addr}")).timeout_secs(5);
    let source = HttpSource::new(config).unwrap();
    let scheduler = Scheduler::new(source, Box::new(Arc::clone(&handle)))
        .with_clock(Arc::new(FixedClock::new(0)));
    (scheduler, handle)
}

#[tokio::test(flavor = "multi_thread")]
async fn poll_once_merges_and_renders_both_payloads() {
    let addr = spawn_stub(vec![
        ("/api/readings", 200, READINGS_BODY),
        ("/alerts", 200, ALERTS_BODY),
    ]);
    let (scheduler, renderer) = scheduler_for(addr);

    scheduler.poll_once().await;

    let state = scheduler.state();
    let state = state.lock().unwrap();
    for kind in SensorKind::ALL {
        assert_eq!(state.series(kind).len(), 1);
    }
    assert_eq!(state.series(SensorKind::Temperature).last().unwrap().value, 22.5);
    assert_eq!(state.status(SensorKind::Light).class, "offline");
    assert_eq!(state.status(SensorKind::Light).level, "N/A");
    assert_eq!(state.status(SensorKind::Temperature).level, "22.5°C");
    assert_eq!(state.alerts().len(), 2);
    assert_eq!(state.alerts()[1].value, "400.0");
    drop(state);

    let recorded = renderer.lock().unwrap();
    let chart = recorded.chart(SensorKind::Soil).unwrap();
    assert_eq!(chart.points.len(), 1);
    assert_eq!(chart.points[0].label.as_str(), "00:00:00");
    assert_eq!(recorded.alert_rows().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_polls_accumulate_readings_but_replace_alerts() {
    let addr = spawn_stub(vec![
        ("/api/readings", 200, READINGS_BODY),
        ("/alerts", 200, ALERTS_BODY),
    ]);
    let (scheduler, renderer) = scheduler_for(addr);

    scheduler.poll_once().await;
    scheduler.poll_once().await;

    let state = scheduler.state();
    let state = state.lock().unwrap();
    assert_eq!(state.series(SensorKind::Soil).len(), 2);
    assert_eq!(state.alerts().len(), 2);
    drop(state);

    let recorded = renderer.lock().unwrap();
    // Charts were redrawn, not appended to
    assert_eq!(recorded.chart(SensorKind::Soil).unwrap().points.len(), 2);
    assert_eq!(recorded.chart(SensorKind::Soil).unwrap().draws, 2);
    assert_eq!(recorded.alert_renders(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_alerts_endpoint_does_not_block_readings() {
    let addr = spawn_stub(vec![
        ("/api/readings", 200, READINGS_BODY),
        ("/alerts", 500, ""),
    ]);
    let (scheduler, renderer) = scheduler_for(addr);

    scheduler.poll_once().await;

    let state = scheduler.state();
    let state = state.lock().unwrap();
    assert_eq!(state.series(SensorKind::Soil).len(), 1);
    assert!(state.alerts().is_empty());
    drop(state);

    // The alert table was never rendered; the charts were
    let recorded = renderer.lock().unwrap();
    assert!(recorded.alert_rows().is_none());
    assert!(recorded.chart(SensorKind::Soil).is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_readings_body_is_a_silent_no_op() {
    let addr = spawn_stub(vec![
        ("/api/readings", 200, r#"{"soil_moisture": "not a number"}"#),
        ("/alerts", 200, "[]"),
    ]);
    let (scheduler, renderer) = scheduler_for(addr);

    scheduler.poll_once().await;

    let state = scheduler.state();
    let state = state.lock().unwrap();
    for kind in SensorKind::ALL {
        assert_eq!(state.series(kind).len(), 0);
    }
    // Empty alert list still renders an empty table
    assert!(state.alerts().is_empty());
    drop(state);

    assert_eq!(renderer.lock().unwrap().alert_rows().unwrap().len(), 0);
}
