//! Box Office HTTP server.
//!
//! # Usage
//!
//! ```bash
//! BOXOFFICE__PAYMENT__RAZORPAY_KEY_ID=rzp_test_... \
//! BOXOFFICE__PAYMENT__RAZORPAY_KEY_SECRET=... \
//! cargo run --bin boxoffice
//! ```
//!
//! A missing key secret does not stop the server; payment endpoints answer
//! 500 until it is configured.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use boxoffice::adapters::http::{app_router, PaymentAppState};
use boxoffice::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use boxoffice::config::AppConfig;
use boxoffice::domain::payment::PaymentSignatureVerifier;
use boxoffice::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.server);

    if let Err(e) = run(config).await {
        tracing::error!("Server failed: {e}");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let timeout = config.server.request_timeout();
    let razorpay = RazorpayConfig::from_payment_config(&config.payment);
    if razorpay.is_none() {
        tracing::warn!("Razorpay credentials not configured; /create-order will answer 500");
    }
    let verifier = PaymentSignatureVerifier::from_secret(config.payment.signing_secret().cloned());
    if !verifier.is_configured() {
        tracing::warn!("Razorpay key secret not configured; /verify-payment will answer 500");
    }
    if config.payment.is_live_mode() {
        tracing::info!("Razorpay live mode");
    }

    let gateway = RazorpayGateway::new(razorpay, timeout)?;
    let state = PaymentAppState::new(Arc::new(gateway), verifier);
    let app = app_router(state, &config);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        maintenance_mode = config.features.maintenance_mode,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
