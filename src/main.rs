//! The spendwatch server binary.

use std::net::SocketAddr;

use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spendwatch::{
    AppState, AuthEvent, ExpenseService, UserId, build_router, graceful_shutdown,
    stores::{ExpenseStore, InMemoryExpenseStore, sample_expenses},
};

/// A personal-finance tracker serving a JSON API over an in-memory store.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    address: SocketAddr,

    /// The local timezone as a canonical timezone name, e.g.
    /// "Pacific/Auckland". Aggregation windows are anchored to this
    /// timezone's calendar day.
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// The user to sign in at startup, standing in for the identity
    /// service.
    #[arg(long, default_value = "demo-user")]
    user_id: String,

    /// Seed the store with a set of sample expenses.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let user = UserId::new(args.user_id);
    let mut store = InMemoryExpenseStore::new();

    if args.demo {
        let today = spendwatch::timezone::local_today(&args.timezone)
            .expect("The --timezone argument must be a valid canonical timezone name.");
        for new_expense in sample_expenses(today) {
            store
                .insert(&user, &new_expense)
                .expect("Could not seed sample expense");
        }
        tracing::info!("seeded {} sample expenses", store.len());
    }

    let mut service = ExpenseService::new(Box::new(store), &args.timezone)
        .expect("The --timezone argument must be a valid canonical timezone name.");
    service
        .handle_auth_event(AuthEvent::SignedIn(user))
        .expect("Could not load expenses for the startup user.");

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(AppState::new(service));

    tracing::info!("server listening on {}", args.address);
    axum_server::bind(args.address)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start the server.");
}
