//! Shared fixtures for the service integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use rincon_core::config::AppConfig;
use rincon_core::traits::KeyValueStore;
use rincon_service::account::{AccountService, RegisterRequest};
use rincon_service::availability::AvailabilityEngine;
use rincon_service::booking::BookingService;
use rincon_service::bootstrap;
use rincon_service::catalog::RoomCatalog;
use rincon_service::complaint::ComplaintService;
use rincon_service::ledger::ReservationLedger;
use rincon_service::SessionContext;
use rincon_storage::MemoryStore;

/// The fully wired system over one fresh in-memory store, initialized the
/// way a real session starts.
pub struct TestApp {
    pub store: Arc<dyn KeyValueStore>,
    pub catalog: RoomCatalog,
    pub ledger: ReservationLedger,
    pub engine: AvailabilityEngine,
    pub booking: BookingService,
    pub accounts: AccountService,
    pub complaints: ComplaintService,
}

impl TestApp {
    pub fn new() -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        bootstrap::initialize(store.as_ref(), &AppConfig::default()).expect("initialize");

        let catalog = RoomCatalog::new(Arc::clone(&store));
        let ledger = ReservationLedger::new(Arc::clone(&store));
        let engine = AvailabilityEngine::new(catalog.clone(), ledger.clone());
        let booking = BookingService::new(engine.clone(), ledger.clone());
        let accounts = AccountService::new(Arc::clone(&store));
        let complaints = ComplaintService::new(Arc::clone(&store));

        Self {
            store,
            catalog,
            ledger,
            engine,
            booking,
            accounts,
            complaints,
        }
    }

    /// Session for the seeded admin account.
    pub fn admin(&self) -> SessionContext {
        self.accounts
            .login_session("admin@hotel.com", "admin2708")
            .expect("seeded admin can sign in")
    }

    /// Register a guest and sign them in.
    pub fn guest(&self, email: &str, identification: &str) -> SessionContext {
        let user = self
            .accounts
            .register(&RegisterRequest {
                identification: identification.to_string(),
                name: "Guest de Prueba".to_string(),
                nationality: "Colombiana".to_string(),
                email: email.to_string(),
                phone: "+57 310 000 0000".to_string(),
                password: "secreta1".to_string(),
            })
            .expect("guest registration");
        SessionContext::for_user(&user)
    }
}

/// Shorthand date constructor. Stays in the far future so the past-date
/// rule never trips in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
