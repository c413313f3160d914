// order-service/tests/common/mod.rs
// In-memory dependencies with call counters and failure switches

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use order_service::cache::ReadCache;
use order_service::db::OrderStore;
use order_service::error::{
    CacheError, CacheResult, ProductError, ProductResult, PublishError, PublishResult, StoreError,
    StoreResult,
};
use order_service::events::EventPublisher;
use order_service::product::ProductLookup;
use order_service::{AppState, OrderService};
use shared::models::{NewOrder, Order, OrderStatus, Product};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price,
        qty: 10,
        created_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

pub fn order(id: &str, product_id: &str, total_price: f64, created_at: DateTime<Utc>) -> Order {
    Order {
        id: id.to_string(),
        product_id: product_id.to_string(),
        total_price,
        status: OrderStatus::Pending,
        created_at,
    }
}

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap() + ChronoDuration::seconds(secs)
}

// ── Product lookup ──

#[derive(Default)]
pub struct FakeProducts {
    products: Mutex<HashMap<String, Product>>,
    pub calls: AtomicUsize,
}

impl FakeProducts {
    pub fn with(products: &[Product]) -> Self {
        let fake = Self::default();
        for p in products {
            fake.products.lock().unwrap().insert(p.id.clone(), p.clone());
        }
        fake
    }
}

#[async_trait]
impl ProductLookup for FakeProducts {
    async fn get_product_by_id(&self, product_id: &str) -> ProductResult<Product> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.products
            .lock()
            .unwrap()
            .get(product_id)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(product_id.to_string()))
    }
}

// ── Order store ──

/// Assigns `created_at` from a logical clock, one second per write
#[derive(Default)]
pub struct FakeStore {
    orders: Mutex<Vec<Order>>,
    assign_id: Mutex<Option<String>>,
    clock: AtomicUsize,
    pub fail: AtomicBool,
    pub create_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
}

impl FakeStore {
    /// Replace the service-generated id on the next write
    pub fn assign_next_id(&self, id: &str) {
        *self.assign_id.lock().unwrap() = Some(id.to_string());
    }

    pub fn seed(&self, orders: Vec<Order>) {
        self.orders.lock().unwrap().extend(orders);
    }

    pub fn stored(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderStore for FakeStore {
    async fn create(&self, mut order: NewOrder) -> StoreResult<Order> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        if let Some(id) = self.assign_id.lock().unwrap().take() {
            order.id = id;
        }
        let tick = self.clock.fetch_add(1, Ordering::SeqCst) as i64;
        let order = order.into_order(ts(tick));
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn get_by_product_id(&self, product_id: &str) -> StoreResult<Vec<Order>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.product_id == product_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

// ── Read cache ──

#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, String>>,
    pub sets: Mutex<Vec<(String, String, Duration)>>,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
    pub get_calls: AtomicUsize,
}

impl FakeCache {
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn set_calls(&self) -> Vec<(String, String, Duration)> {
        self.sets.lock().unwrap().clone()
    }
}

fn redis_down() -> CacheError {
    CacheError::Redis(redis::RedisError::from((
        redis::ErrorKind::IoError,
        "connection refused",
    )))
}

#[async_trait]
impl ReadCache for FakeCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(redis_down());
        }
        Ok(self.entry(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.sets
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string(), ttl));
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(redis_down());
        }
        self.insert(key, value);
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> CacheResult<()> {
        let mut entries = self.entries.lock().unwrap();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }
}

// ── Event publisher ──

#[derive(Default)]
pub struct FakePublisher {
    pub published: Mutex<Vec<(String, String, Vec<u8>)>>,
    pub fail: AtomicBool,
    pub closed: AtomicBool,
    pub calls: AtomicUsize,
}

impl FakePublisher {
    pub fn messages(&self) -> Vec<(String, String, Vec<u8>)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for FakePublisher {
    async fn publish(&self, exchange: &str, routing_key: &str, payload: &[u8]) -> PublishResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.closed.load(Ordering::SeqCst) || self.fail.load(Ordering::SeqCst) {
            return Err(PublishError::Closed);
        }
        self.published.lock().unwrap().push((
            exchange.to_string(),
            routing_key.to_string(),
            payload.to_vec(),
        ));
        Ok(())
    }

    async fn close(&self) -> PublishResult<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

// ── Wiring ──

pub struct Harness {
    pub products: Arc<FakeProducts>,
    pub store: Arc<FakeStore>,
    pub cache: Arc<FakeCache>,
    pub publisher: Arc<FakePublisher>,
}

impl Harness {
    pub fn new(products: &[Product]) -> Self {
        Self {
            products: Arc::new(FakeProducts::with(products)),
            store: Arc::new(FakeStore::default()),
            cache: Arc::new(FakeCache::default()),
            publisher: Arc::new(FakePublisher::default()),
        }
    }

    pub fn service(&self) -> OrderService {
        OrderService::new(
            self.store.clone(),
            self.products.clone(),
            self.cache.clone(),
            self.publisher.clone(),
        )
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.service())
    }
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
