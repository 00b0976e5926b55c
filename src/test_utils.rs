//! Shared test utilities for `Stockroom`.
//!
//! Provides an in-memory, request-recording implementation of the product
//! API seam plus small helpers, so the view-model can be exercised without
//! a running server.

#![allow(clippy::unwrap_used)]

use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use crate::{
    api::ProductApi,
    core::ConfirmPrompt,
    entities::Product,
    errors::{Error, Result},
};

/// One request observed by [`RecordingApi`], with its body where one exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    /// GET of the full collection
    List,
    /// POST with the draft body
    Create(Product),
    /// PUT addressed to an identifier, with the body
    Update(i64, Product),
    /// DELETE addressed to an identifier
    Delete(i64),
}

/// In-memory [`ProductApi`] that records every request and can be told to
/// fail reads or writes.
#[derive(Debug, Default)]
pub struct RecordingApi {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<ApiCall>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl RecordingApi {
    /// Creates a fake server already holding `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            products: Mutex::new(products),
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(next_id),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Every request observed so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Replaces the server-side collection without recording a call.
    pub fn replace_products(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = products;
    }

    /// Makes subsequent list requests fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent create/update/delete requests fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure(&self, url: &str) -> Error {
        Error::UnexpectedStatus {
            status: 500,
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ProductApi for RecordingApi {
    async fn list(&self) -> Result<Vec<Product>> {
        self.record(ApiCall::List);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(self.failure("recording:/api/products"));
        }
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        self.record(ApiCall::Create(product.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.failure("recording:/api/products"));
        }

        let mut created = product.clone();
        created.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.products.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, product: &Product) -> Result<Product> {
        self.record(ApiCall::Update(id, product.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.failure("recording:/api/products"));
        }

        let mut updated = product.clone();
        updated.id = Some(id);
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == Some(id)) {
            Some(existing) => {
                *existing = updated.clone();
                Ok(updated)
            }
            None => Err(Error::UnexpectedStatus {
                status: 404,
                url: format!("recording:/api/products/{id}"),
            }),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record(ApiCall::Delete(id));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.failure(&format!("recording:/api/products/{id}")));
        }

        self.products.lock().unwrap().retain(|p| p.id != Some(id));
        Ok(())
    }
}

/// [`ConfirmPrompt`] that always answers the same way and remembers what
/// it was asked.
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    /// Creates a prompt that always returns `answer`.
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }

    /// Messages presented so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answer
    }
}

/// A persisted product with sensible defaults for tests.
pub fn sample_product(id: i64, name: &str) -> Product {
    Product {
        id: Some(id),
        name: name.to_string(),
        category: "General".to_string(),
        quantity: 5,
        price: 9.99,
    }
}
