//! Scheme hash table
//!
//! Separate chaining: every bucket is an owned `Vec`. The table doubles and
//! rehashes every live entry before an insert that would push the load
//! factor past `MAX_LOAD_FACTOR`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::model::SchemeEntity;

pub const DEFAULT_CAPACITY: usize = 16;
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Named schemes indexed by hash of their name
#[derive(Debug, Clone)]
pub struct SchemeTable {
    buckets: Vec<Vec<SchemeEntity>>,
    size: usize,
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SchemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with `capacity` buckets (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); capacity.max(1)],
            size: 0,
        }
    }

    fn bucket_index(name: &str, capacity: usize) -> usize {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        (hasher.finish() % capacity as u64) as usize
    }

    fn bucket(&self, name: &str) -> &Vec<SchemeEntity> {
        &self.buckets[Self::bucket_index(name, self.buckets.len())]
    }

    fn bucket_mut(&mut self, name: &str) -> &mut Vec<SchemeEntity> {
        let index = Self::bucket_index(name, self.buckets.len());
        &mut self.buckets[index]
    }

    /// Insert a scheme; returns false (no-op) for a blank or duplicate name
    pub fn insert(&mut self, scheme: SchemeEntity) -> bool {
        if scheme.name().trim().is_empty() {
            tracing::warn!(pattern = scheme.pattern(), "rejected scheme with blank name");
            return false;
        }
        if self.contains(scheme.name()) {
            tracing::warn!(scheme = scheme.name(), "duplicate scheme ignored");
            return false;
        }

        while (self.size + 1) as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR {
            self.grow();
        }

        self.bucket_mut(scheme.name()).push(scheme);
        self.size += 1;
        true
    }

    pub fn search(&self, name: &str) -> Option<&SchemeEntity> {
        self.bucket(name).iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    /// Replace the pattern of `name` in place; false if absent
    pub fn modify(&mut self, name: &str, new_pattern: impl Into<String>) -> bool {
        match self.bucket_mut(name).iter_mut().find(|s| s.name() == name) {
            Some(scheme) => {
                scheme.set_pattern(new_pattern);
                true
            }
            None => false,
        }
    }

    /// Remove `name`; false if absent
    pub fn delete(&mut self, name: &str) -> bool {
        let bucket = self.bucket_mut(name);
        let Some(position) = bucket.iter().position(|s| s.name() == name) else {
            return false;
        };
        bucket.remove(position);
        self.size -= 1;
        true
    }

    /// Lazy iteration over live schemes; order is bucket order, not a contract
    pub fn all_schemes(&self) -> Schemes<'_> {
        Schemes {
            inner: self.buckets.iter().flatten(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, vec![Vec::new(); new_capacity]);
        for scheme in old.into_iter().flatten() {
            let index = Self::bucket_index(scheme.name(), new_capacity);
            self.buckets[index].push(scheme);
        }
        tracing::debug!(
            capacity = new_capacity,
            size = self.size,
            "scheme table grown"
        );
    }
}

/// Iterator over the live schemes of a `SchemeTable`
pub struct Schemes<'a> {
    inner: std::iter::Flatten<std::slice::Iter<'a, Vec<SchemeEntity>>>,
}

impl<'a> Iterator for Schemes<'a> {
    type Item = &'a SchemeEntity;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
