use super::StoreEngine;
use crate::Result;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemStore {
    data: HashMap<String, Vec<u8>>,
    lists: HashMap<String, Vec<String>>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore::default()
    }
}

impl StoreEngine for MemStore {
    fn set(&mut self, key: String, val: Vec<u8>) -> Result<()> {
        self.data.insert(key, val);
        Ok(())
    }

    fn get(&mut self, key: String) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(&key).cloned())
    }

    fn rpush(&mut self, key: String, val: String) -> Result<u64> {
        let list = self.lists.entry(key).or_default();
        list.push(val);
        Ok(list.len() as u64)
    }

    fn lrange(&mut self, key: String) -> Result<Vec<String>> {
        Ok(self.lists.get(&key).cloned().unwrap_or_default())
    }

    fn flushdb(&mut self) -> Result<()> {
        self.data.clear();
        self.lists.clear();
        Ok(())
    }
}
