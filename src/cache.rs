use crate::engines::StoreEngine;
use crate::error::{Error, Result};
use crate::history::CallHistory;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl Value {
    // numbers go to the store in their decimal textual encoding, text as
    // utf-8, bytes untouched
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Value::Text(s) => s.into_bytes(),
            Value::Bytes(b) => b,
            Value::Int(n) => n.to_string().into_bytes(),
            Value::Float(x) => x.to_string().into_bytes(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Value {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Value {
        Value::Bytes(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

pub struct Cache<E: StoreEngine> {
    engine: E,
    history: CallHistory,
}

impl<E: StoreEngine> Cache<E> {
    // takes over the store and wipes whatever the namespace held before
    pub fn new(engine: E) -> Result<Cache<E>> {
        let mut cache = Cache::attach(engine);
        cache.engine.flushdb()?;
        Ok(cache)
    }

    // joins an existing namespace without resetting it
    pub fn attach(engine: E) -> Cache<E> {
        Cache {
            engine,
            history: CallHistory::new("Cache.store"),
        }
    }

    pub fn store<V: Into<Value>>(&mut self, value: V) -> Result<String> {
        let value = value.into();
        let input = format!("{:?}", value);
        let history = &self.history;
        let engine = &mut self.engine;
        history.record(engine, input, move |engine| {
            let key = Uuid::new_v4().to_string();
            engine.set(key.clone(), value.into_bytes())?;
            Ok(key)
        })
    }

    // absent keys come back as None; decode never runs on a miss
    pub fn retrieve<T, F>(&mut self, key: &str, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        match self.engine.get(key.to_string())? {
            Some(raw) => Ok(Some(decode(raw)?)),
            None => Ok(None),
        }
    }

    pub fn retrieve_raw(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.retrieve(key, Ok)
    }

    pub fn retrieve_text(&mut self, key: &str) -> Result<Option<String>> {
        self.retrieve(key, |raw| {
            String::from_utf8(raw).map_err(|err| Error::Format {
                target: "utf-8 text",
                detail: err.to_string(),
            })
        })
    }

    pub fn retrieve_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.retrieve(key, |raw| {
            let text = String::from_utf8(raw).map_err(|err| Error::Format {
                target: "an integer",
                detail: err.to_string(),
            })?;
            text.parse::<i64>().map_err(|err| Error::Format {
                target: "an integer",
                detail: err.to_string(),
            })
        })
    }

    // recorded (input, output) pairs for the store operation, in call order
    pub fn history(&mut self) -> Result<Vec<(String, String)>> {
        let history = &self.history;
        let engine = &mut self.engine;
        history.replay(engine)
    }
}
