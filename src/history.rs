use crate::engines::StoreEngine;
use crate::Result;

// Records every call of a wrapped operation into two append-only lists on
// the store: "<name>:inputs" holds the Debug rendering of the arguments,
// "<name>:outputs" the ToString rendering of the result. Entries at the
// same index belong to the same call; a failed call leaves an input entry
// with no matching output.
pub struct CallHistory {
    name: String,
}

impl CallHistory {
    pub fn new(name: &str) -> CallHistory {
        CallHistory {
            name: name.to_string(),
        }
    }

    pub fn inputs_key(&self) -> String {
        format!("{}:inputs", self.name)
    }

    pub fn outputs_key(&self) -> String {
        format!("{}:outputs", self.name)
    }

    // input lands before the operation runs, the output only after it
    // succeeds; failures pass through untouched
    pub fn record<E, T, F>(&self, engine: &mut E, input: String, op: F) -> Result<T>
    where
        E: StoreEngine,
        T: ToString,
        F: FnOnce(&mut E) -> Result<T>,
    {
        engine.rpush(self.inputs_key(), input)?;
        let out = op(engine)?;
        engine.rpush(self.outputs_key(), out.to_string())?;
        Ok(out)
    }

    pub fn replay<E: StoreEngine>(&self, engine: &mut E) -> Result<Vec<(String, String)>> {
        let inputs = engine.lrange(self.inputs_key())?;
        let outputs = engine.lrange(self.outputs_key())?;
        Ok(inputs.into_iter().zip(outputs).collect())
    }
}
