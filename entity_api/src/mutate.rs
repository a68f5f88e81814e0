use crate::error::Error;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Value,
};
use std::collections::HashMap;

/// Applies an `UpdateMap` to an active model, touching only the columns the
/// map names, and persists the result.
///
/// Columns absent from the map keep their current value, so callers can
/// express a partial update without reassembling the whole record.
pub async fn update<A, C>(
    db: &DatabaseConnection,
    mut active_model: A,
    update_map: UpdateMap,
) -> Result<<A::Entity as EntityTrait>::Model, Error>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    C: ColumnTrait,
    A::Entity: EntityTrait<Column = C>,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    for column in C::iter() {
        if let Some(value) = update_map.get(&column.to_string()) {
            active_model.set(column, value.clone());
        }
    }
    Ok(active_model.update(db).await?)
}

/// Column-name to value map describing a partial update.
///
/// Presence of a key decides whether a column is written at all; a present
/// value whose inner payload is `None` (e.g. `Value::String(None)`) writes
/// SQL NULL. This keeps "field not sent" and "field explicitly cleared"
/// distinct all the way down to the query.
#[derive(Default)]
pub struct UpdateMap {
    map: HashMap<String, Option<Value>>,
}

impl UpdateMap {
    /// Creates a new empty UpdateMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a value from the map by its key, flattening the inner
    /// `Option` so callers see a value only when the key is present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).and_then(|opt| opt.as_ref())
    }

    /// Inserts a key-value pair into the map, overwriting any previous entry.
    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }
}

/// Conversion from a typed params struct into an `UpdateMap`, implemented by
/// each endpoint's update parameters.
pub trait IntoUpdateMap {
    /// Converts the implementing type into an UpdateMap.
    fn into_update_map(self) -> UpdateMap;
}
