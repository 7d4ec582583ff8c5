use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A sport on sale, the only persisted entity.
///
/// Field order is the on-disk order. The Spanish keys written by older
/// versions of the catalog are accepted when reading. Keys this type does
/// not know are kept in `extra` and written back after `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Deporte {
    /// Identifier within the collection (case-sensitive, not enforced unique)
    #[serde(alias = "nombre")]
    pub name: String,
    /// Stored exactly as submitted; no numeric coercion. `null` when the
    /// record has none.
    #[serde(default, alias = "precio")]
    pub price: Value,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Deporte {
    pub fn new(name: impl Into<String>, price: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            extra: Map::new(),
        }
    }
}

/// Body of `POST /agregar`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateDeporte {
    #[serde(default, alias = "nombre")]
    #[validate(
        required(message = "Nombre y precio son requeridos"),
        length(min = 1, message = "Nombre y precio son requeridos")
    )]
    pub name: Option<String>,
    #[serde(default, alias = "precio")]
    #[validate(
        required(message = "Nombre y precio son requeridos"),
        custom(function = "is_truthy", message = "Nombre y precio son requeridos")
    )]
    pub price: Option<Value>,
}

/// Body of `PUT /editar/{name}`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePrice {
    #[serde(default, rename = "newPrice", alias = "nuevoPrecio")]
    #[validate(
        required(message = "Nuevo precio es requerido"),
        custom(function = "is_truthy", message = "Nuevo precio es requerido")
    )]
    pub new_price: Option<Value>,
}

/// Success body of `DELETE /borrar/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Acknowledgement {
    pub ok: bool,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Presence check for submitted values.
///
/// `false`, zero, and the empty string count as missing, the same as an
/// absent field or `null` (which serde already maps to `None`). Arrays and
/// objects are present even when empty.
pub fn is_truthy(value: &Value) -> Result<(), ValidationError> {
    let present = match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };

    if present {
        Ok(())
    } else {
        Err(ValidationError::new("falsy"))
    }
}
