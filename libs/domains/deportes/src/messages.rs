//! Client-facing messages. These strings are part of the HTTP contract.

pub const NAME_AND_PRICE_REQUIRED: &str = "Nombre y precio son requeridos";
pub const NEW_PRICE_REQUIRED: &str = "Nuevo precio es requerido";
pub const NOT_FOUND: &str = "Deporte no encontrado";

// Per-operation storage failures; the underlying error is only logged.
pub const READ_FAILED: &str = "Error al leer los datos";
pub const CREATE_FAILED: &str = "Error al agregar el deporte";
pub const DELETE_FAILED: &str = "Error al borrar el deporte";
pub const UPDATE_FAILED: &str = "Error al editar el deporte";
